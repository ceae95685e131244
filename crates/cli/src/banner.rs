// Path: crates/cli/src/banner.rs

//! The single transient status message.
//!
//! Every `show` bumps a generation counter and arms a one-shot timer for that
//! generation. A timer only clears the board if no newer banner has been shown
//! since it was armed, so a replaced banner never cuts its successor short.

use hlink_types::app::Banner;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug)]
struct Inner {
    generation: Mutex<u64>,
    tx: watch::Sender<Option<Banner>>,
}

/// Holds at most one banner and clears it after a fixed lifetime.
#[derive(Debug, Clone)]
pub struct BannerBoard {
    inner: Arc<Inner>,
    ttl: Duration,
}

impl BannerBoard {
    /// Creates an empty board whose banners live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                generation: Mutex::new(0),
                tx,
            }),
            ttl,
        }
    }

    /// The banner lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replaces the current banner and schedules its removal.
    ///
    /// Outside a Tokio runtime the banner is shown but never expires.
    pub fn show(&self, banner: Banner) {
        if banner.is_error {
            tracing::warn!(target: "banner", "{}", banner.message);
        } else {
            tracing::info!(target: "banner", "{}", banner.message);
        }

        let generation = {
            let mut current = self
                .inner
                .generation
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *current += 1;
            self.inner.tx.send_replace(Some(banner));
            *current
        };

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let board = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(board.ttl).await;
                board.expire(generation);
            });
        }
    }

    /// The banner currently on display.
    pub fn current(&self) -> Option<Banner> {
        self.inner.tx.borrow().clone()
    }

    /// Removes whatever banner is on display.
    pub fn clear(&self) {
        let mut current = self
            .inner
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *current += 1;
        self.inner.tx.send_replace(None);
    }

    /// A receiver notified on every change, including expiry.
    pub fn subscribe(&self) -> watch::Receiver<Option<Banner>> {
        self.inner.tx.subscribe()
    }

    fn expire(&self, generation: u64) {
        let current = self
            .inner
            .generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *current == generation {
            self.inner.tx.send_replace(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn banner_expires_after_ttl() {
        let board = BannerBoard::new(Duration::from_secs(5));
        board.show(Banner::info("Mint successful!"));

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(board.current(), Some(Banner::info("Mint successful!")));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn replacement_resets_the_clock() {
        let board = BannerBoard::new(Duration::from_secs(5));
        board.show(Banner::info("Transaction submitted, waiting for confirmation..."));

        tokio::time::sleep(Duration::from_secs(3)).await;
        board.show(Banner::error("Mint failed: execution reverted"));

        // The first timer fires here but the banner it armed is gone.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(
            board.current().map(|b| b.message),
            Some("Mint failed: execution reverted".to_string())
        );

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_expiry() {
        let board = BannerBoard::new(Duration::from_secs(5));
        let mut rx = board.subscribe();
        board.show(Banner::error("boom"));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_some());
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[test]
    fn manual_clear_without_runtime() {
        let board = BannerBoard::new(Duration::from_secs(5));
        board.show(Banner::info("hello"));
        assert!(board.current().is_some());
        board.clear();
        assert!(board.current().is_none());
    }
}
