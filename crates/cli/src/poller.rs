// Path: crates/cli/src/poller.rs

//! Background block height poll.

use hlink_api::chain::BlockSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Spawns the recurring block height read.
pub struct BlockHeightPoller;

impl BlockHeightPoller {
    /// Polls `source` immediately and then every `interval` until the returned
    /// handle is shut down or dropped.
    ///
    /// Failures are logged and the last known height is kept; they never reach
    /// the banner.
    pub fn spawn(source: Arc<dyn BlockSource>, interval: Duration) -> PollerHandle {
        let (height_tx, height_rx) = watch::channel(None);
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            tracing::info!(
                target: "poller",
                "Block height poller started ({}s interval).",
                interval.as_secs()
            );
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match source.block_number().await {
                            Ok(height) => {
                                tracing::debug!(target: "poller", height, "block height");
                                height_tx.send_replace(Some(height));
                            }
                            Err(e) => {
                                tracing::warn!(target: "poller", "Failed to fetch block number: {}", e);
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
            tracing::info!(target: "poller", "Block height poller stopped.");
        });

        PollerHandle {
            shutdown: shutdown_tx,
            height: height_rx,
            task: Some(task),
        }
    }
}

/// Owns the poll task. Dropping the handle stops it.
#[derive(Debug)]
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    height: watch::Receiver<Option<u64>>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// The most recent successfully read height.
    pub fn latest(&self) -> Option<u64> {
        *self.height.borrow()
    }

    /// A receiver notified whenever a new height is read.
    pub fn subscribe(&self) -> watch::Receiver<Option<u64>> {
        self.height.clone()
    }

    /// Signals the task and waits for it to finish.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
