// Path: crates/cli/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # HLINK Console Library
//!
//! The interaction layer between an operator and the HLINK token contract.
//!
//! - `controller`: the per-action state machine (validate, hold the busy slot
//!   for writes, call the gateway, await confirmation, settle a banner).
//! - `banner`: the single self-expiring status message.
//! - `poller`: the background block height poll.
//! - `view`: plain-text rendering of everything above.
//! - `session`: wiring of the JSON-RPC implementations from a `ConsoleConfig`.
//!
//! The binary in `main.rs` drives these through one-shot subcommands or an
//! interactive console.

pub mod banner;
pub mod controller;
pub mod poller;
pub mod session;
pub mod view;

pub use banner::BannerBoard;
pub use controller::{Forms, InteractionController, ViewState};
pub use poller::{BlockHeightPoller, PollerHandle};
pub use session::Session;
