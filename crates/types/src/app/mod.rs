// Path: crates/types/src/app/mod.rs
//! Core application-level data structures.

/// Banners and the catalogue of user actions.
pub mod action;
/// Chain-wide display values.
pub mod chain;
/// Transaction request and receipt shapes.
pub mod tx;
/// Per-user records read from and written to the token contract.
pub mod user;

pub use action::{ActionKind, Banner};
pub use chain::ChainStatus;
pub use tx::{PendingTx, TransactionRequest, TxReceipt};
pub use user::{format_timestamp, LockType, UserInfo, UserParams};
