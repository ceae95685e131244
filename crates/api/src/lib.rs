// Path: crates/api/src/lib.rs

//! # HLINK API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]
#![deny(missing_docs)]
//! # HLINK API
//!
//! Core traits for the HLINK console. The controller in `hlink-cli` is written
//! against these seams only, so the JSON-RPC implementations in `hlink-client`
//! can be swapped for in-memory doubles in tests.

/// Defines the `BlockSource` trait used by the block height poller.
pub mod chain;
/// Defines the `TokenGateway` trait, one method per consumed contract function.
pub mod gateway;
/// Defines wallet providers, the connector that hands out signers, and `Signer`.
pub mod wallet;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::chain::BlockSource;
    pub use crate::gateway::TokenGateway;
    pub use crate::wallet::{Signer, WalletConnector, WalletProvider};
}
