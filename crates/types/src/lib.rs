// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
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

//! # HLINK Types
//!
//! This crate is the foundational library for the HLINK console, containing the
//! data shapes exchanged with the token contract, fixed-point unit conversion,
//! configuration objects and every error enum used across the workspace.
//!
//! ## Architectural Role
//!
//! As the base crate, `hlink-types` has no knowledge of transports or wallets.
//! Every other crate depends on it, which keeps shapes like `UserInfo`,
//! `ChainStatus` and `GatewayError` defined in exactly one place.

/// Application-level data: chain status, per-user records, banners and actions.
pub mod app;
/// Configuration structures for the console and its environment overrides.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Fixed-point (18-decimal) amount conversion and display formatting.
pub mod units;

pub use alloy_primitives::{Address, Bytes, B256, U256, U64};

/// The token symbol appended to every displayed amount.
pub const TOKEN_SYMBOL: &str = "HLINK";

/// The contract's hard supply cap, in whole tokens.
pub const MAX_SUPPLY_TOKENS: u64 = 1_000_000_000;
