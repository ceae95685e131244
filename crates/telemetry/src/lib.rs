// Path: crates/telemetry/src/lib.rs
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

//! # HLINK Telemetry
//!
//! Structured logging initialisation for the HLINK console binary.

/// The initialization routine for global structured logging.
pub mod init;

pub use init::{build_filter, init_tracing};
