// Path: crates/client/src/lib.rs
//! # HLINK Client Crate Lints
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
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # HLINK Client
//!
//! JSON-RPC implementations of the `hlink-api` traits: a read-only chain
//! reader, the token contract gateway, and a wallet connector that talks to a
//! wallet provider endpoint.

pub mod abi;
pub mod gateway;
pub mod reader;
pub mod revert;
pub mod rpc;
pub mod wallet;

// Re-export for convenience
pub use gateway::ContractGateway;
pub use reader::ChainReader;
pub use rpc::JsonRpcClient;
pub use wallet::{InjectedWalletConnector, RpcWallet};
