// Path: crates/api/src/chain.rs
//! Read-only chain access.

use async_trait::async_trait;
use hlink_types::error::RpcError;

/// Anything that can report the current block height.
#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Returns the latest block number known to the endpoint.
    async fn block_number(&self) -> Result<u64, RpcError>;
}
