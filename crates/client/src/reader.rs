// Path: crates/client/src/reader.rs

use crate::rpc::JsonRpcClient;
use alloy_primitives::U64;
use async_trait::async_trait;
use hlink_api::chain::BlockSource;
use hlink_types::error::RpcError;
use std::sync::Arc;

/// Read-only access to the chain through the public RPC endpoint.
#[derive(Debug, Clone)]
pub struct ChainReader {
    rpc: Arc<JsonRpcClient>,
}

impl ChainReader {
    /// Wraps a shared RPC client.
    pub fn new(rpc: Arc<JsonRpcClient>) -> Self {
        Self { rpc }
    }

    /// The underlying RPC client.
    pub fn rpc(&self) -> &Arc<JsonRpcClient> {
        &self.rpc
    }

    /// `eth_blockNumber`.
    pub async fn block_number(&self) -> Result<u64, RpcError> {
        let height: U64 = self.rpc.request("eth_blockNumber", [(); 0]).await?;
        Ok(height.to::<u64>())
    }

    /// `eth_chainId`.
    pub async fn chain_id(&self) -> Result<u64, RpcError> {
        let id: U64 = self.rpc.request("eth_chainId", [(); 0]).await?;
        Ok(id.to::<u64>())
    }
}

#[async_trait]
impl BlockSource for ChainReader {
    async fn block_number(&self) -> Result<u64, RpcError> {
        ChainReader::block_number(self).await
    }
}
