// Path: crates/types/src/app/tx.rs

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// The `eth_sendTransaction` / `eth_call` request object.
///
/// Gas, price and nonce are left to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// The sending account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// The contract address.
    pub to: Address,
    /// ABI-encoded calldata.
    pub data: Bytes,
}

/// A transaction accepted by the wallet but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTx {
    /// The transaction hash returned by the wallet.
    pub hash: B256,
    /// The request that produced it, kept so a revert can be replayed.
    pub request: TransactionRequest,
}

/// The subset of `eth_getTransactionReceipt` the console uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// The transaction hash.
    pub transaction_hash: B256,
    /// The block the transaction was included in.
    #[serde(default)]
    pub block_number: Option<U64>,
    /// `1` for success, `0` for revert. Absent on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
    /// Gas consumed by the transaction.
    #[serde(default)]
    pub gas_used: Option<U256>,
}

impl TxReceipt {
    /// Whether the receipt reports a revert.
    pub fn reverted(&self) -> bool {
        self.status == Some(U64::ZERO)
    }
}
