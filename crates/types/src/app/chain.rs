// Path: crates/types/src/app/chain.rs

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// The chain-wide values shown in the info panel.
///
/// Each field reflects the last successful read; `None` means no read has
/// succeeded yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStatus {
    /// The latest polled block height.
    pub block_height: Option<u64>,
    /// The token's total supply in base units.
    pub total_supply: Option<U256>,
    /// The contract's global transfer lock flag.
    pub global_lock: Option<bool>,
}
