// Path: crates/client/src/revert.rs
//! Extraction of human-readable revert reasons.

use alloy_primitives::{hex, Bytes};
use alloy_sol_types::{Panic, Revert, SolError};
use hlink_types::error::{GatewayError, RpcError, WalletError};

/// Prefix nodes put in front of the reason in plain-text error messages.
const REVERT_MESSAGE_PREFIX: &str = "execution reverted: ";

/// Decodes `Error(string)` or `Panic(uint256)` revert data.
pub fn decode_revert_data(data: &[u8]) -> Option<String> {
    if let Ok(revert) = Revert::abi_decode(data, true) {
        return Some(revert.reason);
    }
    if let Ok(panic) = Panic::abi_decode(data, true) {
        return Some(format!("panic code {:#x}", panic.code));
    }
    None
}

fn decode_hex_data(data: &str) -> Option<Bytes> {
    hex::decode(data.trim()).ok().map(Bytes::from)
}

/// Whether a JSON-RPC error describes a contract revert, and if so its reason.
///
/// Returns `None` for errors unrelated to execution; `Some(None)` for a revert
/// whose reason could not be decoded.
pub fn revert_from_rpc(err: &RpcError) -> Option<Option<String>> {
    let RpcError::Rpc { code, message, data } = err else {
        return None;
    };

    let from_data = data
        .as_deref()
        .and_then(decode_hex_data)
        .filter(|d| !d.is_empty());
    if let Some(bytes) = from_data {
        return Some(decode_revert_data(&bytes));
    }
    if let Some(reason) = message.strip_prefix(REVERT_MESSAGE_PREFIX) {
        return Some(Some(reason.to_string()));
    }
    // Geth reports reverts as code 3 with the raw data attached.
    if *code == 3 || message.contains("revert") {
        return Some(None);
    }
    None
}

/// Maps an RPC error from a view call or `eth_call` replay.
pub fn map_call_error(err: RpcError) -> GatewayError {
    match revert_from_rpc(&err) {
        Some(reason) => GatewayError::Reverted { reason },
        None => GatewayError::Rpc(err),
    }
}

/// Maps a wallet error from transaction submission. Gas estimation inside the
/// wallet surfaces reverts before anything is broadcast.
pub fn map_submit_error(err: WalletError) -> GatewayError {
    if let WalletError::Provider(rpc) = &err {
        if let Some(reason) = revert_from_rpc(rpc) {
            return GatewayError::Reverted { reason };
        }
    }
    GatewayError::Wallet(err)
}
