// Path: crates/types/src/app/user.rs

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{macros::format_description, OffsetDateTime};

/// The release schedule a user is configured with.
///
/// The contract stores this as a `uint8`; values other than 0 and 1 are kept
/// verbatim as `Unknown` rather than folded into a known variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockType {
    /// Tokens stay locked until the owner lifts the lock.
    Suspend,
    /// Tokens release linearly over the configured period.
    #[default]
    Linear,
    /// A value this client does not recognise.
    Unknown(u8),
}

impl LockType {
    /// The on-chain `uint8` encoding.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::Suspend => 0,
            Self::Linear => 1,
            Self::Unknown(n) => n,
        }
    }
}

impl From<u8> for LockType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Suspend,
            1 => Self::Linear,
            n => Self::Unknown(n),
        }
    }
}

impl fmt::Display for LockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suspend => f.write_str("Suspend"),
            Self::Linear => f.write_str("Linear"),
            Self::Unknown(n) => write!(f, "Unknown({})", n),
        }
    }
}

/// A user's record as returned by `getUserInfo(address)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Whether the user is exempt from the global lock.
    pub whitelisted: bool,
    /// The configured release schedule.
    pub lock_type: LockType,
    /// Schedule start, unix seconds.
    pub start_time: u64,
    /// Last release, unix seconds. `None` when the contract reports zero.
    pub last_withdraw_time: Option<u64>,
    /// Schedule end, unix seconds. `None` when the contract reports zero.
    pub end_time: Option<u64>,
    /// Amount already minted to the user, base units.
    pub already_minted: U256,
    /// Total mint allowance, base units.
    pub total_mint_allowance: U256,
}

impl UserInfo {
    /// Builds the record from the raw contract tuple, mapping zero timestamps
    /// to `None` and saturating timestamps that exceed `u64`.
    pub fn from_raw(
        whitelisted: bool,
        lock_type: u8,
        start_time: U256,
        last_withdraw_time: U256,
        end_time: U256,
        already_minted: U256,
        total_mint_allowance: U256,
    ) -> Self {
        let secs = |v: U256| u64::try_from(v).unwrap_or(u64::MAX);
        let optional = |v: U256| (!v.is_zero()).then(|| secs(v));
        Self {
            whitelisted,
            lock_type: LockType::from(lock_type),
            start_time: secs(start_time),
            last_withdraw_time: optional(last_withdraw_time),
            end_time: optional(end_time),
            already_minted,
            total_mint_allowance,
        }
    }
}

/// One element of the `batchSetUser` argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserParams {
    /// The release schedule to assign.
    pub lock_type: LockType,
    /// Release period in seconds.
    pub period_secs: u64,
    /// Mint allowance in base units.
    pub mint_amount: U256,
    /// The user being configured.
    pub user: Address,
}

/// Renders unix seconds as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Out-of-range values fall back to the raw number.
pub fn format_timestamp(secs: u64) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    i64::try_from(secs)
        .ok()
        .and_then(|s| OffsetDateTime::from_unix_timestamp(s).ok())
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| secs.to_string())
}
