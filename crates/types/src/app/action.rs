// Path: crates/types/src/app/action.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every operator-initiated action. Only writes hold the busy slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// `mint(address,uint256)`.
    Mint,
    /// `setLock(bool)`.
    SetLock,
    /// `setUserLock(address,bool)`.
    SetUserLock,
    /// `batchSetUser(UserParams[])`.
    BatchSetUser,
    /// `release()`.
    Release,
    /// `getUserInfo(address)`.
    GetUserInfo,
    /// `getUserReleaseAmount(address)`.
    GetUserReleaseAmount,
    /// Manual re-read of the total supply.
    RefreshTotalSupply,
}

impl ActionKind {
    /// Whether the action produces a transaction.
    pub fn is_write(self) -> bool {
        matches!(
            self,
            Self::Mint | Self::SetLock | Self::SetUserLock | Self::BatchSetUser | Self::Release
        )
    }

    /// A short label for logs and the busy indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::SetLock => "set-lock",
            Self::SetUserLock => "set-user-lock",
            Self::BatchSetUser => "set-user",
            Self::Release => "release",
            Self::GetUserInfo => "user-info",
            Self::GetUserReleaseAmount => "release-amount",
            Self::RefreshTotalSupply => "refresh",
        }
    }

    /// The prefix put in front of the failure reason in the error banner.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::Mint => "Mint failed: ",
            Self::SetLock => "Failed to set global lock: ",
            Self::SetUserLock => "Failed to set user lock: ",
            Self::BatchSetUser => "Failed to set user: ",
            Self::Release => "Release failed: ",
            Self::GetUserInfo => "Failed to get user info: ",
            Self::GetUserReleaseAmount => "Failed to get release amount: ",
            Self::RefreshTotalSupply => "Failed to fetch total supply: ",
        }
    }

    /// The success banner for write actions.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Self::Mint => Some("Mint successful!"),
            Self::SetLock => Some("Global lock set successfully!"),
            Self::SetUserLock => Some("User lock set successfully!"),
            Self::BatchSetUser => Some("User set successfully!"),
            Self::Release => Some("Release successful!"),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single transient success/error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// The text shown to the operator.
    pub message: String,
    /// Whether this is an error banner.
    pub is_error: bool,
}

impl Banner {
    /// A success/progress banner.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    /// An error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_classification() {
        assert!(ActionKind::Mint.is_write());
        assert!(ActionKind::Release.is_write());
        assert!(!ActionKind::GetUserInfo.is_write());
        assert!(!ActionKind::RefreshTotalSupply.is_write());
    }

    #[test]
    fn only_writes_have_success_banners() {
        assert_eq!(ActionKind::Mint.success_message(), Some("Mint successful!"));
        assert_eq!(ActionKind::GetUserReleaseAmount.success_message(), None);
    }
}
