// Path: crates/types/src/error/mod.rs
//! Core error types for the HLINK console.

use crate::app::ActionKind;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors converting a decimal string to a fixed-point amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitsError {
    /// The input was empty after trimming.
    #[error("amount is empty")]
    Empty,
    /// The input carried a minus sign.
    #[error("amount must not be negative: {0}")]
    Negative(String),
    /// The input contained something other than digits and one decimal point.
    #[error("invalid decimal amount: {0}")]
    InvalidDigit(String),
    /// The input had more significant fraction digits than the token supports.
    #[error("too many decimals in {input} (max {max})")]
    TooManyDecimals {
        /// The offending input.
        input: String,
        /// The maximum number of fraction digits.
        max: u8,
    },
    /// The scaled value does not fit in 256 bits.
    #[error("amount out of range: {0}")]
    Overflow(String),
}

impl ErrorCode for UnitsError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "UNITS_EMPTY",
            Self::Negative(_) => "UNITS_NEGATIVE",
            Self::InvalidDigit(_) => "UNITS_INVALID_DIGIT",
            Self::TooManyDecimals { .. } => "UNITS_TOO_MANY_DECIMALS",
            Self::Overflow(_) => "UNITS_OVERFLOW",
        }
    }
}

/// Errors raised by the JSON-RPC transport.
#[derive(Error, Debug, Clone)]
pub enum RpcError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("RPC transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success HTTP status.
    #[error("RPC endpoint returned HTTP {status}")]
    Http {
        /// The HTTP status code.
        status: u16,
    },
    /// The endpoint answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// The JSON-RPC error code.
        code: i64,
        /// The human-readable message.
        message: String,
        /// Optional `data` member, usually hex-encoded revert data.
        data: Option<String>,
    },
    /// The response did not have the expected shape.
    #[error("malformed RPC response: {0}")]
    Decode(String),
}

impl ErrorCode for RpcError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "RPC_TRANSPORT",
            Self::Http { .. } => "RPC_HTTP_STATUS",
            Self::Rpc { .. } => "RPC_ERROR_OBJECT",
            Self::Decode(_) => "RPC_DECODE",
        }
    }
}

/// Errors acquiring or using a signing capability.
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    /// No wallet provider is configured for this session.
    #[error("No wallet provider configured (set wallet_url)")]
    NotConfigured,
    /// The user declined the request in the wallet.
    #[error("request rejected by user: {0}")]
    Rejected(String),
    /// The wallet exposed no accounts.
    #[error("wallet returned no accounts")]
    NoAccounts,
    /// The wallet provider failed.
    #[error("wallet provider error: {0}")]
    Provider(#[from] RpcError),
}

impl ErrorCode for WalletError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "WALLET_NOT_CONFIGURED",
            Self::Rejected(_) => "WALLET_REJECTED",
            Self::NoAccounts => "WALLET_NO_ACCOUNTS",
            Self::Provider(_) => "WALLET_PROVIDER",
        }
    }
}

/// Errors surfaced by contract gateway calls.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// The read-only RPC connection failed.
    #[error(transparent)]
    Rpc(#[from] RpcError),
    /// The wallet failed while submitting a transaction.
    #[error(transparent)]
    Wallet(#[from] WalletError),
    /// A response could not be ABI-decoded.
    #[error("malformed contract response: {0}")]
    Abi(String),
    /// The contract rejected the call.
    #[error("execution reverted{}", reason_suffix(.reason))]
    Reverted {
        /// The decoded revert reason, when the node exposed one.
        reason: Option<String>,
    },
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_ref()
        .map(|r| format!(": {}", r))
        .unwrap_or_default()
}

impl GatewayError {
    /// The revert reason, if this error carries one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Reverted { reason } => reason.as_deref(),
            _ => None,
        }
    }

    /// The text shown to the operator: the revert reason when available,
    /// otherwise the full error message.
    pub fn user_message(&self) -> String {
        self.reason()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

impl ErrorCode for GatewayError {
    fn code(&self) -> &'static str {
        match self {
            Self::Rpc(e) => e.code(),
            Self::Wallet(e) => e.code(),
            Self::Abi(_) => "GATEWAY_ABI_DECODE",
            Self::Reverted { .. } => "GATEWAY_REVERTED",
        }
    }
}

/// Errors loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for the expected schema.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be serialized.
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A field holds an unusable value.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// The field name.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "CONFIG_IO",
            Self::Parse(_) => "CONFIG_PARSE",
            Self::Serialize(_) => "CONFIG_SERIALIZE",
            Self::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}

/// The settled outcome of a failed user action.
#[derive(Error, Debug, Clone)]
pub enum ActionError {
    /// A required field was empty; nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// Another action already holds the busy slot.
    #[error("Another action is already in progress ({0})")]
    Busy(ActionKind),
    /// A field was present but could not be parsed; nothing was sent.
    #[error("{0}")]
    InvalidInput(String),
    /// No signer could be acquired.
    #[error("{0}")]
    Wallet(String),
    /// The gateway call or confirmation failed.
    #[error("{0}")]
    Failed(String),
}

impl ErrorCode for ActionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ACTION_VALIDATION",
            Self::Busy(_) => "ACTION_BUSY",
            Self::InvalidInput(_) => "ACTION_INVALID_INPUT",
            Self::Wallet(_) => "ACTION_WALLET",
            Self::Failed(_) => "ACTION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revert_reason_wins_over_message() {
        let err = GatewayError::Reverted {
            reason: Some("exceeds mint allowance".into()),
        };
        assert_eq!(err.user_message(), "exceeds mint allowance");
        assert_eq!(err.to_string(), "execution reverted: exceeds mint allowance");
        assert_eq!(err.code(), "GATEWAY_REVERTED");
    }

    #[test]
    fn generic_message_without_reason() {
        let err = GatewayError::Reverted { reason: None };
        assert_eq!(err.user_message(), "execution reverted");

        let err = GatewayError::from(RpcError::Http { status: 502 });
        assert_eq!(err.user_message(), "RPC endpoint returned HTTP 502");
        assert_eq!(err.code(), "RPC_HTTP_STATUS");
    }

    #[test]
    fn wallet_codes_pass_through() {
        let err = GatewayError::from(WalletError::NotConfigured);
        assert_eq!(err.code(), "WALLET_NOT_CONFIGURED");
    }
}
