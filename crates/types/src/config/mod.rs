// Path: crates/types/src/config/mod.rs

//! Configuration for the HLINK console.
//!
//! Values come from three layers: built-in defaults, an optional TOML file and
//! `HLINK_*` environment variables, applied in that order.
use crate::error::ConfigError;
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding [`ConsoleConfig::rpc_url`].
pub const ENV_RPC_URL: &str = "HLINK_RPC_URL";
/// Environment variable overriding [`ConsoleConfig::contract_address`].
pub const ENV_CONTRACT_ADDRESS: &str = "HLINK_CONTRACT_ADDRESS";
/// Environment variable overriding [`ConsoleConfig::wallet_url`].
pub const ENV_WALLET_URL: &str = "HLINK_WALLET_URL";
/// Environment variable supplying [`ConsoleConfig::wallet_connect_project_id`].
pub const ENV_WALLET_CONNECT_PROJECT_ID: &str = "HLINK_WALLET_CONNECT_PROJECT_ID";

/// The deployed HLINK token on BSC mainnet.
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("45532Daa1106B82259cE95321CDaF2b54757cc98");
/// Public BSC mainnet RPC used for all reads.
pub const DEFAULT_RPC_URL: &str = "https://bsc-rpc.publicnode.com";
/// Block explorer used for contract links.
pub const DEFAULT_EXPLORER_URL: &str = "https://bscscan.com";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human-readable records.
    #[default]
    Compact,
    /// One JSON object per record.
    Json,
}

/// Top-level console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Read-only JSON-RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// The token contract.
    #[serde(default = "default_contract_address")]
    pub contract_address: Address,
    /// Block explorer base URL.
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
    /// Wallet provider endpoint (injected-provider method set over JSON-RPC).
    /// Writes are unavailable when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_url: Option<String>,
    /// Identifier registered with the wallet-connection service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_connect_project_id: Option<String>,
    /// Block height poll cadence.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// How long a banner stays visible.
    #[serde(default = "default_banner_ttl_secs")]
    pub banner_ttl_secs: u64,
    /// Receipt polling cadence while awaiting confirmation.
    #[serde(default = "default_receipt_poll_interval_ms")]
    pub receipt_poll_interval_ms: u64,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}
fn default_contract_address() -> Address {
    DEFAULT_CONTRACT_ADDRESS
}
fn default_explorer_url() -> String {
    DEFAULT_EXPLORER_URL.to_string()
}
fn default_poll_interval_secs() -> u64 {
    60
}
fn default_banner_ttl_secs() -> u64 {
    5
}
fn default_receipt_poll_interval_ms() -> u64 {
    2000
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            contract_address: default_contract_address(),
            explorer_url: default_explorer_url(),
            wallet_url: None,
            wallet_connect_project_id: None,
            poll_interval_secs: default_poll_interval_secs(),
            banner_ttl_secs: default_banner_ttl_secs(),
            receipt_poll_interval_ms: default_receipt_poll_interval_ms(),
            log_format: LogFormat::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads the file at `path` if given, otherwise the defaults, then applies
    /// the process environment and validates the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = match path {
            Some(p) => Self::from_toml_str(&std::fs::read_to_string(p)?)?,
            None => Self::default(),
        };
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applies `HLINK_*` overrides resolved through `lookup`. Empty values are
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_RPC_URL) {
            self.rpc_url = url;
        }
        if let Some(addr) = get(ENV_CONTRACT_ADDRESS) {
            self.contract_address = addr.trim().parse().map_err(|e| ConfigError::Invalid {
                field: "contract_address",
                reason: format!("{}", e),
            })?;
        }
        if let Some(url) = get(ENV_WALLET_URL) {
            self.wallet_url = Some(url);
        }
        if let Some(id) = get(ENV_WALLET_CONNECT_PROJECT_ID) {
            self.wallet_connect_project_id = Some(id);
        }
        Ok(())
    }

    /// Rejects zero intervals and non-HTTP endpoints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url("rpc_url", &self.rpc_url)?;
        check_http_url("explorer_url", &self.explorer_url)?;
        if let Some(url) = &self.wallet_url {
            check_http_url("wallet_url", url)?;
        }
        for (field, value) in [
            ("poll_interval_secs", self.poll_interval_secs),
            ("banner_ttl_secs", self.banner_ttl_secs),
            ("receipt_poll_interval_ms", self.receipt_poll_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    /// Block height poll cadence.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Banner lifetime.
    pub fn banner_ttl(&self) -> Duration {
        Duration::from_secs(self.banner_ttl_secs)
    }

    /// Receipt polling cadence.
    pub fn receipt_poll_interval(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_interval_ms)
    }

    /// The explorer page for the configured contract.
    pub fn contract_explorer_url(&self) -> String {
        format!(
            "{}/address/{}",
            self.explorer_url.trim_end_matches('/'),
            self.contract_address
        )
    }
}

fn check_http_url(field: &'static str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected an http(s) URL, got `{}`", url),
        })
    }
}
