// Path: crates/client/src/wallet.rs

use crate::rpc::{JsonRpcClient, USER_REJECTED_CODE};
use async_trait::async_trait;
use hlink_api::wallet::{Signer, WalletConnector, WalletProvider};
use hlink_types::app::TransactionRequest;
use hlink_types::config::ConsoleConfig;
use hlink_types::error::{RpcError, WalletError};
use hlink_types::{Address, B256};
use std::sync::Arc;

fn map_wallet_rpc_error(err: RpcError) -> WalletError {
    match err {
        RpcError::Rpc { code, message, .. } if code == USER_REJECTED_CODE => {
            WalletError::Rejected(message)
        }
        other => WalletError::Provider(other),
    }
}

/// A wallet reached over JSON-RPC, speaking the injected-provider method set.
#[derive(Debug)]
pub struct RpcWallet {
    rpc: JsonRpcClient,
}

impl RpcWallet {
    /// Creates a provider for the wallet endpoint at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            rpc: JsonRpcClient::new(url),
        }
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.rpc
            .request("eth_requestAccounts", [(); 0])
            .await
            .map_err(map_wallet_rpc_error)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256, WalletError> {
        self.rpc
            .request("eth_sendTransaction", [tx])
            .await
            .map_err(map_wallet_rpc_error)
    }
}

/// Acquires a signer from the configured wallet provider, if any.
///
/// Nothing is cached: every call asks the wallet again, so an account switch
/// in the wallet shows up on the next action.
#[derive(Clone, Default)]
pub struct InjectedWalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl std::fmt::Debug for InjectedWalletConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectedWalletConnector")
            .field("configured", &self.provider.is_some())
            .finish()
    }
}

impl InjectedWalletConnector {
    /// A connector over an explicit provider, or none.
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    /// Builds an [`RpcWallet`] from `wallet_url` when configured.
    pub fn from_config(cfg: &ConsoleConfig) -> Self {
        let provider = cfg
            .wallet_url
            .as_ref()
            .map(|url| Arc::new(RpcWallet::new(url.clone())) as Arc<dyn WalletProvider>);
        Self { provider }
    }

    /// Whether a provider is present.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }
}

#[async_trait]
impl WalletConnector for InjectedWalletConnector {
    async fn acquire_signer(&self) -> Result<Signer, WalletError> {
        let provider = self.provider.clone().ok_or(WalletError::NotConfigured)?;
        let accounts = provider.request_accounts().await?;
        let account = accounts.first().copied().ok_or(WalletError::NoAccounts)?;
        tracing::info!(target: "wallet", %account, "signer acquired");
        Ok(Signer::new(account, provider))
    }
}
