// Path: crates/api/src/wallet.rs
//! Signing capability.

use async_trait::async_trait;
use hlink_types::app::TransactionRequest;
use hlink_types::error::WalletError;
use hlink_types::{Address, B256};
use std::fmt;
use std::sync::Arc;

/// A wallet that exposes the injected-provider method set: account access and
/// transaction submission. The wallet owns keys, gas and nonce selection.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// `eth_requestAccounts`: the accounts the user has authorised, selected
    /// account first.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// `eth_sendTransaction`: signs and broadcasts, returning the hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256, WalletError>;
}

/// Hands out a fresh [`Signer`] for every state-changing action.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Requests account access and binds a signer to the selected account.
    async fn acquire_signer(&self) -> Result<Signer, WalletError>;
}

/// A signing capability bound to one account.
#[derive(Clone)]
pub struct Signer {
    account: Address,
    provider: Arc<dyn WalletProvider>,
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

impl Signer {
    /// Binds `provider` to `account`.
    pub fn new(account: Address, provider: Arc<dyn WalletProvider>) -> Self {
        Self { account, provider }
    }

    /// The account transactions are sent from.
    pub fn account(&self) -> Address {
        self.account
    }

    /// Sends `tx` from this signer's account, overriding any `from` it carries.
    pub async fn send_transaction(&self, mut tx: TransactionRequest) -> Result<B256, WalletError> {
        tx.from = Some(self.account);
        self.provider.send_transaction(tx).await
    }
}
