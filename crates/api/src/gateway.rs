// Path: crates/api/src/gateway.rs
//! The contract façade.

use crate::wallet::Signer;
use async_trait::async_trait;
use hlink_types::app::{PendingTx, TxReceipt, UserInfo, UserParams};
use hlink_types::error::GatewayError;
use hlink_types::{Address, U256};

/// Typed access to the HLINK token contract.
///
/// View methods go through the read-only connection. Write methods submit a
/// transaction through the given signer and return as soon as the wallet
/// accepts it; [`TokenGateway::wait_for_confirmation`] awaits inclusion.
#[async_trait]
pub trait TokenGateway: Send + Sync {
    /// `totalSupply()`, base units.
    async fn total_supply(&self) -> Result<U256, GatewayError>;

    /// `lockState()`.
    async fn lock_state(&self) -> Result<bool, GatewayError>;

    /// `getUserInfo(address)`.
    async fn get_user_info(&self, user: Address) -> Result<UserInfo, GatewayError>;

    /// `getUserReleaseAmount(address)`, base units.
    async fn get_user_release_amount(&self, user: Address) -> Result<U256, GatewayError>;

    /// `mint(address,uint256)`.
    async fn mint(
        &self,
        signer: &Signer,
        receiver: Address,
        amount: U256,
    ) -> Result<PendingTx, GatewayError>;

    /// `setLock(bool)`.
    async fn set_lock(&self, signer: &Signer, locked: bool) -> Result<PendingTx, GatewayError>;

    /// `setUserLock(address,bool)`.
    async fn set_user_lock(
        &self,
        signer: &Signer,
        user: Address,
        locked: bool,
    ) -> Result<PendingTx, GatewayError>;

    /// `batchSetUser((uint8,uint256,uint256,address)[])`.
    async fn batch_set_user(
        &self,
        signer: &Signer,
        params: &[UserParams],
    ) -> Result<PendingTx, GatewayError>;

    /// `release()`.
    async fn release(&self, signer: &Signer) -> Result<PendingTx, GatewayError>;

    /// Waits until the transaction is mined. A reverted receipt is returned as
    /// [`GatewayError::Reverted`].
    async fn wait_for_confirmation(&self, tx: &PendingTx) -> Result<TxReceipt, GatewayError>;
}
