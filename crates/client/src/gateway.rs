// Path: crates/client/src/gateway.rs

use crate::abi::{self, IHLink};
use crate::revert::{map_call_error, map_submit_error};
use crate::rpc::JsonRpcClient;
use alloy_primitives::{Bytes, U64};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use hlink_api::gateway::TokenGateway;
use hlink_api::wallet::Signer;
use hlink_types::app::{PendingTx, TransactionRequest, TxReceipt, UserInfo, UserParams};
use hlink_types::error::GatewayError;
use hlink_types::{Address, U256};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use std::time::Duration;

/// The HLINK token contract bound to a fixed address.
///
/// Views and receipt polling use the shared read-only RPC client; writes go
/// through whichever [`Signer`] the caller passes in.
#[derive(Debug, Clone)]
pub struct ContractGateway {
    address: Address,
    rpc: Arc<JsonRpcClient>,
    receipt_poll_interval: Duration,
}

impl ContractGateway {
    /// Binds the contract at `address`.
    pub fn new(address: Address, rpc: Arc<JsonRpcClient>, receipt_poll_interval: Duration) -> Self {
        Self {
            address,
            rpc,
            receipt_poll_interval,
        }
    }

    /// The bound contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    fn request_for<C: SolCall>(&self, from: Option<Address>, call: &C) -> TransactionRequest {
        TransactionRequest {
            from,
            to: self.address,
            data: Bytes::from(call.abi_encode()),
        }
    }

    async fn eth_call(
        &self,
        request: &TransactionRequest,
        block: JsonValue,
    ) -> Result<Bytes, GatewayError> {
        self.rpc
            .request("eth_call", (request, block))
            .await
            .map_err(map_call_error)
    }

    async fn view<C: SolCall + Send + Sync>(&self, call: C) -> Result<C::Return, GatewayError> {
        let request = self.request_for(None, &call);
        let output = self.eth_call(&request, json!("latest")).await?;
        C::abi_decode_returns(&output, true).map_err(|e| {
            GatewayError::Abi(format!("{}: {}", C::SIGNATURE, e))
        })
    }

    async fn submit<C: SolCall + Send + Sync>(
        &self,
        signer: &Signer,
        call: C,
    ) -> Result<PendingTx, GatewayError> {
        let request = self.request_for(Some(signer.account()), &call);
        let hash = signer
            .send_transaction(request.clone())
            .await
            .map_err(map_submit_error)?;
        tracing::info!(
            target: "gateway",
            function = C::SIGNATURE,
            from = %signer.account(),
            %hash,
            "transaction submitted"
        );
        Ok(PendingTx { hash, request })
    }

    /// Re-executes a reverted transaction at its block to recover the reason.
    async fn replay_revert_reason(&self, tx: &PendingTx, block: Option<U64>) -> Option<String> {
        let block = block.map(|b| json!(b)).unwrap_or_else(|| json!("latest"));
        match self.eth_call(&tx.request, block).await {
            Err(GatewayError::Reverted { reason }) => reason,
            Err(e) => {
                tracing::debug!(target: "gateway", hash = %tx.hash, "revert replay failed: {}", e);
                None
            }
            Ok(_) => None,
        }
    }
}

#[async_trait]
impl TokenGateway for ContractGateway {
    async fn total_supply(&self) -> Result<U256, GatewayError> {
        Ok(self.view(IHLink::totalSupplyCall {}).await?.supply)
    }

    async fn lock_state(&self) -> Result<bool, GatewayError> {
        Ok(self.view(IHLink::lockStateCall {}).await?.locked)
    }

    async fn get_user_info(&self, user: Address) -> Result<UserInfo, GatewayError> {
        let ret = self.view(IHLink::getUserInfoCall { user }).await?;
        Ok(UserInfo::from(ret.info))
    }

    async fn get_user_release_amount(&self, user: Address) -> Result<U256, GatewayError> {
        Ok(self
            .view(IHLink::getUserReleaseAmountCall { user })
            .await?
            .amount)
    }

    async fn mint(
        &self,
        signer: &Signer,
        receiver: Address,
        amount: U256,
    ) -> Result<PendingTx, GatewayError> {
        self.submit(signer, IHLink::mintCall { receiver, amount })
            .await
    }

    async fn set_lock(&self, signer: &Signer, locked: bool) -> Result<PendingTx, GatewayError> {
        self.submit(signer, IHLink::setLockCall { state: locked })
            .await
    }

    async fn set_user_lock(
        &self,
        signer: &Signer,
        user: Address,
        locked: bool,
    ) -> Result<PendingTx, GatewayError> {
        self.submit(signer, IHLink::setUserLockCall { user, state: locked })
            .await
    }

    async fn batch_set_user(
        &self,
        signer: &Signer,
        params: &[UserParams],
    ) -> Result<PendingTx, GatewayError> {
        let params_group = params.iter().map(abi::UserParams::from).collect();
        self.submit(
            signer,
            IHLink::batchSetUserCall {
                paramsGroup: params_group,
            },
        )
        .await
    }

    async fn release(&self, signer: &Signer) -> Result<PendingTx, GatewayError> {
        self.submit(signer, IHLink::releaseCall {}).await
    }

    async fn wait_for_confirmation(&self, tx: &PendingTx) -> Result<TxReceipt, GatewayError> {
        loop {
            let receipt: Option<TxReceipt> = self
                .rpc
                .request("eth_getTransactionReceipt", [tx.hash])
                .await?;

            match receipt {
                Some(receipt) if receipt.reverted() => {
                    let reason = self.replay_revert_reason(tx, receipt.block_number).await;
                    tracing::warn!(
                        target: "gateway",
                        hash = %tx.hash,
                        reason = reason.as_deref().unwrap_or("<none>"),
                        "transaction reverted"
                    );
                    return Err(GatewayError::Reverted { reason });
                }
                Some(receipt) => {
                    tracing::info!(
                        target: "gateway",
                        hash = %tx.hash,
                        block = ?receipt.block_number,
                        "transaction confirmed"
                    );
                    return Ok(receipt);
                }
                None => tokio::time::sleep(self.receipt_poll_interval).await,
            }
        }
    }
}
