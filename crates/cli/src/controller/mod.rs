// Path: crates/cli/src/controller/mod.rs

//! The interaction controller.
//!
//! Every operator action checks its required fields, talks to the gateway and
//! settles a banner. Validation and parse failures never reach the gateway.
//! Writes additionally hold the busy slot until settlement, acquire a fresh
//! signer per call, show a "submitted" banner once the wallet returns a hash
//! and only report success after the receipt confirms. Reads are never gated.

mod busy;
mod forms;

pub use busy::{BusyGuard, BusySlot, ReadGuard, ReadTracker};
pub use forms::{Forms, GlobalLockForm, MintForm, QueryForm, UserLockForm, UserParamsForm};

use crate::banner::BannerBoard;
use forms::{is_blank, parse_address, parse_amount};
use hlink_api::gateway::TokenGateway;
use hlink_api::wallet::{Signer, WalletConnector};
use hlink_types::app::{
    ActionKind, Banner, ChainStatus, PendingTx, TxReceipt, UserInfo, UserParams,
};
use hlink_types::error::{ActionError, GatewayError, WalletError};
use hlink_types::{Address, U256};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

/// Banner shown between submission and confirmation.
pub const SUBMITTED_MESSAGE: &str = "Transaction submitted, waiting for confirmation...";
const LOCK_STATE_FAILURE_PREFIX: &str = "Failed to fetch lock state: ";
const WALLET_FAILURE_PREFIX: &str = "Failed to connect to wallet: ";

/// Everything the view renders, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub chain: ChainStatus,
    pub banner: Option<Banner>,
    pub busy: Option<ActionKind>,
    /// Whether a supply refresh or user query is in flight.
    pub querying: bool,
    pub forms: Forms,
    pub user_info: Option<UserInfo>,
    pub release_amount: Option<U256>,
}

#[derive(Debug, Default)]
struct QueryResults {
    user_info: Option<UserInfo>,
    release_amount: Option<U256>,
}

/// A validated write, ready for submission.
#[derive(Debug)]
enum WriteCall {
    Mint { receiver: Address, amount: U256 },
    SetLock(bool),
    SetUserLock { user: Address, locked: bool },
    BatchSetUser(Vec<UserParams>),
    Release,
}

impl WriteCall {
    fn kind(&self) -> ActionKind {
        match self {
            Self::Mint { .. } => ActionKind::Mint,
            Self::SetLock(_) => ActionKind::SetLock,
            Self::SetUserLock { .. } => ActionKind::SetUserLock,
            Self::BatchSetUser(_) => ActionKind::BatchSetUser,
            Self::Release => ActionKind::Release,
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives the contract on behalf of the operator.
pub struct InteractionController {
    gateway: Arc<dyn TokenGateway>,
    wallet: Arc<dyn WalletConnector>,
    banner: BannerBoard,
    busy: BusySlot,
    reads: ReadTracker,
    chain: Mutex<ChainStatus>,
    forms: Mutex<Forms>,
    results: Mutex<QueryResults>,
    block_height: Option<watch::Receiver<Option<u64>>>,
}

impl InteractionController {
    pub fn new(
        gateway: Arc<dyn TokenGateway>,
        wallet: Arc<dyn WalletConnector>,
        banner: BannerBoard,
    ) -> Self {
        Self {
            gateway,
            wallet,
            banner,
            busy: BusySlot::new(),
            reads: ReadTracker::default(),
            chain: Mutex::new(ChainStatus::default()),
            forms: Mutex::new(Forms::default()),
            results: Mutex::new(QueryResults::default()),
            block_height: None,
        }
    }

    /// Sources the displayed block height from a poller.
    pub fn with_block_height(mut self, rx: watch::Receiver<Option<u64>>) -> Self {
        self.block_height = Some(rx);
        self
    }

    pub fn banner(&self) -> &BannerBoard {
        &self.banner
    }

    /// The write in flight, if any.
    pub fn busy(&self) -> Option<ActionKind> {
        self.busy.current()
    }

    /// Whether a supply refresh or user query is in flight.
    pub fn querying(&self) -> bool {
        self.reads.is_active()
    }

    /// A copy of the current form values.
    pub fn forms(&self) -> Forms {
        lock(&self.forms).clone()
    }

    /// Edits the form values in place.
    pub fn update_forms(&self, f: impl FnOnce(&mut Forms)) {
        f(&mut lock(&self.forms));
    }

    pub fn snapshot(&self) -> ViewState {
        let mut chain = lock(&self.chain).clone();
        if let Some(rx) = &self.block_height {
            chain.block_height = *rx.borrow();
        }
        let results = lock(&self.results);
        ViewState {
            chain,
            banner: self.banner.current(),
            busy: self.busy.current(),
            querying: self.reads.is_active(),
            forms: self.forms(),
            user_info: results.user_info.clone(),
            release_amount: results.release_amount,
        }
    }

    /// Writes are unavailable while another one is in flight.
    fn ensure_idle(&self) -> Result<(), ActionError> {
        match self.busy.current() {
            Some(holder) => Err(ActionError::Busy(holder)),
            None => Ok(()),
        }
    }

    fn reject(&self, err: ActionError) -> ActionError {
        self.banner.show(Banner::error(err.to_string()));
        err
    }

    fn fail(&self, kind: ActionKind, err: GatewayError) -> ActionError {
        tracing::warn!(target: "controller", action = %kind, "{}", err);
        self.reject(ActionError::Failed(format!(
            "{}{}",
            kind.failure_prefix(),
            err.user_message()
        )))
    }

    fn wallet_failure(&self, err: WalletError) -> ActionError {
        tracing::warn!(target: "controller", "wallet unavailable: {}", err);
        let message = match err {
            WalletError::NotConfigured => err.to_string(),
            other => format!("{}{}", WALLET_FAILURE_PREFIX, other),
        };
        self.reject(ActionError::Wallet(message))
    }

    // ---- Reads ----

    /// Re-reads the total supply. On failure the previous value stays.
    pub async fn refresh_total_supply(&self) -> Result<U256, ActionError> {
        let _read = self.reads.begin();
        match self.gateway.total_supply().await {
            Ok(supply) => {
                lock(&self.chain).total_supply = Some(supply);
                Ok(supply)
            }
            Err(e) => Err(self.fail(ActionKind::RefreshTotalSupply, e)),
        }
    }

    /// Re-reads the global lock flag. On failure the previous value stays.
    pub async fn refresh_lock_state(&self) -> Result<bool, ActionError> {
        match self.gateway.lock_state().await {
            Ok(locked) => {
                lock(&self.chain).global_lock = Some(locked);
                Ok(locked)
            }
            Err(e) => {
                tracing::warn!(target: "controller", "{}", e);
                Err(self.reject(ActionError::Failed(format!(
                    "{}{}",
                    LOCK_STATE_FAILURE_PREFIX,
                    e.user_message()
                ))))
            }
        }
    }

    /// Manual refresh of the total supply.
    pub async fn refresh(&self) -> Result<U256, ActionError> {
        tracing::debug!(target: "controller", "manual refresh");
        self.refresh_total_supply().await
    }

    // ---- Writes ----

    pub async fn mint(&self) -> Result<TxReceipt, ActionError> {
        self.ensure_idle()?;
        let prefix = ActionKind::Mint.failure_prefix();
        let form = lock(&self.forms).mint.clone();
        if is_blank(&form.receiver) || is_blank(&form.amount) {
            return Err(self.reject(ActionError::Validation(
                "Please fill in receiver address and amount".into(),
            )));
        }
        let call = parse_address(prefix, &form.receiver)
            .and_then(|receiver| {
                Ok(WriteCall::Mint {
                    receiver,
                    amount: parse_amount(prefix, &form.amount)?,
                })
            })
            .map_err(|e| self.reject(e))?;

        let receipt = self.execute(call).await?;
        lock(&self.forms).mint = MintForm::default();
        // Supply changed; failures surface through the banner.
        let _ = self.refresh_total_supply().await;
        Ok(receipt)
    }

    pub async fn set_lock(&self) -> Result<TxReceipt, ActionError> {
        self.ensure_idle()?;
        let locked = lock(&self.forms).global_lock.locked;
        let receipt = self.execute(WriteCall::SetLock(locked)).await?;
        let _ = self.refresh_lock_state().await;
        Ok(receipt)
    }

    pub async fn set_user_lock(&self) -> Result<TxReceipt, ActionError> {
        self.ensure_idle()?;
        let form = lock(&self.forms).user_lock.clone();
        if is_blank(&form.address) {
            return Err(self.reject(ActionError::Validation(
                "Please fill in user address".into(),
            )));
        }
        let user = parse_address(ActionKind::SetUserLock.failure_prefix(), &form.address)
            .map_err(|e| self.reject(e))?;

        let receipt = self
            .execute(WriteCall::SetUserLock {
                user,
                locked: form.locked,
            })
            .await?;
        lock(&self.forms).user_lock.address.clear();
        Ok(receipt)
    }

    /// Submits a single-element `batchSetUser`.
    pub async fn batch_set_user(&self) -> Result<TxReceipt, ActionError> {
        self.ensure_idle()?;
        let prefix = ActionKind::BatchSetUser.failure_prefix();
        let form = lock(&self.forms).user_params.clone();
        if is_blank(&form.user) || is_blank(&form.mint_amount) {
            return Err(self.reject(ActionError::Validation(
                "Please fill in user address and mint amount".into(),
            )));
        }
        let params = parse_address(prefix, &form.user)
            .and_then(|user| {
                Ok(UserParams {
                    lock_type: form.lock_type,
                    period_secs: form.period_secs(),
                    mint_amount: parse_amount(prefix, &form.mint_amount)?,
                    user,
                })
            })
            .map_err(|e| self.reject(e))?;

        let receipt = self.execute(WriteCall::BatchSetUser(vec![params])).await?;
        lock(&self.forms).user_params = UserParamsForm::after_submit();
        Ok(receipt)
    }

    pub async fn release(&self) -> Result<TxReceipt, ActionError> {
        self.execute(WriteCall::Release).await
    }

    async fn submit(&self, signer: &Signer, call: &WriteCall) -> Result<PendingTx, GatewayError> {
        let gateway = &self.gateway;
        match call {
            WriteCall::Mint { receiver, amount } => gateway.mint(signer, *receiver, *amount).await,
            WriteCall::SetLock(locked) => gateway.set_lock(signer, *locked).await,
            WriteCall::SetUserLock { user, locked } => {
                gateway.set_user_lock(signer, *user, *locked).await
            }
            WriteCall::BatchSetUser(params) => gateway.batch_set_user(signer, params).await,
            WriteCall::Release => gateway.release(signer).await,
        }
    }

    /// Runs a validated write to settlement while holding the busy slot.
    async fn execute(&self, call: WriteCall) -> Result<TxReceipt, ActionError> {
        let kind = call.kind();
        let _guard = self.busy.try_acquire(kind)?;
        tracing::info!(target: "controller", action = %kind, "submitting");

        let signer = self
            .wallet
            .acquire_signer()
            .await
            .map_err(|e| self.wallet_failure(e))?;

        let pending = self
            .submit(&signer, &call)
            .await
            .map_err(|e| self.fail(kind, e))?;
        self.banner.show(Banner::info(SUBMITTED_MESSAGE));

        let receipt = self
            .gateway
            .wait_for_confirmation(&pending)
            .await
            .map_err(|e| self.fail(kind, e))?;

        if let Some(message) = kind.success_message() {
            self.banner.show(Banner::info(message));
        }
        tracing::info!(target: "controller", action = %kind, hash = %pending.hash, "confirmed");
        Ok(receipt)
    }

    // ---- Queries ----

    /// Resolves the query box. A blank box leaves the displayed result alone;
    /// an unparsable one clears it.
    fn query_address(&self, kind: ActionKind) -> Result<Address, ActionError> {
        let raw = lock(&self.forms).query.address.clone();
        if is_blank(&raw) {
            return Err(self.reject(ActionError::Validation(
                "Please fill in user address".into(),
            )));
        }
        parse_address(kind.failure_prefix(), &raw).map_err(|e| {
            self.clear_result(kind);
            self.reject(e)
        })
    }

    fn clear_result(&self, kind: ActionKind) {
        let mut results = lock(&self.results);
        match kind {
            ActionKind::GetUserInfo => results.user_info = None,
            ActionKind::GetUserReleaseAmount => results.release_amount = None,
            _ => {}
        }
    }

    /// Reads the record of the queried address. A failed read clears the
    /// previously displayed record.
    pub async fn get_user_info(&self) -> Result<UserInfo, ActionError> {
        let kind = ActionKind::GetUserInfo;
        let user = self.query_address(kind)?;
        let _read = self.reads.begin();
        match self.gateway.get_user_info(user).await {
            Ok(info) => {
                lock(&self.results).user_info = Some(info.clone());
                Ok(info)
            }
            Err(e) => {
                self.clear_result(kind);
                Err(self.fail(kind, e))
            }
        }
    }

    /// Reads the releasable amount of the queried address. A failed read
    /// clears the previously displayed amount.
    pub async fn get_user_release_amount(&self) -> Result<U256, ActionError> {
        let kind = ActionKind::GetUserReleaseAmount;
        let user = self.query_address(kind)?;
        let _read = self.reads.begin();
        match self.gateway.get_user_release_amount(user).await {
            Ok(amount) => {
                lock(&self.results).release_amount = Some(amount);
                Ok(amount)
            }
            Err(e) => {
                self.clear_result(kind);
                Err(self.fail(kind, e))
            }
        }
    }
}
