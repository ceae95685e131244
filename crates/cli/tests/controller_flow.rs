// Path: crates/cli/tests/controller_flow.rs

use async_trait::async_trait;
use hlink_api::chain::BlockSource;
use hlink_api::gateway::TokenGateway;
use hlink_api::wallet::{Signer, WalletConnector, WalletProvider};
use hlink_cli::{BannerBoard, BlockHeightPoller, InteractionController};
use hlink_types::app::{
    ActionKind, LockType, PendingTx, TransactionRequest, TxReceipt, UserInfo, UserParams,
};
use hlink_types::error::{ActionError, GatewayError, RpcError, WalletError};
use hlink_types::{Address, Bytes, B256, U256};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

fn tokens(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
}

fn user() -> Address {
    "0x00000000000000000000000000000000000000aa".parse().unwrap()
}

fn sample_info() -> UserInfo {
    UserInfo::from_raw(
        false,
        1,
        U256::from(1_700_000_000u64),
        U256::ZERO,
        U256::ZERO,
        tokens(500),
        tokens(1_000),
    )
}

struct MockGateway {
    calls: Mutex<Vec<&'static str>>,
    supply: Mutex<U256>,
    locked: Mutex<bool>,
    batches: Mutex<Vec<Vec<UserParams>>>,
    user_info: Mutex<Result<UserInfo, GatewayError>>,
    release_amount: Mutex<Result<U256, GatewayError>>,
    revert: Mutex<Option<String>>,
    confirm_gate: Option<Arc<Notify>>,
    query_gate: Option<Arc<Notify>>,
}

impl MockGateway {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            supply: Mutex::new(tokens(1_000)),
            locked: Mutex::new(false),
            batches: Mutex::new(Vec::new()),
            user_info: Mutex::new(Ok(sample_info())),
            release_amount: Mutex::new(Ok(tokens(25))),
            revert: Mutex::new(None),
            confirm_gate: None,
            query_gate: None,
        }
    }

    fn gated(gate: Arc<Notify>) -> Self {
        Self {
            confirm_gate: Some(gate),
            ..Self::new()
        }
    }

    fn with_slow_queries(gate: Arc<Notify>) -> Self {
        Self {
            query_gate: Some(gate),
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str) {
        self.calls.lock().unwrap().push(name);
    }

    fn pending(&self) -> PendingTx {
        PendingTx {
            hash: B256::repeat_byte(0x11),
            request: TransactionRequest {
                from: None,
                to: Address::ZERO,
                data: Bytes::new(),
            },
        }
    }
}

#[async_trait]
impl TokenGateway for MockGateway {
    async fn total_supply(&self) -> Result<U256, GatewayError> {
        self.record("total_supply");
        Ok(*self.supply.lock().unwrap())
    }

    async fn lock_state(&self) -> Result<bool, GatewayError> {
        self.record("lock_state");
        Ok(*self.locked.lock().unwrap())
    }

    async fn get_user_info(&self, _user: Address) -> Result<UserInfo, GatewayError> {
        self.record("get_user_info");
        if let Some(gate) = &self.query_gate {
            gate.notified().await;
        }
        self.user_info.lock().unwrap().clone()
    }

    async fn get_user_release_amount(&self, _user: Address) -> Result<U256, GatewayError> {
        self.record("get_user_release_amount");
        self.release_amount.lock().unwrap().clone()
    }

    async fn mint(
        &self,
        _signer: &Signer,
        _receiver: Address,
        amount: U256,
    ) -> Result<PendingTx, GatewayError> {
        self.record("mint");
        *self.supply.lock().unwrap() += amount;
        Ok(self.pending())
    }

    async fn set_lock(&self, _signer: &Signer, locked: bool) -> Result<PendingTx, GatewayError> {
        self.record("set_lock");
        *self.locked.lock().unwrap() = locked;
        Ok(self.pending())
    }

    async fn set_user_lock(
        &self,
        _signer: &Signer,
        _user: Address,
        _locked: bool,
    ) -> Result<PendingTx, GatewayError> {
        self.record("set_user_lock");
        Ok(self.pending())
    }

    async fn batch_set_user(
        &self,
        _signer: &Signer,
        params: &[UserParams],
    ) -> Result<PendingTx, GatewayError> {
        self.record("batch_set_user");
        self.batches.lock().unwrap().push(params.to_vec());
        Ok(self.pending())
    }

    async fn release(&self, _signer: &Signer) -> Result<PendingTx, GatewayError> {
        self.record("release");
        Ok(self.pending())
    }

    async fn wait_for_confirmation(&self, tx: &PendingTx) -> Result<TxReceipt, GatewayError> {
        self.record("wait_for_confirmation");
        if let Some(gate) = &self.confirm_gate {
            gate.notified().await;
        }
        if let Some(reason) = self.revert.lock().unwrap().clone() {
            return Err(GatewayError::Reverted {
                reason: Some(reason),
            });
        }
        Ok(TxReceipt {
            transaction_hash: tx.hash,
            block_number: Some(hlink_types::U64::from(100u64)),
            status: Some(hlink_types::U64::from(1u64)),
            gas_used: None,
        })
    }
}

struct NullProvider;

#[async_trait]
impl WalletProvider for NullProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(vec![Address::repeat_byte(0x01)])
    }

    async fn send_transaction(&self, _tx: TransactionRequest) -> Result<B256, WalletError> {
        Ok(B256::ZERO)
    }
}

struct MockWallet {
    configured: bool,
    acquired: Mutex<usize>,
}

impl MockWallet {
    fn ready() -> Self {
        Self {
            configured: true,
            acquired: Mutex::new(0),
        }
    }

    fn absent() -> Self {
        Self {
            configured: false,
            acquired: Mutex::new(0),
        }
    }
}

#[async_trait]
impl WalletConnector for MockWallet {
    async fn acquire_signer(&self) -> Result<Signer, WalletError> {
        *self.acquired.lock().unwrap() += 1;
        if !self.configured {
            return Err(WalletError::NotConfigured);
        }
        Ok(Signer::new(Address::repeat_byte(0x01), Arc::new(NullProvider)))
    }
}

fn controller(
    gateway: Arc<MockGateway>,
    wallet: Arc<MockWallet>,
) -> Arc<InteractionController> {
    Arc::new(InteractionController::new(
        gateway,
        wallet,
        BannerBoard::new(Duration::from_secs(5)),
    ))
}

fn banner_text(c: &InteractionController) -> Option<String> {
    c.banner().current().map(|b| b.message)
}

#[tokio::test]
async fn mint_with_empty_receiver_makes_no_gateway_call() {
    let gateway = Arc::new(MockGateway::new());
    let wallet = Arc::new(MockWallet::ready());
    let c = controller(gateway.clone(), wallet.clone());
    c.update_forms(|f| f.mint.amount = "100".into());

    let err = c.mint().await.unwrap_err();
    assert!(matches!(err, ActionError::Validation(_)));
    assert_eq!(
        banner_text(&c).as_deref(),
        Some("Please fill in receiver address and amount")
    );
    assert!(c.banner().current().unwrap().is_error);
    assert!(gateway.calls().is_empty());
    assert_eq!(*wallet.acquired.lock().unwrap(), 0);
    assert_eq!(c.busy(), None);
}

#[tokio::test]
async fn every_write_checks_required_fields() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));

    assert!(matches!(
        c.set_user_lock().await,
        Err(ActionError::Validation(_))
    ));
    assert_eq!(banner_text(&c).as_deref(), Some("Please fill in user address"));

    c.update_forms(|f| f.user_params.user = format!("{}", user()));
    assert!(matches!(
        c.batch_set_user().await,
        Err(ActionError::Validation(_))
    ));
    assert_eq!(
        banner_text(&c).as_deref(),
        Some("Please fill in user address and mint amount")
    );

    assert!(matches!(
        c.get_user_info().await,
        Err(ActionError::Validation(_))
    ));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn malformed_input_is_reported_with_the_action_prefix() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| {
        f.mint.receiver = "0x1234".into();
        f.mint.amount = "1".into();
    });

    let err = c.mint().await.unwrap_err();
    assert!(matches!(err, ActionError::InvalidInput(_)));
    assert!(banner_text(&c).unwrap().starts_with("Mint failed: invalid address"));

    c.update_forms(|f| {
        f.mint.receiver = format!("{}", user());
        f.mint.amount = "0.0000000000000000001".into();
    });
    assert!(matches!(c.mint().await, Err(ActionError::InvalidInput(_))));
    assert!(banner_text(&c).unwrap().starts_with("Mint failed: too many decimals"));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn successful_mint_refreshes_total_supply_and_clears_the_form() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.refresh_total_supply().await.unwrap();
    assert_eq!(c.snapshot().chain.total_supply, Some(tokens(1_000)));

    c.update_forms(|f| {
        f.mint.receiver = format!("{}", user());
        f.mint.amount = "100".into();
    });
    let receipt = c.mint().await.unwrap();
    assert!(!receipt.reverted());

    assert_eq!(
        gateway.calls(),
        vec!["total_supply", "mint", "wait_for_confirmation", "total_supply"]
    );
    let state = c.snapshot();
    assert_eq!(state.chain.total_supply, Some(tokens(1_100)));
    assert_eq!(state.banner.map(|b| b.message).as_deref(), Some("Mint successful!"));
    assert!(state.forms.mint.receiver.is_empty() && state.forms.mint.amount.is_empty());
    assert_eq!(state.busy, None);
}

#[tokio::test]
async fn a_second_write_is_rejected_while_one_is_in_flight() {
    let gate = Arc::new(Notify::new());
    let gateway = Arc::new(MockGateway::gated(gate.clone()));
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| {
        f.mint.receiver = format!("{}", user());
        f.mint.amount = "5".into();
        f.query.address = format!("{}", user());
    });

    let in_flight = tokio::spawn({
        let c = c.clone();
        async move { c.mint().await }
    });
    while !gateway.calls().contains(&"wait_for_confirmation") {
        tokio::task::yield_now().await;
    }
    assert_eq!(c.busy(), Some(ActionKind::Mint));
    assert_eq!(
        banner_text(&c).as_deref(),
        Some("Transaction submitted, waiting for confirmation...")
    );

    assert!(matches!(
        c.release().await,
        Err(ActionError::Busy(ActionKind::Mint))
    ));
    assert!(matches!(
        c.mint().await,
        Err(ActionError::Busy(ActionKind::Mint))
    ));
    // Reads are not gated and may overlap the write.
    assert_eq!(c.get_user_info().await.unwrap(), sample_info());
    assert_eq!(c.refresh().await.unwrap(), tokens(1_005));
    assert_eq!(c.busy(), Some(ActionKind::Mint));
    assert_eq!(
        banner_text(&c).as_deref(),
        Some("Transaction submitted, waiting for confirmation...")
    );

    gate.notify_one();
    in_flight.await.unwrap().unwrap();
    assert_eq!(c.busy(), None);
    assert!(!gateway.calls().contains(&"release"));
}

#[tokio::test]
async fn queries_show_activity_without_holding_the_busy_slot() {
    let gate = Arc::new(Notify::new());
    let gateway = Arc::new(MockGateway::with_slow_queries(gate.clone()));
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| f.query.address = format!("{}", user()));
    assert!(!c.snapshot().querying);

    let query = tokio::spawn({
        let c = c.clone();
        async move { c.get_user_info().await }
    });
    while !gateway.calls().contains(&"get_user_info") {
        tokio::task::yield_now().await;
    }
    let state = c.snapshot();
    assert!(state.querying);
    assert_eq!(state.busy, None);

    // A write still goes through while the query is pending.
    c.release().await.unwrap();
    assert!(c.querying());

    gate.notify_one();
    assert_eq!(query.await.unwrap().unwrap(), sample_info());
    assert!(!c.snapshot().querying);
}

#[tokio::test]
async fn revert_reason_reaches_the_banner() {
    let gateway = Arc::new(MockGateway::new());
    *gateway.revert.lock().unwrap() = Some("exceeds mint allowance".into());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| {
        f.mint.receiver = format!("{}", user());
        f.mint.amount = "5".into();
    });

    let err = c.mint().await.unwrap_err();
    assert_eq!(err.to_string(), "Mint failed: exceeds mint allowance");
    assert_eq!(
        banner_text(&c).as_deref(),
        Some("Mint failed: exceeds mint allowance")
    );
    assert_eq!(c.busy(), None);
    // Fields survive a failed submission.
    assert_eq!(c.forms().mint.amount, "5");
    assert!(!gateway.calls().contains(&"total_supply"));
}

#[tokio::test]
async fn missing_wallet_aborts_before_submission() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::absent()));

    assert!(matches!(c.release().await, Err(ActionError::Wallet(_))));
    assert_eq!(
        banner_text(&c).as_deref(),
        Some("No wallet provider configured (set wallet_url)")
    );
    assert!(gateway.calls().is_empty());
    assert_eq!(c.busy(), None);
}

#[tokio::test]
async fn set_lock_refreshes_the_lock_flag() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| f.global_lock.locked = true);

    c.set_lock().await.unwrap();
    assert_eq!(c.snapshot().chain.global_lock, Some(true));
    assert_eq!(
        banner_text(&c).as_deref(),
        Some("Global lock set successfully!")
    );
}

#[tokio::test]
async fn batch_set_user_sends_one_entry_and_resets_the_form() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| {
        f.user_params.lock_type = LockType::Suspend;
        f.user_params.period = "not a number".into();
        f.user_params.mint_amount = "250.5".into();
        f.user_params.user = format!("{}", user());
    });

    c.batch_set_user().await.unwrap();
    let batches = gateway.batches.lock().unwrap().clone();
    assert_eq!(batches.len(), 1);
    let params = &batches[0];
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].lock_type, LockType::Suspend);
    assert_eq!(params[0].period_secs, 0);
    assert_eq!(params[0].mint_amount, tokens(250) + tokens(1) / U256::from(2u8));
    assert_eq!(params[0].user, user());

    let form = c.forms().user_params;
    assert_eq!(form.lock_type, LockType::Linear);
    assert!(form.user.is_empty() && form.mint_amount.is_empty() && form.period.is_empty());
}

#[tokio::test]
async fn set_user_lock_clears_only_the_address() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| {
        f.user_lock.address = format!("{}", user());
        f.user_lock.locked = true;
    });

    c.set_user_lock().await.unwrap();
    let form = c.forms().user_lock;
    assert!(form.address.is_empty());
    assert!(form.locked);
}

#[tokio::test]
async fn failed_query_clears_the_displayed_result() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway.clone(), Arc::new(MockWallet::ready()));
    c.update_forms(|f| f.query.address = format!("{}", user()));

    assert_eq!(c.get_user_info().await.unwrap(), sample_info());
    assert_eq!(c.get_user_release_amount().await.unwrap(), tokens(25));
    let state = c.snapshot();
    assert_eq!(state.user_info, Some(sample_info()));
    assert_eq!(state.release_amount, Some(tokens(25)));
    assert_eq!(state.banner, None);

    *gateway.user_info.lock().unwrap() =
        Err(RpcError::Transport("connection refused".into()).into());
    assert!(matches!(c.get_user_info().await, Err(ActionError::Failed(_))));
    let state = c.snapshot();
    assert_eq!(state.user_info, None);
    assert_eq!(state.release_amount, Some(tokens(25)));
    assert!(state
        .banner
        .unwrap()
        .message
        .starts_with("Failed to get user info: RPC transport error"));

    // An unparsable address clears too.
    c.update_forms(|f| f.query.address = "nope".into());
    assert!(matches!(
        c.get_user_release_amount().await,
        Err(ActionError::InvalidInput(_))
    ));
    assert_eq!(c.snapshot().release_amount, None);
}

#[tokio::test(start_paused = true)]
async fn banners_clear_within_five_seconds() {
    let gateway = Arc::new(MockGateway::new());
    let c = controller(gateway, Arc::new(MockWallet::ready()));
    assert!(c.mint().await.is_err());
    assert!(c.banner().current().is_some());

    tokio::time::sleep(Duration::from_millis(4_999)).await;
    assert!(c.banner().current().is_some());
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(c.banner().current().is_none());
}

struct FlakySource {
    replies: Mutex<VecDeque<Result<u64, RpcError>>>,
}

#[async_trait]
impl BlockSource for FlakySource {
    async fn block_number(&self) -> Result<u64, RpcError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RpcError::Transport("exhausted".into())))
    }
}

#[tokio::test(start_paused = true)]
async fn poll_failure_keeps_height_and_raises_no_banner() {
    let source = Arc::new(FlakySource {
        replies: Mutex::new(
            vec![Ok(41_000_000), Err(RpcError::Http { status: 503 })].into(),
        ),
    });
    let poller = BlockHeightPoller::spawn(source, Duration::from_secs(60));
    let mut heights = poller.subscribe();
    let c = InteractionController::new(
        Arc::new(MockGateway::new()),
        Arc::new(MockWallet::ready()),
        BannerBoard::new(Duration::from_secs(5)),
    )
    .with_block_height(poller.subscribe());

    heights.changed().await.unwrap();
    assert_eq!(c.snapshot().chain.block_height, Some(41_000_000));

    tokio::time::sleep(Duration::from_secs(61)).await;
    let state = c.snapshot();
    assert_eq!(state.chain.block_height, Some(41_000_000));
    assert_eq!(state.banner, None);
}
