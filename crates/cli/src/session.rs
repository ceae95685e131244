// Path: crates/cli/src/session.rs

//! Wires the JSON-RPC implementations into a controller.

use crate::banner::BannerBoard;
use crate::controller::InteractionController;
use crate::poller::{BlockHeightPoller, PollerHandle};
use crate::view;
use hlink_client::{ChainReader, ContractGateway, InjectedWalletConnector, JsonRpcClient};
use hlink_types::config::ConsoleConfig;
use std::sync::Arc;

/// A connected console: the controller, the chain reader and, for
/// long-running sessions, the block height poller.
pub struct Session {
    config: ConsoleConfig,
    reader: Arc<ChainReader>,
    controller: Arc<InteractionController>,
    poller: Option<PollerHandle>,
}

impl Session {
    /// Builds the stack from `config`. No request is made yet.
    ///
    /// With `poll` set the block height poller is spawned immediately, which
    /// requires a Tokio runtime.
    pub fn open(config: ConsoleConfig, poll: bool) -> Self {
        let rpc = Arc::new(JsonRpcClient::new(config.rpc_url.clone()));
        let reader = Arc::new(ChainReader::new(rpc.clone()));
        let gateway = Arc::new(ContractGateway::new(
            config.contract_address,
            rpc,
            config.receipt_poll_interval(),
        ));

        let wallet = InjectedWalletConnector::from_config(&config);
        if !wallet.is_configured() {
            tracing::warn!(target: "session", "No wallet_url configured; write actions are unavailable.");
        }
        if config.wallet_connect_project_id.is_some() {
            tracing::debug!(target: "session", "wallet-connection project id supplied");
        }

        let banner = BannerBoard::new(config.banner_ttl());
        let mut controller = InteractionController::new(gateway, Arc::new(wallet), banner);

        let poller = poll.then(|| BlockHeightPoller::spawn(reader.clone(), config.poll_interval()));
        if let Some(p) = &poller {
            controller = controller.with_block_height(p.subscribe());
        }

        tracing::info!(
            target: "session",
            rpc = %config.rpc_url,
            contract = %config.contract_address,
            "session opened"
        );

        Self {
            config,
            reader,
            controller: Arc::new(controller),
            poller,
        }
    }

    /// Logs the chain id and loads the supply and lock panels.
    pub async fn initial_load(&self) {
        match self.reader.chain_id().await {
            Ok(id) => tracing::info!(target: "session", chain_id = id, "connected"),
            Err(e) => tracing::warn!(target: "session", "Failed to fetch chain id: {}", e),
        }
        let c = &self.controller;
        let _ = tokio::join!(c.refresh_total_supply(), c.refresh_lock_state());
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn controller(&self) -> &Arc<InteractionController> {
        &self.controller
    }

    pub fn reader(&self) -> &ChainReader {
        &self.reader
    }

    /// The full page as text.
    pub fn render(&self) -> String {
        view::render_view(&self.config, &self.controller.snapshot())
    }

    /// Stops the poller, if any.
    pub async fn close(mut self) {
        if let Some(poller) = self.poller.take() {
            poller.shutdown().await;
        }
    }
}
