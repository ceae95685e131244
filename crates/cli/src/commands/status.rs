// Path: crates/cli/src/commands/status.rs

use anyhow::Result;
use hlink_cli::view;
use hlink_cli::Session;
use hlink_types::config::ConsoleConfig;

pub async fn run(cfg: ConsoleConfig) -> Result<()> {
    let session = Session::open(cfg, false);
    session.initial_load().await;

    let mut state = session.controller().snapshot();
    match session.reader().block_number().await {
        Ok(height) => state.chain.block_height = Some(height),
        Err(e) => tracing::warn!(target: "status", "Failed to fetch block number: {}", e),
    }

    println!("{}", view::render_view(session.config(), &state));
    session.close().await;
    Ok(())
}
