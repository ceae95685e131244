// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # HLINK Console
//!
//! Operator tooling for the HLINK token contract: one-shot reads and writes,
//! and an interactive console with a live block height.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hlink_types::config::ConsoleConfig;
use std::path::PathBuf;

mod commands;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "hlink",
    version,
    about = "Operator console for the HLINK token contract.",
    long_about = "Reads supply, lock and per-user state from the HLINK token contract and submits owner transactions through a wallet provider endpoint."
)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    // --- Reads ---
    /// Show block height, total supply and the global lock.
    Status,

    // --- Actions ---
    #[clap(flatten)]
    Action(action::Action),

    // --- Session ---
    /// Start an interactive session with a live block height.
    Console,

    // --- Tools ---
    /// Generate configuration files.
    Config(config::ConfigCmdArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config(args) => return config::run(args),
        other => other,
    };

    let cfg = ConsoleConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    hlink_telemetry::init_tracing(cfg.log_format)?;

    match command {
        Commands::Status => status::run(cfg).await,
        Commands::Action(action) => action::run(cfg, action).await,
        Commands::Console => console::run(cfg).await,
        Commands::Config(_) => Ok(()),
    }
}
