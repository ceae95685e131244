// Path: crates/cli/src/commands/console.rs

//! Interactive session.
//!
//! Actions run in the background so the console stays responsive and the
//! busy slot is observable; banners are echoed as they change.

use super::action::{perform, print_banner, Action};
use anyhow::Result;
use clap::{Parser, Subcommand};
use hlink_cli::{view, Session};
use hlink_types::config::ConsoleConfig;
use hlink_types::error::ActionError;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[clap(no_binary_name = true, disable_version_flag = true)]
struct ConsoleLine {
    #[clap(subcommand)]
    command: ConsoleCommand,
}

#[derive(Subcommand, Debug)]
enum ConsoleCommand {
    /// Redraw the page.
    #[clap(alias = "status")]
    Show,
    /// Show the current form values.
    Forms,
    #[clap(flatten)]
    Action(Action),
    /// Leave the console.
    #[clap(alias = "exit")]
    Quit,
}

pub async fn run(cfg: ConsoleConfig) -> Result<()> {
    let session = Session::open(cfg, true);
    session.initial_load().await;
    println!("{}", session.render());
    println!("\nType `help` for commands.");

    let controller = session.controller().clone();
    let mut banners = controller.banner().subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(l) => l,
                    None => break,
                };
                if line.trim().is_empty() {
                    continue;
                }
                let parsed = match ConsoleLine::try_parse_from(line.split_whitespace()) {
                    Ok(p) => p,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                match parsed.command {
                    ConsoleCommand::Show => println!("{}", session.render()),
                    ConsoleCommand::Forms => println!("{}", view::render_forms(&controller.forms())),
                    ConsoleCommand::Quit => break,
                    ConsoleCommand::Action(action) => {
                        let c = controller.clone();
                        tokio::spawn(async move {
                            match perform(&c, action).await {
                                Ok(outcome) => println!("{}", outcome.render()),
                                // Busy rejections raise no banner.
                                Err(e @ ActionError::Busy(_)) => println!("{}", e),
                                Err(_) => {}
                            }
                        });
                    }
                }
            }
            Ok(()) = banners.changed() => {
                print_banner(banners.borrow_and_update().as_ref());
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    if let Some(kind) = controller.busy() {
        tracing::warn!(target: "console", action = %kind, "leaving with an action in flight");
    }
    session.close().await;
    Ok(())
}
