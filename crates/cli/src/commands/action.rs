// Path: crates/cli/src/commands/action.rs

//! Operator actions shared by the one-shot subcommands and the console.

use anyhow::{anyhow, Result};
use clap::{ArgAction, Args, Subcommand};
use hlink_cli::controller::Forms;
use hlink_cli::{view, InteractionController, Session};
use hlink_types::app::{Banner, LockType, TxReceipt, UserInfo};
use hlink_types::config::ConsoleConfig;
use hlink_types::error::ActionError;
use hlink_types::U256;
use tokio::sync::watch;

#[derive(Args, Debug, Clone)]
pub struct MintArgs {
    /// Receiving address.
    pub receiver: String,
    /// Amount in whole tokens, e.g. `1500.25`.
    pub amount: String,
}

#[derive(Args, Debug, Clone)]
pub struct SetLockArgs {
    /// `true` to lock non-whitelisted transfers.
    #[clap(action = ArgAction::Set)]
    pub locked: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SetUserLockArgs {
    pub address: String,
    #[clap(action = ArgAction::Set)]
    pub locked: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SetUserArgs {
    /// `suspend`, `linear` or a raw value.
    #[clap(long, default_value = "suspend", value_parser = parse_lock_type)]
    pub lock_type: LockType,
    /// Release period in seconds.
    #[clap(long, default_value = "")]
    pub period: String,
    /// Mint allowance in whole tokens.
    #[clap(long)]
    pub amount: String,
    #[clap(long)]
    pub user: String,
}

#[derive(Args, Debug, Clone)]
pub struct AddressArgs {
    pub address: String,
}

fn parse_lock_type(s: &str) -> Result<LockType, String> {
    match s.to_ascii_lowercase().as_str() {
        "suspend" => Ok(LockType::Suspend),
        "linear" => Ok(LockType::Linear),
        other => other
            .parse::<u8>()
            .map(LockType::from)
            .map_err(|_| format!("expected suspend, linear or 0-255, got `{}`", s)),
    }
}

/// Everything that runs through the controller.
#[derive(Subcommand, Debug, Clone)]
pub enum Action {
    /// Re-read the total supply.
    Refresh,
    /// Mint tokens to an address.
    Mint(MintArgs),
    /// Set the global transfer lock.
    SetLock(SetLockArgs),
    /// Set the lock override of one address.
    SetUserLock(SetUserLockArgs),
    /// Configure one user's release schedule and mint allowance.
    SetUser(SetUserArgs),
    /// Show a user's record.
    UserInfo(AddressArgs),
    /// Show the amount a user can release now.
    ReleaseAmount(AddressArgs),
    /// Release the caller's unlocked tokens.
    Release,
}

impl Action {
    /// Copies the arguments into the matching form.
    fn fill(&self, forms: &mut Forms) {
        match self {
            Self::Mint(a) => {
                forms.mint.receiver = a.receiver.clone();
                forms.mint.amount = a.amount.clone();
            }
            Self::SetLock(a) => forms.global_lock.locked = a.locked,
            Self::SetUserLock(a) => {
                forms.user_lock.address = a.address.clone();
                forms.user_lock.locked = a.locked;
            }
            Self::SetUser(a) => {
                forms.user_params.lock_type = a.lock_type;
                forms.user_params.period = a.period.clone();
                forms.user_params.mint_amount = a.amount.clone();
                forms.user_params.user = a.user.clone();
            }
            Self::UserInfo(a) | Self::ReleaseAmount(a) => forms.query.address = a.address.clone(),
            Self::Refresh | Self::Release => {}
        }
    }
}

/// What a settled action produced.
#[derive(Debug)]
pub enum Outcome {
    Confirmed(TxReceipt),
    Supply(U256),
    UserInfo(UserInfo),
    ReleaseAmount(U256),
}

impl Outcome {
    pub fn render(&self) -> String {
        match self {
            Self::Confirmed(r) => format!(
                "Transaction {} confirmed in block {}",
                r.transaction_hash,
                r.block_number
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "?".into())
            ),
            Self::Supply(s) => view::render_total_supply(*s),
            Self::UserInfo(info) => view::render_user_info(info),
            Self::ReleaseAmount(a) => view::render_release_amount(*a),
        }
    }
}

/// Fills the forms from `action` and runs it to settlement.
pub async fn perform(
    controller: &InteractionController,
    action: Action,
) -> Result<Outcome, ActionError> {
    controller.update_forms(|forms| action.fill(forms));
    match action {
        Action::Refresh => controller.refresh().await.map(Outcome::Supply),
        Action::Mint(_) => controller.mint().await.map(Outcome::Confirmed),
        Action::SetLock(_) => controller.set_lock().await.map(Outcome::Confirmed),
        Action::SetUserLock(_) => controller.set_user_lock().await.map(Outcome::Confirmed),
        Action::SetUser(_) => controller.batch_set_user().await.map(Outcome::Confirmed),
        Action::UserInfo(_) => controller.get_user_info().await.map(Outcome::UserInfo),
        Action::ReleaseAmount(_) => controller
            .get_user_release_amount()
            .await
            .map(Outcome::ReleaseAmount),
        Action::Release => controller.release().await.map(Outcome::Confirmed),
    }
}

pub fn print_banner(banner: Option<&Banner>) {
    if let Some(line) = view::render_banner(banner) {
        println!("{}", line);
    }
}

/// Runs one action, echoing every banner it raises.
pub async fn run(cfg: ConsoleConfig, action: Action) -> Result<()> {
    let session = Session::open(cfg, false);
    let controller = session.controller().clone();
    let mut banners: watch::Receiver<Option<Banner>> = controller.banner().subscribe();

    let settled = perform(&controller, action);
    tokio::pin!(settled);
    let result = loop {
        tokio::select! {
            res = &mut settled => break res,
            Ok(()) = banners.changed() => print_banner(banners.borrow_and_update().as_ref()),
        }
    };
    if banners.has_changed().unwrap_or(false) {
        print_banner(banners.borrow_and_update().as_ref());
    }

    session.close().await;
    match result {
        Ok(outcome) => {
            println!("{}", outcome.render());
            Ok(())
        }
        Err(e) => Err(anyhow!(e)),
    }
}
