// Path: crates/cli/src/view.rs

//! Plain-text panels.

use crate::controller::{Forms, ViewState};
use hlink_types::app::{format_timestamp, ActionKind, Banner, ChainStatus, UserInfo};
use hlink_types::config::ConsoleConfig;
use hlink_types::units::{display_ether, display_units};
use hlink_types::{MAX_SUPPLY_TOKENS, TOKEN_SYMBOL, U256};
use std::fmt::Write;

const LOADING: &str = "Loading...";
const NOT_AVAILABLE: &str = "N/A";

fn amount(value: U256) -> String {
    format!("{} {}", display_ether(value), TOKEN_SYMBOL)
}

/// The user record as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfoView {
    pub whitelist: String,
    pub lock_type: String,
    pub start_time: String,
    pub last_withdraw_time: String,
    pub end_time: String,
    pub already_mint: String,
    pub total_mint: String,
}

impl From<&UserInfo> for UserInfoView {
    fn from(info: &UserInfo) -> Self {
        let optional_time = |t: Option<u64>| {
            t.map(format_timestamp)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        Self {
            whitelist: if info.whitelisted { "Yes" } else { "No" }.to_string(),
            lock_type: info.lock_type.to_string(),
            start_time: format_timestamp(info.start_time),
            last_withdraw_time: optional_time(info.last_withdraw_time),
            end_time: optional_time(info.end_time),
            already_mint: display_ether(info.already_minted),
            total_mint: display_ether(info.total_mint_allowance),
        }
    }
}

pub fn render_header(config: &ConsoleConfig) -> String {
    format!(
        "HLINK Token Console\nContract: {}\nExplorer: {}",
        config.contract_address,
        config.contract_explorer_url()
    )
}

pub fn render_total_supply(value: U256) -> String {
    format!("Total Supply: {}", amount(value))
}

/// Block height, supply and lock panels. Unknown values read `Loading...`.
pub fn render_status(chain: &ChainStatus) -> String {
    let height = chain
        .block_height
        .map(|h| display_units(U256::from(h), 0))
        .unwrap_or_else(|| LOADING.to_string());
    let supply = chain
        .total_supply
        .map(amount)
        .unwrap_or_else(|| LOADING.to_string());
    let lock = match chain.global_lock {
        Some(true) => "Locked",
        Some(false) => "Unlocked",
        None => LOADING,
    };
    format!(
        "Block Height: {}\nTotal Supply: {}\nMax Supply:   {} {}\nGlobal Lock:  {}",
        height,
        supply,
        display_units(U256::from(MAX_SUPPLY_TOKENS), 0),
        TOKEN_SYMBOL,
        lock
    )
}

/// One line for the banner, or `None` when the board is empty.
pub fn render_banner(banner: Option<&Banner>) -> Option<String> {
    banner.map(|b| {
        let tag = if b.is_error { "error" } else { "ok" };
        format!("[{}] {}", tag, b.message)
    })
}

pub fn render_busy(busy: Option<ActionKind>) -> Option<String> {
    busy.map(|kind| format!("Processing ({})...", kind))
}

pub fn render_querying(querying: bool) -> Option<String> {
    querying.then(|| "Querying...".to_string())
}

pub fn render_user_info(info: &UserInfo) -> String {
    let v = UserInfoView::from(info);
    format!(
        "User Info\n  Whitelist:          {}\n  Lock Type:          {}\n  Start Time:         {}\n  Last Withdraw Time: {}\n  End Time:           {}\n  Already Minted:     {} {sym}\n  Total Mint:         {} {sym}",
        v.whitelist,
        v.lock_type,
        v.start_time,
        v.last_withdraw_time,
        v.end_time,
        v.already_mint,
        v.total_mint,
        sym = TOKEN_SYMBOL
    )
}

pub fn render_release_amount(value: U256) -> String {
    format!("Releasable Amount: {}", amount(value))
}

/// Current form contents, one panel per line.
pub fn render_forms(forms: &Forms) -> String {
    let show = |s: &str| {
        if s.trim().is_empty() {
            "-".to_string()
        } else {
            s.trim().to_string()
        }
    };
    let mut out = String::from("Forms");
    let _ = write!(
        out,
        "\n  mint:          receiver={} amount={}",
        show(&forms.mint.receiver),
        show(&forms.mint.amount)
    );
    let _ = write!(out, "\n  set-lock:      locked={}", forms.global_lock.locked);
    let _ = write!(
        out,
        "\n  set-user-lock: address={} locked={}",
        show(&forms.user_lock.address),
        forms.user_lock.locked
    );
    let _ = write!(
        out,
        "\n  set-user:      lock-type={} period={} amount={} user={}",
        forms.user_params.lock_type,
        forms.user_params.period_secs(),
        show(&forms.user_params.mint_amount),
        show(&forms.user_params.user)
    );
    let _ = write!(out, "\n  query:         address={}", show(&forms.query.address));
    out
}

/// The whole page.
pub fn render_view(config: &ConsoleConfig, state: &ViewState) -> String {
    let mut sections = vec![render_header(config), render_status(&state.chain)];
    sections.extend(render_busy(state.busy));
    sections.extend(render_querying(state.querying));
    sections.extend(render_banner(state.banner.as_ref()));
    if let Some(info) = &state.user_info {
        sections.push(render_user_info(info));
    }
    if let Some(value) = state.release_amount {
        sections.push(render_release_amount(value));
    }
    sections.join("\n\n")
}
