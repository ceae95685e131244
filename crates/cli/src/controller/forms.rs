// Path: crates/cli/src/controller/forms.rs

//! Operator-entered form values, kept as raw text until an action runs.

use hlink_types::app::LockType;
use hlink_types::error::ActionError;
use hlink_types::units::parse_ether;
use hlink_types::{Address, U256};

/// Inputs of the mint panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintForm {
    pub receiver: String,
    pub amount: String,
}

/// Inputs of the global lock panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalLockForm {
    pub locked: bool,
}

/// Inputs of the per-user lock panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLockForm {
    pub address: String,
    pub locked: bool,
}

/// Inputs of the user configuration panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserParamsForm {
    pub lock_type: LockType,
    /// Seconds; empty or unparsable means zero.
    pub period: String,
    pub mint_amount: String,
    pub user: String,
}

impl Default for UserParamsForm {
    fn default() -> Self {
        Self {
            lock_type: LockType::Suspend,
            period: String::new(),
            mint_amount: String::new(),
            user: String::new(),
        }
    }
}

impl UserParamsForm {
    /// The state the panel returns to after a successful submission.
    pub fn after_submit() -> Self {
        Self {
            lock_type: LockType::Linear,
            ..Self::default()
        }
    }

    /// `period` as seconds.
    pub fn period_secs(&self) -> u64 {
        self.period.trim().parse().unwrap_or(0)
    }
}

/// The shared address box used by both queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryForm {
    pub address: String,
}

/// Every form on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub mint: MintForm,
    pub global_lock: GlobalLockForm,
    pub user_lock: UserLockForm,
    pub user_params: UserParamsForm,
    pub query: QueryForm,
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses an address field, prefixing failures with the action's banner prefix.
pub(crate) fn parse_address(prefix: &str, value: &str) -> Result<Address, ActionError> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|e| ActionError::InvalidInput(format!("{}invalid address `{}`: {}", prefix, value.trim(), e)))
}

/// Parses a token amount field in whole-token units.
pub(crate) fn parse_amount(prefix: &str, value: &str) -> Result<U256, ActionError> {
    parse_ether(value).map_err(|e| ActionError::InvalidInput(format!("{}{}", prefix, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_defaults_to_zero() {
        let mut form = UserParamsForm::default();
        assert_eq!(form.period_secs(), 0);
        form.period = "abc".into();
        assert_eq!(form.period_secs(), 0);
        form.period = " 86400 ".into();
        assert_eq!(form.period_secs(), 86_400);
    }

    #[test]
    fn reset_switches_to_linear() {
        assert_eq!(UserParamsForm::default().lock_type, LockType::Suspend);
        let reset = UserParamsForm::after_submit();
        assert_eq!(reset.lock_type, LockType::Linear);
        assert!(reset.user.is_empty() && reset.mint_amount.is_empty() && reset.period.is_empty());
    }

    #[test]
    fn parse_failures_carry_the_prefix() {
        let err = parse_address("Mint failed: ", "0x1234").unwrap_err();
        assert!(err.to_string().starts_with("Mint failed: invalid address `0x1234`"));

        let err = parse_amount("Mint failed: ", "1.2.3").unwrap_err();
        assert!(err.to_string().starts_with("Mint failed: "));
        assert_eq!(
            parse_amount("Mint failed: ", "1.5").unwrap(),
            U256::from(1_500_000_000_000_000_000u128)
        );
    }
}
