// Path: crates/types/src/units.rs
//! Conversion between operator-supplied decimal strings and the contract's
//! base-10^18 integer amounts.

use crate::error::UnitsError;
use alloy_primitives::U256;

/// Number of fractional digits used by the token contract.
pub const ETHER_DECIMALS: u8 = 18;

/// Fraction digits kept by [`display_units`].
const DISPLAY_FRACTION_DIGITS: u8 = 3;

fn ten_pow(exp: u8) -> U256 {
    U256::from(10u8).pow(U256::from(exp))
}

/// Parses a decimal string such as `"1.5"` into a fixed-point integer scaled by
/// `10^decimals`.
///
/// Leading/trailing whitespace is ignored. Trailing fractional zeros beyond
/// `decimals` are accepted; any other excess precision is rejected rather than
/// truncated.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, UnitsError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(UnitsError::Empty);
    }
    if s.starts_with('-') {
        return Err(UnitsError::Negative(s.to_string()));
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(UnitsError::InvalidDigit(s.to_string()));
    }
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(UnitsError::InvalidDigit(s.to_string()));
    }

    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.len() > usize::from(decimals) {
        return Err(UnitsError::TooManyDecimals {
            input: s.to_string(),
            max: decimals,
        });
    }

    let whole = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|_| UnitsError::Overflow(s.to_string()))?
    };
    let fraction = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let padded = format!("{:0<width$}", frac_part, width = usize::from(decimals));
        U256::from_str_radix(&padded, 10).map_err(|_| UnitsError::Overflow(s.to_string()))?
    };

    whole
        .checked_mul(ten_pow(decimals))
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or_else(|| UnitsError::Overflow(s.to_string()))
}

/// Parses a decimal token amount with 18 fractional digits.
pub fn parse_ether(input: &str) -> Result<U256, UnitsError> {
    parse_units(input, ETHER_DECIMALS)
}

/// Formats a fixed-point integer back to its exact decimal form.
///
/// The result always carries a fractional part (`"500.0"`, `"0.25"`), so it can
/// be fed back into [`parse_units`] without loss.
pub fn format_units(value: U256, decimals: u8) -> String {
    let unit = ten_pow(decimals);
    let whole = value / unit;
    let remainder = value % unit;

    let mut fraction = format!(
        "{:0>width$}",
        remainder.to_string(),
        width = usize::from(decimals)
    );
    while fraction.ends_with('0') {
        fraction.pop();
    }
    if fraction.is_empty() {
        fraction.push('0');
    }
    format!("{}.{}", whole, fraction)
}

/// Formats an 18-decimal amount exactly.
pub fn format_ether(value: U256) -> String {
    format_units(value, ETHER_DECIMALS)
}

/// Formats an amount for humans: thousands separators, at most three fraction
/// digits rounded half-up, no trailing zeros (`1,234.5`, `500`).
pub fn display_units(value: U256, decimals: u8) -> String {
    let shown = decimals.min(DISPLAY_FRACTION_DIGITS);
    let dropped = decimals - shown;

    let rounded = if dropped == 0 {
        value
    } else {
        let half = ten_pow(dropped) / U256::from(2u8);
        value.saturating_add(half) / ten_pow(dropped)
    };

    let unit = ten_pow(shown);
    let whole = group_thousands(&(rounded / unit).to_string());
    if shown == 0 {
        return whole;
    }

    let fraction = format!(
        "{:0>width$}",
        (rounded % unit).to_string(),
        width = usize::from(shown)
    );
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Human display of an 18-decimal amount.
pub fn display_ether(value: U256) -> String {
    display_units(value, ETHER_DECIMALS)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
