//! Conversions between wei and human-readable decimal ether strings.
//!
//! All on-chain amounts are `u128` wei. The API accepts and renders
//! decimal ether strings (e.g. `"0.1"`), mirroring the formatting the
//! original wallet tooling exposes to users.

use super::tx::ChainError;

/// Number of wei in one ether.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Number of decimal places in the ether representation.
const ETHER_DECIMALS: usize = 18;

/// Parses a decimal ether string (e.g. `"0.1"`, `"2"`) into wei.
///
/// Accepts at most 18 fractional digits. Negative values, empty strings,
/// and non-digit characters are rejected.
///
/// # Errors
///
/// Returns [`ChainError::InvalidAmount`] when the string is not a valid
/// non-negative decimal or overflows `u128`.
pub fn parse_ether(value: &str) -> Result<u128, ChainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ChainError::InvalidAmount(value.to_string()));
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if frac.len() > ETHER_DECIMALS {
        return Err(ChainError::InvalidAmount(value.to_string()));
    }
    if whole.is_empty() && frac.is_empty() {
        return Err(ChainError::InvalidAmount(value.to_string()));
    }

    let whole_wei = if whole.is_empty() {
        0u128
    } else {
        parse_digits(whole, value)?
            .checked_mul(WEI_PER_ETHER)
            .ok_or_else(|| ChainError::InvalidAmount(value.to_string()))?
    };

    let frac_wei = if frac.is_empty() {
        0u128
    } else {
        let scale = 10u128.pow((ETHER_DECIMALS - frac.len()) as u32);
        parse_digits(frac, value)?
            .checked_mul(scale)
            .ok_or_else(|| ChainError::InvalidAmount(value.to_string()))?
    };

    whole_wei
        .checked_add(frac_wei)
        .ok_or_else(|| ChainError::InvalidAmount(value.to_string()))
}

/// Parses a component as base-10 digits only. `u128::from_str` accepts a
/// leading `+`, which a decimal amount component must not.
fn parse_digits(digits: &str, original: &str) -> Result<u128, ChainError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChainError::InvalidAmount(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| ChainError::InvalidAmount(original.to_string()))
}

/// Formats a wei amount as a decimal ether string with trailing zeros
/// trimmed (`100000000000000000` → `"0.1"`, `2 * 10^18` → `"2"`).
#[must_use]
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let frac = wei % WEI_PER_ETHER;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_str = format!("{frac:018}");
    let trimmed = frac_str.trim_end_matches('0');
    format!("{whole}.{trimmed}")
}
