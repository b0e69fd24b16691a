//! Utility functions for Zook Liquidity

use anchor_lang::prelude::*;
use num_traits::checked_pow;

use crate::constants::MAX_TOKEN_DECIMALS;
use crate::errors::RangeError;

/// 10^decimals as a u128
fn unit(decimals: u8) -> Result<u128> {
    require!(decimals <= MAX_TOKEN_DECIMALS, RangeError::InvalidDecimals);
    checked_pow(10u128, decimals as usize).ok_or(RangeError::MathOverflow.into())
}

fn parse_digits(digits: &str) -> Result<u128> {
    digits.bytes().try_fold(0u128, |acc, byte| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add((byte - b'0') as u128))
            .ok_or(RangeError::MathOverflow.into())
    })
}

/// Convert a non-negative decimal string ("1.5", "0.25", "42") into smallest
/// units at `decimals` precision
pub fn parse_amount(text: &str, decimals: u8) -> Result<u128> {
    let unit = unit(decimals)?;
    let text = text.trim();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };
    require!(
        !(whole.is_empty() && fraction.is_empty()),
        RangeError::InvalidAmount
    );
    require!(
        whole.bytes().all(|b| b.is_ascii_digit()) && fraction.bytes().all(|b| b.is_ascii_digit()),
        RangeError::InvalidAmount
    );

    let fraction = fraction.trim_end_matches('0');
    require!(
        fraction.len() <= decimals as usize,
        RangeError::InvalidAmount
    );

    let whole_units = parse_digits(whole)?
        .checked_mul(unit)
        .ok_or(RangeError::MathOverflow)?;
    let fraction_units = parse_digits(fraction)?
        .checked_mul(unit / checked_pow(10u128, fraction.len()).ok_or(RangeError::MathOverflow)?)
        .ok_or(RangeError::MathOverflow)?;

    whole_units
        .checked_add(fraction_units)
        .ok_or(RangeError::MathOverflow.into())
}

/// Render smallest units as a decimal string without trailing zeros
pub fn format_amount(value: u128, decimals: u8) -> Result<String> {
    let unit = unit(decimals)?;
    let whole = value / unit;
    let fraction = value % unit;

    if fraction == 0 {
        return Ok(whole.to_string());
    }

    let fraction = format!("{:0width$}", fraction, width = decimals as usize);
    Ok(format!("{}.{}", whole, fraction.trim_end_matches('0')))
}
