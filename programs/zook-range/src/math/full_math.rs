//! Full precision math operations
//!
//! Implements 512-bit intermediate products required for
//! precise liquidity and amount calculations on Q64.96 values.

use crate::errors::RangeError;
use crate::math::big_num::U256;
use anchor_lang::prelude::*;

/// Multiply two U256 numbers and divide by a third, with full precision
/// Handles cases where the intermediate product would overflow 256 bits
///
/// # Formula
/// result = floor((a * b) / denominator)
///
/// # Errors
/// * `DivisionByZero` if `denominator` is zero
/// * `MathOverflow` if the result does not fit in 256 bits
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    require!(!denominator.is_zero(), RangeError::DivisionByZero);

    // 256 x 256 bits always fits in 512 bits
    let product = a.widen() * b.widen();
    (product / denominator.widen()).narrow()
}

/// Multiply two U256 numbers and divide by a third, rounding up
pub fn mul_div_round_up(a: U256, b: U256, denominator: U256) -> Result<U256> {
    require!(!denominator.is_zero(), RangeError::DivisionByZero);

    let product = a.widen() * b.widen();
    let wide_denominator = denominator.widen();
    let result = (product / wide_denominator).narrow()?;

    if (product % wide_denominator).is_zero() {
        Ok(result)
    } else {
        result
            .checked_add(U256::one())
            .ok_or(RangeError::MathOverflow.into())
    }
}

/// Divide, rounding up
pub fn div_round_up(a: U256, denominator: U256) -> Result<U256> {
    require!(!denominator.is_zero(), RangeError::DivisionByZero);

    let (quotient, remainder) = a.div_mod(denominator);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // quotient < a when denominator > 1, and remainder is zero when it is 1
        Ok(quotient + U256::one())
    }
}
