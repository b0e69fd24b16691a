use anchor_lang::prelude::*;

use crate::errors::RangeError;
use crate::math::big_num::U256;
use crate::math::liquidity_math::{
    get_amount0_for_liquidity, get_amount1_for_liquidity, get_liquidity_for_amount0,
    get_liquidity_for_amount1,
};
use crate::math::tick_math::get_sqrt_price_at_tick;

fn range_sqrt_prices(tick_lower: i32, tick_upper: i32) -> Result<(U256, U256)> {
    require!(tick_lower < tick_upper, RangeError::InvalidRange);
    Ok((
        get_sqrt_price_at_tick(tick_lower)?,
        get_sqrt_price_at_tick(tick_upper)?,
    ))
}

/// Amount of token1 matching `amount0` for a deposit into [tick_lower, tick_upper)
///
/// Returns 0 when the price is outside the range: below it the position
/// holds token0 only, above it token0 does not determine the deposit.
pub fn paired_amount1(
    amount0: u128,
    tick_lower: i32,
    tick_upper: i32,
    sqrt_price_current_x96: U256,
) -> Result<u128> {
    let (sqrt_price_lower, sqrt_price_upper) = range_sqrt_prices(tick_lower, tick_upper)?;

    if sqrt_price_current_x96 <= sqrt_price_lower || sqrt_price_current_x96 >= sqrt_price_upper {
        return Ok(0);
    }

    let liquidity = get_liquidity_for_amount0(sqrt_price_current_x96, sqrt_price_upper, amount0)?;
    get_amount1_for_liquidity(sqrt_price_lower, sqrt_price_current_x96, liquidity, true)
}

/// Amount of token0 matching `amount1` for a deposit into [tick_lower, tick_upper)
pub fn paired_amount0(
    amount1: u128,
    tick_lower: i32,
    tick_upper: i32,
    sqrt_price_current_x96: U256,
) -> Result<u128> {
    let (sqrt_price_lower, sqrt_price_upper) = range_sqrt_prices(tick_lower, tick_upper)?;

    if sqrt_price_current_x96 <= sqrt_price_lower || sqrt_price_current_x96 >= sqrt_price_upper {
        return Ok(0);
    }

    let liquidity = get_liquidity_for_amount1(sqrt_price_lower, sqrt_price_current_x96, amount1)?;
    get_amount0_for_liquidity(sqrt_price_current_x96, sqrt_price_upper, liquidity, true)
}
