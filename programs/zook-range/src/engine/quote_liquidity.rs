use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_SQRT_PRICE_X96, MIN_SQRT_PRICE_X96};
use crate::errors::RangeError;
use crate::math::big_num::U256;
use crate::math::liquidity_math::{get_amounts_for_liquidity, get_liquidity_for_amounts};
use crate::math::price_math::price_from_sqrt_price;
use crate::math::tick_math::get_sqrt_price_at_tick;
use crate::state::LiquidityQuote;

/// Size a deposit into [tick_lower, tick_upper) at the current sqrt price
///
/// Liquidity is the largest value whose required amounts (rounded up) stay
/// within both desired amounts. Caps are the desired amounts inflated by
/// `slippage_bps`, never deflated.
#[allow(clippy::too_many_arguments)]
pub fn quote_liquidity(
    sqrt_price_current_x96: U256,
    tick_lower: i32,
    tick_upper: i32,
    amount0_desired: u128,
    amount1_desired: u128,
    slippage_bps: i32,
    decimals0: u8,
    decimals1: u8,
) -> Result<LiquidityQuote> {
    require!(tick_lower < tick_upper, RangeError::InvalidRange);
    require!(
        sqrt_price_current_x96 >= MIN_SQRT_PRICE_X96 && sqrt_price_current_x96 <= MAX_SQRT_PRICE_X96,
        RangeError::OutOfRange
    );

    let sqrt_price_lower = get_sqrt_price_at_tick(tick_lower)?;
    let sqrt_price_upper = get_sqrt_price_at_tick(tick_upper)?;

    let liquidity = get_liquidity_for_amounts(
        sqrt_price_current_x96,
        sqrt_price_lower,
        sqrt_price_upper,
        amount0_desired,
        amount1_desired,
    )?;

    let (amount0_expected, amount1_expected) = get_amounts_for_liquidity(
        sqrt_price_current_x96,
        sqrt_price_lower,
        sqrt_price_upper,
        liquidity,
        true,
    )?;

    Ok(LiquidityQuote {
        tick_lower,
        tick_upper,
        lower_price: price_from_sqrt_price(sqrt_price_lower, decimals0, decimals1)?,
        upper_price: price_from_sqrt_price(sqrt_price_upper, decimals0, decimals1)?,
        liquidity,
        amount0_expected,
        amount1_expected,
        amount0_max: apply_slippage(amount0_desired, slippage_bps)?,
        amount1_max: apply_slippage(amount1_desired, slippage_bps)?,
    })
}

/// amount * (10000 + slippage_bps) / 10000, rounded up
pub fn apply_slippage(amount: u128, slippage_bps: i32) -> Result<u128> {
    require!(slippage_bps >= 0, RangeError::InvalidSlippage);

    let multiplier = BPS_DENOMINATOR + slippage_bps as u128;
    let scaled = amount
        .checked_mul(multiplier)
        .ok_or(RangeError::InvalidSlippage)?;

    let capped = scaled / BPS_DENOMINATOR;
    if scaled % BPS_DENOMINATOR == 0 {
        Ok(capped)
    } else {
        Ok(capped + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_TICK, Q96};
    use proptest::prelude::*;

    fn err(e: RangeError) -> anchor_lang::error::Error {
        e.into()
    }

    #[test]
    fn test_slippage_exact() {
        assert_eq!(apply_slippage(1_000_000, 50).unwrap(), 1_005_000);
    }

    #[test]
    fn test_slippage_zero() {
        assert_eq!(apply_slippage(1_000_000, 0).unwrap(), 1_000_000);
        assert_eq!(apply_slippage(0, 50).unwrap(), 0);
    }

    #[test]
    fn test_slippage_rounds_up() {
        // 1 * 1.005 = 1.005 -> 2
        assert_eq!(apply_slippage(1, 50).unwrap(), 2);
    }

    #[test]
    fn test_slippage_negative() {
        assert_eq!(apply_slippage(1_000, -1).unwrap_err(), err(RangeError::InvalidSlippage));
    }

    #[test]
    fn test_slippage_overflow() {
        assert_eq!(apply_slippage(u128::MAX, 50).unwrap_err(), err(RangeError::InvalidSlippage));
        assert!(apply_slippage(u128::MAX / 20_000, i32::MAX).is_err());
    }

    #[test]
    fn test_quote_zero_amounts() {
        let quote = quote_liquidity(Q96, -1064, 952, 0, 0, 50, 18, 6).unwrap();
        assert_eq!(quote.liquidity, 0);
        assert_eq!(quote.amount0_max, 0);
        assert_eq!(quote.amount1_max, 0);
        assert_eq!(quote.amount0_expected, 0);
        assert_eq!(quote.amount1_expected, 0);
        assert!(quote.is_empty());
    }

    #[test]
    fn test_quote_in_range() {
        let quote = quote_liquidity(Q96, -1064, 952, 1_000_000, 1_000_000, 50, 6, 6).unwrap();
        assert!(quote.liquidity > 0);
        assert_eq!(quote.tick_lower, -1064);
        assert_eq!(quote.tick_upper, 952);
        assert_eq!(quote.amount0_max, 1_005_000);
        assert_eq!(quote.amount1_max, 1_005_000);
        assert!(quote.amount0_expected <= 1_000_000);
        assert!(quote.amount1_expected <= 1_000_000);
        // One leg is fully used, up to rounding
        assert!(quote.amount0_expected >= 999_990 || quote.amount1_expected >= 999_990);
        assert!(quote.lower_price.get() < 1.0 && quote.upper_price.get() > 1.0);
    }

    #[test]
    fn test_quote_below_range_is_token0_only() {
        let current = get_sqrt_price_at_tick(-5000).unwrap();
        let quote = quote_liquidity(current, -1064, 952, 1_000_000, 1_000_000, 0, 6, 6).unwrap();
        assert!(quote.liquidity > 0);
        assert_eq!(quote.amount1_expected, 0);
    }

    #[test]
    fn test_quote_above_range_is_token1_only() {
        let current = get_sqrt_price_at_tick(5000).unwrap();
        let quote = quote_liquidity(current, -1064, 952, 1_000_000, 1_000_000, 0, 6, 6).unwrap();
        assert!(quote.liquidity > 0);
        assert_eq!(quote.amount0_expected, 0);
    }

    #[test]
    fn test_quote_invalid_range() {
        assert_eq!(
            quote_liquidity(Q96, 952, 952, 1, 1, 50, 18, 6).unwrap_err(),
            err(RangeError::InvalidRange)
        );
        assert_eq!(
            quote_liquidity(Q96, 952, -1064, 1, 1, 50, 18, 6).unwrap_err(),
            err(RangeError::InvalidRange)
        );
    }

    #[test]
    fn test_quote_out_of_range_inputs() {
        assert_eq!(
            quote_liquidity(Q96, -1064, MAX_TICK + 28, 1, 1, 50, 18, 6).unwrap_err(),
            err(RangeError::OutOfRange)
        );
        assert_eq!(
            quote_liquidity(U256::zero(), -1064, 952, 1, 1, 50, 18, 6).unwrap_err(),
            err(RangeError::OutOfRange)
        );
    }

    #[test]
    fn test_quote_negative_slippage() {
        assert_eq!(
            quote_liquidity(Q96, -1064, 952, 1, 1, -5, 18, 6).unwrap_err(),
            err(RangeError::InvalidSlippage)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_caps_never_below_desired(amount in 0u128..=u128::MAX / 20_000, bps in 0i32..=10_000) {
            let capped = apply_slippage(amount, bps).unwrap();
            prop_assert!(capped >= amount);
            if amount > 0 {
                prop_assert_eq!(capped == amount, bps == 0);
            }
        }

        #[test]
        fn prop_quote_within_desired(
            current in -100_000i32..100_000,
            amount0 in 0u128..=1_000_000_000_000_000_000_000_000u128,
            amount1 in 0u128..=1_000_000_000_000_000_000_000_000u128,
            bps in 0i32..=500,
        ) {
            let sqrt_price = get_sqrt_price_at_tick(current).unwrap();
            let (lower, upper) = crate::engine::compute_bounds(Some(current), crate::state::RangePreset::Balanced, 28).unwrap();
            let quote = quote_liquidity(sqrt_price, lower, upper, amount0, amount1, bps, 18, 6).unwrap();

            let (need0, need1) = get_amounts_for_liquidity(
                sqrt_price,
                get_sqrt_price_at_tick(lower).unwrap(),
                get_sqrt_price_at_tick(upper).unwrap(),
                quote.liquidity,
                true,
            ).unwrap();
            prop_assert!(need0 <= amount0 && need1 <= amount1);
            prop_assert!(quote.amount0_max >= amount0 && quote.amount1_max >= amount1);
        }
    }
}
