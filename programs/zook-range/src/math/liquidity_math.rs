//! Liquidity Math
//!
//! Functions for converting between token amounts and liquidity
//! over a sqrt price range. Based on Uniswap V3's LiquidityAmounts library.

use crate::constants::{Q96, RESOLUTION};
use crate::errors::RangeError;
use crate::math::big_num::U256;
use crate::math::full_math::{div_round_up, mul_div, mul_div_round_up};
use anchor_lang::prelude::*;

/// Order two sqrt prices so that the first is the lower one
fn sorted(sqrt_price_a_x96: U256, sqrt_price_b_x96: U256) -> (U256, U256) {
    if sqrt_price_a_x96 > sqrt_price_b_x96 {
        (sqrt_price_b_x96, sqrt_price_a_x96)
    } else {
        (sqrt_price_a_x96, sqrt_price_b_x96)
    }
}

fn to_u128(value: U256) -> Result<u128> {
    value
        .checked_as_u128()
        .ok_or(RangeError::MathOverflow.into())
}

/// Calculate the liquidity amount for a given amount of token0
/// L = amount0 * sp_lower * sp_upper / (Q96 * (sp_upper - sp_lower))
///
/// Evaluated as one 512-bit quotient with no intermediate rounding
pub fn get_liquidity_for_amount0(
    sqrt_price_a_x96: U256,
    sqrt_price_b_x96: U256,
    amount0: u128,
) -> Result<u128> {
    let (sqrt_price_lower, sqrt_price_upper) = sorted(sqrt_price_a_x96, sqrt_price_b_x96);
    let width = sqrt_price_upper - sqrt_price_lower;
    require!(!width.is_zero(), RangeError::DivisionByZero);

    // 128 + 160 + 160 bits over 96 + 160 bits, both inside 512
    let numerator =
        U256::from(amount0).widen() * sqrt_price_lower.widen() * sqrt_price_upper.widen();
    let denominator = Q96.widen() * width.widen();

    to_u128((numerator / denominator).narrow()?)
}

/// Calculate the liquidity amount for a given amount of token1
/// L = amount1 * Q96 / (sp_upper - sp_lower)
pub fn get_liquidity_for_amount1(
    sqrt_price_a_x96: U256,
    sqrt_price_b_x96: U256,
    amount1: u128,
) -> Result<u128> {
    let (sqrt_price_lower, sqrt_price_upper) = sorted(sqrt_price_a_x96, sqrt_price_b_x96);

    to_u128(mul_div(
        U256::from(amount1),
        Q96,
        sqrt_price_upper - sqrt_price_lower,
    )?)
}

/// Calculate the maximum liquidity that can be added with the given amounts
/// for a position in the range [sqrt_price_lower, sqrt_price_upper]
/// at the current sqrt_price
pub fn get_liquidity_for_amounts(
    sqrt_price_current_x96: U256,
    sqrt_price_a_x96: U256,
    sqrt_price_b_x96: U256,
    amount0: u128,
    amount1: u128,
) -> Result<u128> {
    let (sqrt_price_lower, sqrt_price_upper) = sorted(sqrt_price_a_x96, sqrt_price_b_x96);

    if sqrt_price_current_x96 <= sqrt_price_lower {
        // Current price is below range, only token0 is needed
        get_liquidity_for_amount0(sqrt_price_lower, sqrt_price_upper, amount0)
    } else if sqrt_price_current_x96 < sqrt_price_upper {
        // Current price is in range, need both tokens
        let liquidity0 =
            get_liquidity_for_amount0(sqrt_price_current_x96, sqrt_price_upper, amount0)?;
        let liquidity1 =
            get_liquidity_for_amount1(sqrt_price_lower, sqrt_price_current_x96, amount1)?;
        // The scarcer leg determines how much can actually be deposited
        Ok(liquidity0.min(liquidity1))
    } else {
        // Current price is above range, only token1 is needed
        get_liquidity_for_amount1(sqrt_price_lower, sqrt_price_upper, amount1)
    }
}

/// Calculate the amount of token0 for a given liquidity between two sqrt prices
/// amount0 = L * Q96 * (sp_upper - sp_lower) / sp_upper / sp_lower
pub fn get_amount0_for_liquidity(
    sqrt_price_a_x96: U256,
    sqrt_price_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<u128> {
    let (sqrt_price_lower, sqrt_price_upper) = sorted(sqrt_price_a_x96, sqrt_price_b_x96);
    require!(!sqrt_price_lower.is_zero(), RangeError::DivisionByZero);

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_price_upper - sqrt_price_lower;

    let amount = if round_up {
        div_round_up(
            mul_div_round_up(numerator1, numerator2, sqrt_price_upper)?,
            sqrt_price_lower,
        )?
    } else {
        mul_div(numerator1, numerator2, sqrt_price_upper)? / sqrt_price_lower
    };

    to_u128(amount)
}

/// Calculate the amount of token1 for a given liquidity between two sqrt prices
/// amount1 = L * (sp_upper - sp_lower) / Q96
pub fn get_amount1_for_liquidity(
    sqrt_price_a_x96: U256,
    sqrt_price_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<u128> {
    let (sqrt_price_lower, sqrt_price_upper) = sorted(sqrt_price_a_x96, sqrt_price_b_x96);
    let diff = sqrt_price_upper - sqrt_price_lower;

    let amount = if round_up {
        mul_div_round_up(U256::from(liquidity), diff, Q96)?
    } else {
        mul_div(U256::from(liquidity), diff, Q96)?
    };

    to_u128(amount)
}

/// Calculate the token amounts for a given liquidity
/// at the current sqrt_price for a position in range [lower, upper]
pub fn get_amounts_for_liquidity(
    sqrt_price_current_x96: U256,
    sqrt_price_a_x96: U256,
    sqrt_price_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<(u128, u128)> {
    let (sqrt_price_lower, sqrt_price_upper) = sorted(sqrt_price_a_x96, sqrt_price_b_x96);

    if sqrt_price_current_x96 <= sqrt_price_lower {
        // Below range: only token0
        let amount0 =
            get_amount0_for_liquidity(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?;
        Ok((amount0, 0))
    } else if sqrt_price_current_x96 < sqrt_price_upper {
        let amount0 = get_amount0_for_liquidity(
            sqrt_price_current_x96,
            sqrt_price_upper,
            liquidity,
            round_up,
        )?;
        let amount1 = get_amount1_for_liquidity(
            sqrt_price_lower,
            sqrt_price_current_x96,
            liquidity,
            round_up,
        )?;
        Ok((amount0, amount1))
    } else {
        // Above range: only token1
        let amount1 =
            get_amount1_for_liquidity(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?;
        Ok((0, amount1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_TICK, MIN_TICK};
    use crate::math::tick_math::get_sqrt_price_at_tick;
    use proptest::prelude::*;

    fn sp(tick: i32) -> U256 {
        get_sqrt_price_at_tick(tick).unwrap()
    }

    #[test]
    fn test_zero_amounts_give_zero_liquidity() {
        let l = get_liquidity_for_amounts(sp(0), sp(-1064), sp(952), 0, 0).unwrap();
        assert_eq!(l, 0);
    }

    #[test]
    fn test_below_range_uses_only_amount0() {
        let l = get_liquidity_for_amounts(sp(-2000), sp(-1064), sp(952), 1_000_000, 0).unwrap();
        assert!(l > 0);
        let l_with_1 =
            get_liquidity_for_amounts(sp(-2000), sp(-1064), sp(952), 1_000_000, 5_000_000).unwrap();
        assert_eq!(l, l_with_1);
    }

    #[test]
    fn test_above_range_uses_only_amount1() {
        let l = get_liquidity_for_amounts(sp(2000), sp(-1064), sp(952), 0, 1_000_000).unwrap();
        assert!(l > 0);
        let l_with_0 =
            get_liquidity_for_amounts(sp(2000), sp(-1064), sp(952), 9_000_000, 1_000_000).unwrap();
        assert_eq!(l, l_with_0);
    }

    #[test]
    fn test_in_range_takes_min_leg() {
        let l_both = get_liquidity_for_amounts(sp(0), sp(-1064), sp(952), 1_000_000, 1_000_000).unwrap();
        let l_0 = get_liquidity_for_amount0(sp(0), sp(952), 1_000_000).unwrap();
        let l_1 = get_liquidity_for_amount1(sp(-1064), sp(0), 1_000_000).unwrap();
        assert_eq!(l_both, l_0.min(l_1));
    }

    #[test]
    fn test_sorted_arguments() {
        let a = get_liquidity_for_amount0(sp(100), sp(200), 1_000).unwrap();
        let b = get_liquidity_for_amount0(sp(200), sp(100), 1_000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_amounts_for_liquidity_regions() {
        let (a0, a1) = get_amounts_for_liquidity(sp(-2000), sp(-1064), sp(952), 1_000_000, true).unwrap();
        assert!(a0 > 0);
        assert_eq!(a1, 0);

        let (a0, a1) = get_amounts_for_liquidity(sp(2000), sp(-1064), sp(952), 1_000_000, true).unwrap();
        assert_eq!(a0, 0);
        assert!(a1 > 0);
    }

    #[test]
    fn test_round_up_not_below_round_down() {
        let up = get_amounts_for_liquidity(sp(7), sp(-1064), sp(952), 123_456_789, true).unwrap();
        let down = get_amounts_for_liquidity(sp(7), sp(-1064), sp(952), 123_456_789, false).unwrap();
        assert!(up.0 >= down.0 && up.1 >= down.1);
        assert!(up.0 - down.0 <= 1 && up.1 - down.1 <= 1);
    }

    #[test]
    fn test_liquidity_overflow_is_error() {
        // A one-tick range at the top of the domain with a huge amount1
        let l = get_liquidity_for_amount1(sp(MAX_TICK - 1), sp(MAX_TICK), u128::MAX);
        assert!(l.is_ok());
        let l = get_liquidity_for_amount0(sp(MIN_TICK), sp(MIN_TICK + 1), u128::MAX);
        assert!(l.is_ok());
        let l = get_liquidity_for_amount1(sp(0), sp(1), u128::MAX);
        assert!(l.is_err());
    }

    #[test]
    fn test_liquidity_for_amount0_exact_at_bottom_of_domain() {
        let (sa, sb) = (sp(MIN_TICK), sp(MIN_TICK + 28));
        let liquidity = get_liquidity_for_amount0(sa, sb, u128::MAX).unwrap();
        assert_eq!(liquidity, 13_186_626_544_246_081_687_727);

        // The quoted liquidity is affordable and one more unit is not
        assert!(get_amount0_for_liquidity(sa, sb, liquidity, true).unwrap() <= u128::MAX);
        assert!(get_amount0_for_liquidity(sa, sb, liquidity + 1, true).is_err());
    }

    #[test]
    fn test_quote_near_bottom_of_domain_deploys_liquidity() {
        let (sa, sb) = (sp(MIN_TICK + 28), sp(MIN_TICK + 56));
        let liquidity = get_liquidity_for_amounts(sp(MIN_TICK), sa, sb, 1_000_000_000_000_000_000, 0).unwrap();
        assert!(liquidity > 0);
    }

    #[test]
    fn test_liquidity_for_amount0_equal_prices() {
        assert_eq!(
            get_liquidity_for_amount0(sp(10), sp(10), 1_000).unwrap_err(),
            anchor_lang::error::Error::from(RangeError::DivisionByZero)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_liquidity_never_exceeds_desired_amounts(
            lower in MIN_TICK..MAX_TICK,
            width in 1i32..20_000,
            offset in 0i32..1_000_000,
            amount0 in 0u128..=u64::MAX as u128 * 1_000_000,
            amount1 in 0u128..=u64::MAX as u128 * 1_000_000,
        ) {
            let upper = (lower + width).min(MAX_TICK);
            let current = lower + offset % (upper - lower);
            let (sa, sb, sc) = (sp(lower), sp(upper), sp(current));

            let liquidity = match get_liquidity_for_amounts(sc, sa, sb, amount0, amount1) {
                Ok(liquidity) => liquidity,
                Err(e) => {
                    // Only a liquidity wider than u128 may be refused
                    prop_assert_eq!(e, anchor_lang::error::Error::from(RangeError::MathOverflow));
                    return Ok(());
                }
            };
            let (need0, need1) = get_amounts_for_liquidity(sc, sa, sb, liquidity, true).unwrap();

            prop_assert!(need0 <= amount0);
            prop_assert!(need1 <= amount1);
        }

        #[test]
        fn prop_liquidity_for_amount0_is_maximal(
            lower in MIN_TICK..(MAX_TICK - 20_000),
            width in 1i32..20_000,
            amount0 in 1u128..=u64::MAX as u128 * 1_000_000,
        ) {
            let (sa, sb) = (sp(lower), sp(lower + width));
            if let Ok(liquidity) = get_liquidity_for_amount0(sa, sb, amount0) {
                prop_assert!(get_amount0_for_liquidity(sa, sb, liquidity, true).unwrap() <= amount0);
                if let Some(next_liquidity) = liquidity.checked_add(1) {
                    if let Ok(next) = get_amount0_for_liquidity(sa, sb, next_liquidity, false) {
                        prop_assert!(next >= amount0);
                    }
                }
            }
        }
    }
}
