//! Tick Math
//!
//! Converts between tick indices and Q64.96 sqrt prices.
//! Based on Uniswap V3's TickMath library.
//!
//! tick = log_{1.0001}(price) = log(price) / log(1.0001)
//! sqrt_price = sqrt(1.0001^tick) = 1.0001^(tick/2)

use crate::constants::{
    MAX_SQRT_PRICE_X96, MAX_TICK, MAX_TICK_SPACING, MIN_SQRT_PRICE_X96, MIN_TICK, TICK_BASE,
};
use crate::errors::RangeError;
use crate::math::big_num::U256;
use anchor_lang::prelude::*;

/// sqrt(1.0001^-(2^i)) in Q128.128, for i = 1..=19.
/// The multiplier for bit 0 seeds the ratio directly.
const SQRT_RATIO_MULTIPLIERS: [u128; 19] = [
    0xfff97272373d413259a46990580e213a, // 2
    0xfff2e50f5f656932ef12357cf3c7fdcc, // 4
    0xffe5caca7e10e4e61c3624eaa0941cd0, // 8
    0xffcb9843d60f6159c9db58835c926644, // 16
    0xff973b41fa98c081472e6896dfb254c0, // 32
    0xff2ea16466c96a3843ec78b326b52861, // 64
    0xfe5dee046a99a2a811c461f1969c3053, // 128
    0xfcbe86c7900a88aedcffc83b479aa3a4, // 256
    0xf987a7253ac413176f2b074cf7815e54, // 512
    0xf3392b0822b70005940c7a398e4b70f3, // 1024
    0xe7159475a2c29b7443b29c7fa6e889d9, // 2048
    0xd097f3bdfd2022b8845ad8f792aa5825, // 4096
    0xa9f746462d870fdf8a65dc1f90e061e5, // 8192
    0x70d869a156d2a1b890bb3df62baf32f7, // 16384
    0x31be135f97d08fd981231505542fcfa6, // 32768
    0x9aa508b5b7a84e1c677de54f3e99bc9,  // 65536
    0x5d6af8dedb81196699c329225ee604,   // 131072
    0x2216e584f5fa1ea926041bedfe98,     // 262144
    0x48a170391f7dc42444e8fa2,          // 524288
];

/// Get sqrt price at a given tick
/// sqrt_price_x96 = sqrt(1.0001^tick) * 2^96
///
/// Uses binary representation of tick to compute efficiently:
/// 1.0001^tick = product of 1.0001^(2^i) for each bit i set in tick
pub fn get_sqrt_price_at_tick(tick: i32) -> Result<U256> {
    require!(tick >= MIN_TICK && tick <= MAX_TICK, RangeError::OutOfRange);

    let abs_tick = tick.unsigned_abs();

    // ratio = 1/sqrt(1.0001^|tick|) in Q128.128
    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(0xfffcb933bd6fad37aa2d162d1a594001u128)
    } else {
        U256::one() << 128
    };

    for (i, multiplier) in SQRT_RATIO_MULTIPLIERS.iter().enumerate() {
        if abs_tick & (0x2 << i) != 0 {
            // ratio < 2^129 and multiplier < 2^128, so the product fits in 256 bits
            ratio = (ratio * U256::from(*multiplier)) >> 128;
        }
    }

    // The multipliers compute 1/sqrt(1.0001^|tick|); positive ticks take the reciprocal
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so that get_tick_at_sqrt_price is consistent
    let remainder = ratio & ((U256::one() << 32) - U256::one());
    let sqrt_price = (ratio >> 32) + if remainder.is_zero() { U256::zero() } else { U256::one() };

    Ok(sqrt_price)
}

/// Get tick at a given sqrt price
/// Returns the greatest tick such that get_sqrt_price_at_tick(tick) <= sqrt_price
pub fn get_tick_at_sqrt_price(sqrt_price_x96: U256) -> Result<i32> {
    require!(
        sqrt_price_x96 >= MIN_SQRT_PRICE_X96 && sqrt_price_x96 <= MAX_SQRT_PRICE_X96,
        RangeError::OutOfRange
    );

    // Binary search for the largest tick whose sqrt price does not exceed the target.
    // get_sqrt_price_at_tick(MIN_TICK) == MIN_SQRT_PRICE_X96, so `low` always qualifies.
    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_price_at_tick(mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Validate a tick spacing: non-zero and at most MAX_TICK_SPACING
pub fn validate_tick_spacing(tick_spacing: u16) -> Result<()> {
    require!(
        tick_spacing > 0 && tick_spacing <= MAX_TICK_SPACING,
        RangeError::InvalidTickSpacing
    );
    Ok(())
}

/// Largest multiple of tick_spacing that is <= MAX_TICK
pub fn max_usable_tick(tick_spacing: u16) -> Result<i32> {
    validate_tick_spacing(tick_spacing)?;
    let spacing = tick_spacing as i32;
    Ok((MAX_TICK / spacing) * spacing)
}

/// Smallest multiple of tick_spacing that is >= MIN_TICK
pub fn min_usable_tick(tick_spacing: u16) -> Result<i32> {
    Ok(-max_usable_tick(tick_spacing)?)
}

/// Check if a tick is within the domain and aligned to the tick spacing
pub fn is_usable_tick(tick: i32, tick_spacing: u16) -> bool {
    tick_spacing > 0
        && tick >= MIN_TICK
        && tick <= MAX_TICK
        && tick % (tick_spacing as i32) == 0
}

/// Round a tick to the nearest multiple of tick_spacing.
///
/// Exact ties (tick halfway between two multiples) round toward zero.
/// The rounded tick is then clamped into [min_usable_tick, max_usable_tick],
/// so the result is always usable even for raw ticks outside the domain.
pub fn nearest_usable_tick(tick: i32, tick_spacing: u16) -> Result<i32> {
    let max_usable = max_usable_tick(tick_spacing)?;
    let spacing = tick_spacing as i64;

    // i64 so that rounding an i32 near its limits cannot overflow
    let tick = tick as i64;
    let quotient = tick / spacing;
    let remainder = tick % spacing;

    let rounded = if remainder.abs() * 2 > spacing {
        (quotient + remainder.signum()) * spacing
    } else {
        quotient * spacing
    };

    let clamped = rounded.clamp(-(max_usable as i64), max_usable as i64);
    Ok(clamped as i32)
}

/// Number of ticks spanned by a multiplicative price factor:
/// floor(ln(factor) / ln(1.0001))
pub fn log_tick_delta(factor: f64) -> Result<i32> {
    require!(factor.is_finite() && factor > 0.0, RangeError::InvalidFactor);

    let delta = (factor.ln() / TICK_BASE.ln()).floor();

    // Any finite positive f64 maps to at most ~7.1 million ticks, well inside i32
    require!(
        delta >= i32::MIN as f64 && delta <= i32::MAX as f64,
        RangeError::InvalidFactor
    );

    Ok(delta as i32)
}
