use anchor_lang::prelude::*;

use crate::engine::{compute_bounds, quote_liquidity};
use crate::math::price_math::price_from_sqrt_price;
use crate::state::{DepositIntent, PoolConfig, PoolSnapshot, RangePreset};

/// Assemble the deposit intent for one mint attempt
///
/// Without a snapshot the intent is built on the neutral fallback range at
/// tick 0 and flagged provisional; it must be rebuilt once a live price is
/// observed.
pub fn build_deposit_intent(
    config: &PoolConfig,
    preset: RangePreset,
    amount0_desired: u128,
    amount1_desired: u128,
    snapshot: Option<PoolSnapshot>,
) -> Result<DepositIntent> {
    config.validate()?;

    let provisional = snapshot.is_none();
    let snapshot = match snapshot {
        Some(snapshot) => snapshot,
        None => PoolSnapshot::at_tick(0)?,
    };
    let current_tick = if provisional { None } else { Some(snapshot.tick()) };

    let (tick_lower, tick_upper) = compute_bounds(current_tick, preset, config.tick_spacing)?;

    let quote = quote_liquidity(
        snapshot.sqrt_price_x96(),
        tick_lower,
        tick_upper,
        amount0_desired,
        amount1_desired,
        config.slippage_bps,
        config.decimals0,
        config.decimals1,
    )?;

    let current_price =
        price_from_sqrt_price(snapshot.sqrt_price_x96(), config.decimals0, config.decimals1)?;

    msg!(
        "Deposit intent: {} ticks [{}, {}), liquidity {}, max amounts ({}, {}){}",
        preset,
        tick_lower,
        tick_upper,
        quote.liquidity,
        quote.amount0_max,
        quote.amount1_max,
        if provisional { ", provisional" } else { "" }
    );

    Ok(DepositIntent::new(
        config,
        preset,
        amount0_desired,
        amount1_desired,
        snapshot.sqrt_price_x96(),
        current_price,
        quote,
        provisional,
    ))
}
