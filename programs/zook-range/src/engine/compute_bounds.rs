use anchor_lang::prelude::*;

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::RangeError;
use crate::math::tick_math::{log_tick_delta, max_usable_tick, nearest_usable_tick, validate_tick_spacing};
use crate::state::RangePreset;

/// Compute the usable tick bounds of a preset around the current tick
///
/// 1. look up the preset's (lower, upper) price factors
/// 2. convert each factor into a tick delta
/// 3. offset the current tick by each delta and snap to the tick spacing
/// 4. if snapping collapsed the range, widen the upper bound by one spacing
///
/// With no current tick (no live reading yet) the range is one spacing on
/// each side of tick 0. Callers must treat that range as provisional.
pub fn compute_bounds(
    current_tick: Option<i32>,
    preset: RangePreset,
    tick_spacing: u16,
) -> Result<(i32, i32)> {
    validate_tick_spacing(tick_spacing)?;

    let current_tick = match current_tick {
        Some(tick) => tick,
        None => return fallback_bounds(tick_spacing),
    };
    require!(
        current_tick >= MIN_TICK && current_tick <= MAX_TICK,
        RangeError::OutOfRange
    );

    let (lower_factor, upper_factor) = preset.factors();
    let lower_delta = log_tick_delta(lower_factor)?;
    let upper_delta = log_tick_delta(upper_factor)?;

    let mut tick_lower = nearest_usable_tick(current_tick + lower_delta, tick_spacing)?;
    let mut tick_upper = nearest_usable_tick(current_tick + upper_delta, tick_spacing)?;

    if tick_lower >= tick_upper {
        let spacing = tick_spacing as i32;
        let max_usable = max_usable_tick(tick_spacing)?;
        if tick_lower + spacing <= max_usable {
            tick_upper = tick_lower + spacing;
        } else {
            // Both bounds clamped to the top of the domain
            tick_upper = max_usable;
            tick_lower = max_usable - spacing;
        }
    }

    Ok((tick_lower, tick_upper))
}

/// Neutral range used before any price has been observed: tick 0 snapped
/// to the spacing, widened by exactly one spacing on each side
pub fn fallback_bounds(tick_spacing: u16) -> Result<(i32, i32)> {
    let base = nearest_usable_tick(0, tick_spacing)?;
    let spacing = tick_spacing as i32;
    Ok((base - spacing, base + spacing))
}
