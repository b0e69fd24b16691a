use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::RangeError;
use crate::math::big_num::U256;
use crate::math::tick_math::{get_sqrt_price_at_tick, get_tick_at_sqrt_price};
use anchor_lang::prelude::*;

/// A consistent reading of the pool's current price
///
/// The sqrt price and tick must come from the same observation. A pool may
/// report the tick one below the floor tick of its sqrt price when the price
/// sits exactly on a tick boundary after a downward move, so that tick is
/// accepted as well; anything else is a torn read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    sqrt_price_x96: U256,
    tick: i32,
}

impl PoolSnapshot {
    pub fn new(sqrt_price_x96: U256, tick: i32) -> Result<Self> {
        require!(tick >= MIN_TICK && tick <= MAX_TICK, RangeError::OutOfRange);

        let derived_tick = get_tick_at_sqrt_price(sqrt_price_x96)?;
        require!(
            tick == derived_tick || tick == derived_tick - 1,
            RangeError::InconsistentSnapshot
        );

        Ok(Self { sqrt_price_x96, tick })
    }

    /// Snapshot derived from a sqrt price alone
    pub fn from_sqrt_price(sqrt_price_x96: U256) -> Result<Self> {
        let tick = get_tick_at_sqrt_price(sqrt_price_x96)?;
        Ok(Self { sqrt_price_x96, tick })
    }

    /// Snapshot sitting exactly on a tick
    pub fn at_tick(tick: i32) -> Result<Self> {
        let sqrt_price_x96 = get_sqrt_price_at_tick(tick)?;
        Ok(Self { sqrt_price_x96, tick })
    }

    pub fn sqrt_price_x96(&self) -> U256 {
        self.sqrt_price_x96
    }

    pub fn tick(&self) -> i32 {
        self.tick
    }
}
