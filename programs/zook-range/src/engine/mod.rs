//! Range engine
//!
//! Translates a preset selection into tick bounds and a desired deposit into
//! a sizing quote. Every operation is a pure function of its inputs; the
//! engine itself only carries the validated pool configuration.

pub mod build_deposit_intent;
pub mod compute_bounds;
pub mod paired_amount;
pub mod quote_liquidity;

pub use build_deposit_intent::*;
pub use compute_bounds::*;
pub use paired_amount::*;
pub use quote_liquidity::*;

use anchor_lang::prelude::*;

use crate::math::big_num::U256;
use crate::math::price_math::{price_from_sqrt_price, Price};
use crate::math::tick_math::get_sqrt_price_at_tick;
use crate::state::{DepositIntent, LiquidityQuote, PoolConfig, PoolSnapshot, RangePreset};
use crate::utils::parse_amount;

/// Bounds of one preset, for the range selector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangePreview {
    pub preset: RangePreset,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub lower_price: Price,
    pub upper_price: Price,
    pub provisional: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeEngine {
    config: PoolConfig,
}

impl RangeEngine {
    pub fn new(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn compute_bounds(&self, current_tick: Option<i32>, preset: RangePreset) -> Result<(i32, i32)> {
        compute_bounds(current_tick, preset, self.config.tick_spacing)
    }

    /// Quote with the pool's decimals; slippage is given per call
    pub fn quote_liquidity(
        &self,
        sqrt_price_current_x96: U256,
        tick_lower: i32,
        tick_upper: i32,
        amount0_desired: u128,
        amount1_desired: u128,
        slippage_bps: i32,
    ) -> Result<LiquidityQuote> {
        quote_liquidity(
            sqrt_price_current_x96,
            tick_lower,
            tick_upper,
            amount0_desired,
            amount1_desired,
            slippage_bps,
            self.config.decimals0,
            self.config.decimals1,
        )
    }

    /// Quote a preset against a live snapshot with the configured slippage
    pub fn quote_preset(
        &self,
        preset: RangePreset,
        amount0_desired: u128,
        amount1_desired: u128,
        snapshot: &PoolSnapshot,
    ) -> Result<LiquidityQuote> {
        let (tick_lower, tick_upper) = self.compute_bounds(Some(snapshot.tick()), preset)?;
        self.quote_liquidity(
            snapshot.sqrt_price_x96(),
            tick_lower,
            tick_upper,
            amount0_desired,
            amount1_desired,
            self.config.slippage_bps,
        )
    }

    pub fn build_deposit_intent(
        &self,
        preset: RangePreset,
        amount0_desired: u128,
        amount1_desired: u128,
        snapshot: Option<PoolSnapshot>,
    ) -> Result<DepositIntent> {
        build_deposit_intent(&self.config, preset, amount0_desired, amount1_desired, snapshot)
    }

    /// Bounds and display prices of every preset, in selector order
    pub fn preview_all(&self, snapshot: Option<PoolSnapshot>) -> Result<Vec<RangePreview>> {
        let current_tick = snapshot.map(|s| s.tick());

        RangePreset::ALL
            .iter()
            .map(|&preset| {
                let (tick_lower, tick_upper) = self.compute_bounds(current_tick, preset)?;
                Ok(RangePreview {
                    preset,
                    tick_lower,
                    tick_upper,
                    lower_price: self.price_at_tick(tick_lower)?,
                    upper_price: self.price_at_tick(tick_upper)?,
                    provisional: current_tick.is_none(),
                })
            })
            .collect()
    }

    pub fn paired_amount1(
        &self,
        amount0: u128,
        tick_lower: i32,
        tick_upper: i32,
        snapshot: &PoolSnapshot,
    ) -> Result<u128> {
        paired_amount1(amount0, tick_lower, tick_upper, snapshot.sqrt_price_x96())
    }

    pub fn paired_amount0(
        &self,
        amount1: u128,
        tick_lower: i32,
        tick_upper: i32,
        snapshot: &PoolSnapshot,
    ) -> Result<u128> {
        paired_amount0(amount1, tick_lower, tick_upper, snapshot.sqrt_price_x96())
    }

    /// Parse a user-entered token0 amount into smallest units
    pub fn parse_amount0(&self, text: &str) -> Result<u128> {
        parse_amount(text, self.config.decimals0)
    }

    /// Parse a user-entered token1 amount into smallest units
    pub fn parse_amount1(&self, text: &str) -> Result<u128> {
        parse_amount(text, self.config.decimals1)
    }

    fn price_at_tick(&self, tick: i32) -> Result<Price> {
        price_from_sqrt_price(
            get_sqrt_price_at_tick(tick)?,
            self.config.decimals0,
            self.config.decimals1,
        )
    }
}
