use crate::math::big_num::U256;
use crate::math::price_math::Price;
use crate::state::{PoolConfig, RangePreset};

/// Sizing quote for a deposit into [tick_lower, tick_upper)
/// Recomputed on every input change, never mutated
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiquidityQuote {
    pub tick_lower: i32,
    pub tick_upper: i32,

    /// Display price at tick_lower (token1 per token0)
    pub lower_price: Price,

    /// Display price at tick_upper (token1 per token0)
    pub upper_price: Price,

    /// Maximum liquidity deployable without exceeding either desired amount
    pub liquidity: u128,

    /// Amounts the quoted liquidity pulls at the quoted price, rounded up
    pub amount0_expected: u128,
    pub amount1_expected: u128,

    /// Slippage-inflated caps the depositor authorizes
    pub amount0_max: u128,
    pub amount1_max: u128,
}

impl LiquidityQuote {
    /// True when the quote deploys no liquidity
    pub fn is_empty(&self) -> bool {
        self.liquidity == 0
    }
}

/// Everything the transaction builder needs for one mint
/// Built transiently per deposit attempt and never persisted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepositIntent {
    pub preset: RangePreset,

    /// Target pool
    pub pool_id: [u8; 32],
    pub currency0: [u8; 20],
    pub currency1: [u8; 20],
    pub hooks: [u8; 20],
    pub fee: u32,
    pub tick_spacing: u16,

    /// Requested amounts, in smallest units
    pub amount0_desired: u128,
    pub amount1_desired: u128,

    /// Price the intent was quoted at
    pub sqrt_price_x96: U256,
    pub current_price: Price,

    pub quote: LiquidityQuote,

    /// Built from the neutral fallback because no live snapshot was available;
    /// must be re-derived before it is submitted
    pub provisional: bool,
}

impl DepositIntent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: &PoolConfig,
        preset: RangePreset,
        amount0_desired: u128,
        amount1_desired: u128,
        sqrt_price_x96: U256,
        current_price: Price,
        quote: LiquidityQuote,
        provisional: bool,
    ) -> Self {
        Self {
            preset,
            pool_id: config.pool_id,
            currency0: config.currency0,
            currency1: config.currency1,
            hooks: config.hooks,
            fee: config.fee,
            tick_spacing: config.tick_spacing,
            amount0_desired,
            amount1_desired,
            sqrt_price_x96,
            current_price,
            quote,
            provisional,
        }
    }

    pub fn tick_lower(&self) -> i32 {
        self.quote.tick_lower
    }

    pub fn tick_upper(&self) -> i32 {
        self.quote.tick_upper
    }

    pub fn liquidity(&self) -> u128 {
        self.quote.liquidity
    }

    /// Ready to hand to the transaction builder: live price and non-zero liquidity
    pub fn is_submittable(&self) -> bool {
        !self.provisional && !self.quote.is_empty()
    }
}
