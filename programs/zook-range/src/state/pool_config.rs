use anchor_lang::prelude::*;

use crate::constants::{worldchain, DEFAULT_SLIPPAGE_BPS, MAX_TOKEN_DECIMALS};
use crate::errors::RangeError;
use crate::math::tick_math::validate_tick_spacing;

/// Configuration of the target pool, supplied by the host application
/// Mirrors the pool key the mint call data is built against
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Pool identifier (keccak of the pool key)
    pub pool_id: [u8; 32],

    /// currency0 address (must be < currency1)
    pub currency0: [u8; 20],

    /// currency1 address
    pub currency1: [u8; 20],

    /// Hooks contract attached to the pool
    pub hooks: [u8; 20],

    /// Fee rate in hundredths of a bip (3000 = 0.3%)
    pub fee: u32,

    /// Tick spacing of the pool
    pub tick_spacing: u16,

    /// currency0 decimals
    pub decimals0: u8,

    /// currency1 decimals
    pub decimals1: u8,

    /// Slippage tolerance applied to deposit caps, in basis points
    pub slippage_bps: i32,
}

impl PoolConfig {
    /// WLD/USDC pool on Worldchain, WLD being currency0
    pub fn wld_usdc(pool_id: [u8; 32], wld: [u8; 20], usdc: [u8; 20], hooks: [u8; 20], fee: u32) -> Self {
        Self {
            pool_id,
            currency0: wld,
            currency1: usdc,
            hooks,
            fee,
            tick_spacing: worldchain::TICK_SPACING,
            decimals0: worldchain::WLD_DECIMALS,
            decimals1: worldchain::USDC_DECIMALS,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
        }
    }

    /// Same pool with a different slippage tolerance
    pub fn with_slippage_bps(self, slippage_bps: i32) -> Self {
        Self { slippage_bps, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        validate_tick_spacing(self.tick_spacing)?;
        require!(
            self.decimals0 <= MAX_TOKEN_DECIMALS && self.decimals1 <= MAX_TOKEN_DECIMALS,
            RangeError::InvalidDecimals
        );
        require!(self.currency0 < self.currency1, RangeError::InvalidCurrencyOrder);
        require!(self.slippage_bps >= 0, RangeError::InvalidSlippage);
        Ok(())
    }
}
