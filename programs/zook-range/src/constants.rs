// Zook Range Engine Constants
// Tick domain and sqrt price bounds follow the Uniswap V3/V4 Q64.96 conventions

use crate::math::big_num::U256;

/// Minimum tick index (p(i) = 1.0001^i, this gives price ~= 0)
pub const MIN_TICK: i32 = -887272;

/// Maximum tick index
pub const MAX_TICK: i32 = 887272;

/// Minimum sqrt price (Q64.96 format), equal to get_sqrt_price_at_tick(MIN_TICK)
pub const MIN_SQRT_PRICE_X96: U256 = U256([4295128739, 0, 0, 0]);

/// Maximum sqrt price (Q64.96 format), equal to get_sqrt_price_at_tick(MAX_TICK)
/// = 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_PRICE_X96: U256 = U256([0x5d951d5263988d26, 0xefd1fc6a50648849, 0xfffd8963, 0]);

/// Number of fractional bits in a sqrt price
pub const RESOLUTION: u32 = 96;

/// Q96 multiplier (2^96)
pub const Q96: U256 = U256([0, 1 << 32, 0, 0]);

/// Price ratio between two adjacent ticks
pub const TICK_BASE: f64 = 1.0001;

/// Maximum tick spacing
pub const MAX_TICK_SPACING: u16 = 16384;

/// Basis point denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Default slippage tolerance applied to deposit caps (0.50%)
pub const DEFAULT_SLIPPAGE_BPS: i32 = 50;

/// Largest token precision whose unit (10^decimals) still fits in a u128
pub const MAX_TOKEN_DECIMALS: u8 = 38;

/// Range preset factors, applied multiplicatively to the current price
pub mod presets {
    /// Range A - tighter range (-2% / +2%)
    pub const TIGHT_LOWER_FACTOR: f64 = 0.98;
    pub const TIGHT_UPPER_FACTOR: f64 = 1.02;

    /// Range B - balanced (-10% / +10%)
    pub const BALANCED_LOWER_FACTOR: f64 = 0.90;
    pub const BALANCED_UPPER_FACTOR: f64 = 1.10;

    /// Range C - wider range (-30% / +30%)
    pub const WIDE_LOWER_FACTOR: f64 = 0.70;
    pub const WIDE_UPPER_FACTOR: f64 = 1.30;
}

/// WLD/USDC deployment on Worldchain (chain id 480)
pub mod worldchain {
    /// Tick spacing of the WLD/USDC pool
    pub const TICK_SPACING: u16 = 28;

    /// WLD (currency0) decimals
    pub const WLD_DECIMALS: u8 = 18;

    /// USDC (currency1) decimals
    pub const USDC_DECIMALS: u8 = 6;
}
