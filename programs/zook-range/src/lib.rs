//! Zook Liquidity - Preset Range Engine for Uniswap V4 Pools
//!
//! Turns a pool price reading and a preset choice (Tight, Balanced, Wide)
//! into the tick bounds, liquidity and slippage caps a mint needs.
//!
//! ## Architecture
//!
//! - **Price/Tick Conversion**: Q64.96 sqrt prices, ticks and display prices
//! - **Range Engine**: preset bounds, liquidity sizing and deposit intents
//! - **Pool Config**: borsh-serializable pool key, decimals and slippage
//!
//! ## Arithmetic
//!
//! - Sqrt prices are U256 with U512 intermediates, never floating point
//! - Floating point only for display prices
//! - Every operation is pure; the caller supplies a consistent pool snapshot

pub mod constants;
pub mod engine;
pub mod errors;
pub mod math;
pub mod state;
pub mod utils;

pub use engine::{RangeEngine, RangePreview};
pub use errors::RangeError;
pub use math::big_num::U256;
pub use math::price_math::Price;
pub use state::{DepositIntent, LiquidityQuote, PoolConfig, PoolSnapshot, RangePreset};
