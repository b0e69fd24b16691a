//! Price Math
//!
//! Display prices derived from Q64.96 sqrt prices.
//! These are lossy f64 values: nothing that feeds liquidity or amount
//! math may be computed from a `Price`.

use std::fmt;

use crate::constants::{MAX_SQRT_PRICE_X96, MAX_TOKEN_DECIMALS, MIN_SQRT_PRICE_X96, RESOLUTION};
use crate::errors::RangeError;
use crate::math::big_num::U256;
use anchor_lang::prelude::*;

/// Human price: units of token1 per unit of token0, decimal adjusted
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    /// Returns the underlying f64
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Price of token0 in token1 inverted (token0 per token1)
    pub fn invert(&self) -> Option<Price> {
        if self.0 > 0.0 {
            Some(Price(1.0 / self.0))
        } else {
            None
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Calculate the price from sqrt price
/// price = (sqrt_price / 2^96)^2 * 10^(decimals0 - decimals1)
///
/// The 160-bit sqrt price is converted to f64 before squaring, so the
/// square never has to be held as an integer.
pub fn price_from_sqrt_price(sqrt_price_x96: U256, decimals0: u8, decimals1: u8) -> Result<Price> {
    require!(
        sqrt_price_x96 >= MIN_SQRT_PRICE_X96 && sqrt_price_x96 <= MAX_SQRT_PRICE_X96,
        RangeError::OutOfRange
    );
    require!(
        decimals0 <= MAX_TOKEN_DECIMALS && decimals1 <= MAX_TOKEN_DECIMALS,
        RangeError::InvalidDecimals
    );

    let sqrt_price = sqrt_price_x96.to_f64_lossy() / 2f64.powi(RESOLUTION as i32);
    let scale = 10f64.powi(decimals0 as i32 - decimals1 as i32);

    Ok(Price(sqrt_price * sqrt_price * scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Q96;
    use crate::math::tick_math::get_sqrt_price_at_tick;

    #[test]
    fn test_price_at_q96_is_one() {
        let price = price_from_sqrt_price(Q96, 18, 18).unwrap();
        assert_eq!(price.get(), 1.0);
    }

    #[test]
    fn test_price_decimal_adjustment() {
        // WLD (18) / USDC (6): raw ratio 1e-12 is 1.0 USDC per WLD
        let raw = 1e-12f64;
        let sqrt_price = U256::from((raw.sqrt() * 2f64.powi(96)) as u128);
        let price = price_from_sqrt_price(sqrt_price, 18, 6).unwrap();
        assert!((price.get() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_price_at_tick() {
        let sqrt_price = get_sqrt_price_at_tick(952).unwrap();
        let price = price_from_sqrt_price(sqrt_price, 6, 6).unwrap();
        assert!((price.get() - 1.0001f64.powi(952)).abs() < 1e-9);
    }

    #[test]
    fn test_price_extremes_are_finite() {
        let low = price_from_sqrt_price(MIN_SQRT_PRICE_X96, 0, 38).unwrap();
        let high = price_from_sqrt_price(MAX_SQRT_PRICE_X96, 38, 0).unwrap();
        assert!(low.get() >= 0.0 && low.get().is_finite());
        assert!(high.get().is_finite());
    }

    #[test]
    fn test_price_out_of_range() {
        assert!(price_from_sqrt_price(U256::zero(), 18, 6).is_err());
        assert!(price_from_sqrt_price(MAX_SQRT_PRICE_X96 + U256::one(), 18, 6).is_err());
    }

    #[test]
    fn test_price_invalid_decimals() {
        assert!(price_from_sqrt_price(Q96, 39, 6).is_err());
    }

    #[test]
    fn test_price_display_and_invert() {
        let price = price_from_sqrt_price(Q96, 18, 18).unwrap();
        assert_eq!(format!("{:.2}", price), "1.00");
        assert_eq!(price.invert().unwrap().get(), 1.0);
        assert!(Price::default().invert().is_none());
    }
}
