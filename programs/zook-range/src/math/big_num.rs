//! Big Num
//!
//! Wide unsigned integers for Q64.96 math.
//! Sqrt prices reach 160 bits, so products of two of them need 320 bits.

use crate::errors::RangeError;
use anchor_lang::prelude::Result;

pub use wide::{U256, U512};

#[allow(clippy::assign_op_pattern, clippy::ptr_offset_with_cast, clippy::manual_range_contains)]
mod wide {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer.
        pub struct U256(4);
    }

    construct_uint! {
        /// 512-bit unsigned integer, used for full-precision products.
        pub struct U512(8);
    }
}

impl U256 {
    /// Zero-extend into a U512
    pub fn widen(self) -> U512 {
        let U256(ref words) = self;
        let mut out = [0u64; 8];
        out[..4].copy_from_slice(words);
        U512(out)
    }

    /// Returns the value as u128, or None if it has more than 128 significant bits
    pub fn checked_as_u128(self) -> Option<u128> {
        if self.bits() > 128 {
            return None;
        }
        Some(self.low_u128())
    }

    /// Lossy conversion to f64, for display math only
    pub fn to_f64_lossy(self) -> f64 {
        let U256(ref words) = self;
        words
            .iter()
            .rev()
            .fold(0f64, |acc, &word| acc * 18_446_744_073_709_551_616f64 + word as f64)
    }
}

impl U512 {
    /// Truncate into a U256, failing if any of the high 256 bits are set
    pub fn narrow(self) -> Result<U256> {
        let U512(ref words) = self;
        if words[4..].iter().any(|&w| w != 0) {
            return Err(RangeError::MathOverflow.into());
        }
        let mut out = [0u64; 4];
        out.copy_from_slice(&words[..4]);
        Ok(U256(out))
    }
}
