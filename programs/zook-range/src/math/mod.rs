pub mod big_num;
pub mod full_math;
pub mod liquidity_math;
pub mod price_math;
pub mod tick_math;

pub use big_num::*;
pub use full_math::*;
pub use liquidity_math::*;
pub use price_math::*;
pub use tick_math::*;
