pub mod pool_config;
pub mod preset;
pub mod quote;
pub mod snapshot;

pub use pool_config::*;
pub use preset::*;
pub use quote::*;
pub use snapshot::*;
