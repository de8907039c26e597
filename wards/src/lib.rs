//! Ward bed accounting for the clinic

pub mod config;
pub mod pool;
pub mod unit;

pub use config::{load_from_env, ConfigError, WardsConfig};
pub use pool::{Assignment, WardError, WardPool, WardTotals};
pub use unit::{Ward, WardId};
