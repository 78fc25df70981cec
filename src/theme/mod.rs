//! Theme for SolarOps.

mod styles;

pub use styles::GLOBAL_STYLES;
