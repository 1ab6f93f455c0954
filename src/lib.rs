//! adsplit: CPI ad-revenue split calculator
//!
//! Turns impression and CPI figures for five ad placements into a gross/net
//! revenue breakdown and divides net revenue between platform, creator and
//! distributor. The calculation lives in [`modules::calculator`]; the rest of
//! the crate is the HTTP surface around it.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod routes;

// Re-export commonly used types
pub use modules::calculator;
pub use modules::platforms;
