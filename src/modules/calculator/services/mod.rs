pub mod breakdown_renderer;
pub mod normalizer;
pub mod revenue_calculator;

pub use breakdown_renderer::{RenderedBreakdown, RenderedLine};
pub use normalizer::parse_number_or_zero;
pub use revenue_calculator::{compute, RevenueCalculator};
