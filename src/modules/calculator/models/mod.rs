pub mod ad_type;
pub mod calculation_input;
pub mod revenue_breakdown;

pub use ad_type::AdType;
pub use calculation_input::{
    AdLineItem, CalculationInput, RawCalculationInput, RawField, RawLineItem,
};
pub use revenue_breakdown::{AdTypeRevenue, RevenueBreakdown, RevenueShares};
