pub mod revenue_tracker;

pub use revenue_tracker::{PlatformListener, PlatformRevenueTracker};
