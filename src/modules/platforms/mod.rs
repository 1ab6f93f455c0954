pub mod controllers;
pub mod models;
pub mod services;

pub use models::{PlatformRevenue, PlatformSummary};
pub use services::{PlatformListener, PlatformRevenueTracker};
