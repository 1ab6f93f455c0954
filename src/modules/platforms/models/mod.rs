pub mod platform_summary;

pub use platform_summary::{PlatformRevenue, PlatformSummary};
