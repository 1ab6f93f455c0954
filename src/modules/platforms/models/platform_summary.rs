use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest net revenue reported by one platform's calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRevenue {
    pub platform: String,
    pub net_revenue: Decimal,
}

/// Comparison across all platforms that have reported a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    /// One entry per platform, sorted by platform name
    pub platforms: Vec<PlatformRevenue>,
    /// Sum of every platform's latest net revenue
    pub combined_net_revenue: Decimal,
    /// Platform with the highest net revenue, if any have reported
    pub top_platform: Option<String>,
}

impl PlatformSummary {
    pub fn new(platforms: Vec<PlatformRevenue>) -> Self {
        let combined_net_revenue = platforms
            .iter()
            .fold(Decimal::ZERO, |total, entry| total.saturating_add(entry.net_revenue));

        // Ties go to the first platform by name
        let top_platform = platforms
            .iter()
            .fold(None::<&PlatformRevenue>, |best, entry| match best {
                Some(current) if current.net_revenue >= entry.net_revenue => Some(current),
                _ => Some(entry),
            })
            .map(|entry| entry.platform.clone());

        Self {
            platforms,
            combined_net_revenue,
            top_platform,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
