use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AdType;

/// Revenue earned by one ad type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdTypeRevenue {
    pub ad_type: AdType,
    pub revenue: Decimal,
}

/// How net revenue is divided between the parties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueShares {
    /// 50% of net revenue
    pub platform_share: Decimal,
    /// 40% of net revenue, before withholding
    pub creator_gross: Decimal,
    /// 5% of the creator's gross share, withheld at source (TDS)
    pub withholding_tax: Decimal,
    /// Creator payout after withholding
    pub creator_share: Decimal,
    /// 10% of net revenue, tax inclusive
    pub distributor_share: Decimal,
}

impl RevenueShares {
    /// Sum of all amounts paid out plus the withheld tax
    pub fn total_distributed(&self) -> Decimal {
        self.platform_share + self.creator_share + self.withholding_tax + self.distributor_share
    }
}

/// Immutable result of one calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Revenue per ad type, in fixed ad-type order
    pub per_type_revenue: Vec<AdTypeRevenue>,
    pub gross_revenue: Decimal,
    pub total_impressions: Decimal,
    /// Flat 5% platform operating cost
    pub upkeep: Decimal,
    /// SSAI delivery cost for all impressions
    pub delivery_cost: Decimal,
    /// upkeep + delivery cost
    pub deductions: Decimal,
    pub net_revenue: Decimal,
    pub shares: RevenueShares,
}

impl RevenueBreakdown {
    /// Revenue computed for a single ad type
    pub fn revenue_for(&self, ad_type: AdType) -> Decimal {
        self.per_type_revenue
            .iter()
            .find(|entry| entry.ad_type == ad_type)
            .map(|entry| entry.revenue)
            .unwrap_or(Decimal::ZERO)
    }
}
