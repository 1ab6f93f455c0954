use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use crate::core::RevenueListener;
use crate::modules::calculator::models::{
    AdType, AdTypeRevenue, CalculationInput, RevenueBreakdown, RevenueShares,
};

/// Platform operating cost, taken from gross revenue
pub const UPKEEP_RATE: Decimal = dec!(0.05);
/// Platform share of net revenue
pub const PLATFORM_SHARE_RATE: Decimal = dec!(0.50);
/// Creator share of net revenue, before withholding
pub const CREATOR_SHARE_RATE: Decimal = dec!(0.40);
/// Tax withheld from the creator's gross share
pub const WITHHOLDING_TAX_RATE: Decimal = dec!(0.05);
/// Distributor share of net revenue, tax inclusive
pub const DISTRIBUTOR_SHARE_RATE: Decimal = dec!(0.10);
/// Delivery cost is quoted per this many impressions
pub const DELIVERY_COST_UNIT: Decimal = dec!(1000);

/// Computes the revenue breakdown for one form snapshot
///
/// Pure and total: no rounding happens here, and sums or products that would
/// leave the decimal range saturate at its bounds instead of failing.
pub fn compute(input: &CalculationInput) -> RevenueBreakdown {
    let mut per_type_revenue = Vec::with_capacity(AdType::COUNT);
    let mut gross_revenue = Decimal::ZERO;
    let mut total_impressions = Decimal::ZERO;

    for (ad_type, item) in input.line_items() {
        let revenue = item.impressions.saturating_mul(item.cpi);
        per_type_revenue.push(AdTypeRevenue { ad_type, revenue });
        gross_revenue = gross_revenue.saturating_add(revenue);
        total_impressions = total_impressions.saturating_add(item.impressions);
    }

    let upkeep = UPKEEP_RATE * gross_revenue;
    let delivery_cost =
        (total_impressions / DELIVERY_COST_UNIT).saturating_mul(input.delivery_cost_per_1000);
    let deductions = upkeep.saturating_add(delivery_cost);
    let net_revenue = gross_revenue.saturating_sub(deductions);

    RevenueBreakdown {
        per_type_revenue,
        gross_revenue,
        total_impressions,
        upkeep,
        delivery_cost,
        deductions,
        net_revenue,
        shares: split_net_revenue(net_revenue),
    }
}

/// Divides net revenue 50/40/10, then withholds tax from the creator's 40%
fn split_net_revenue(net_revenue: Decimal) -> RevenueShares {
    let platform_share = PLATFORM_SHARE_RATE * net_revenue;
    let creator_gross = CREATOR_SHARE_RATE * net_revenue;
    let withholding_tax = WITHHOLDING_TAX_RATE * creator_gross;
    let creator_share = creator_gross - withholding_tax;
    let distributor_share = DISTRIBUTOR_SHARE_RATE * net_revenue;

    RevenueShares {
        platform_share,
        creator_gross,
        withholding_tax,
        creator_share,
        distributor_share,
    }
}

/// A calculator instance, optionally reporting net revenue to a listener
///
/// Instances share nothing; one per platform is the usual setup.
#[derive(Clone, Default)]
pub struct RevenueCalculator {
    listener: Option<Arc<dyn RevenueListener>>,
}

impl RevenueCalculator {
    pub fn new() -> Self {
        Self { listener: None }
    }

    /// Attaches a listener that receives the net revenue of each calculation
    pub fn with_listener(mut self, listener: Arc<dyn RevenueListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Runs a calculation and notifies the listener, if any
    pub fn calculate(&self, input: &CalculationInput) -> RevenueBreakdown {
        let breakdown = compute(input);

        tracing::debug!(
            gross = %breakdown.gross_revenue,
            deductions = %breakdown.deductions,
            net = %breakdown.net_revenue,
            "Revenue calculated"
        );

        if let Some(listener) = &self.listener {
            listener.on_net_revenue(breakdown.net_revenue);
        }

        breakdown
    }
}

impl std::fmt::Debug for RevenueCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevenueCalculator")
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
