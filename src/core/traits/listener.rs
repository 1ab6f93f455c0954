use rust_decimal::Decimal;

/// Receives the net revenue of every completed calculation.
///
/// A containing context (for example a per-platform comparison) implements
/// this to follow results without inspecting the full breakdown.
pub trait RevenueListener: Send + Sync {
    fn on_net_revenue(&self, net_revenue: Decimal);
}

impl<F> RevenueListener for F
where
    F: Fn(Decimal) + Send + Sync,
{
    fn on_net_revenue(&self, net_revenue: Decimal) {
        self(net_revenue)
    }
}
