use adsplit::calculator::RevenueBreakdown;
use rust_decimal::Decimal;

/// Asserts the post-tax identity: every share plus withholding adds up to net
pub fn assert_shares_cover_net(breakdown: &RevenueBreakdown) {
    let shares = &breakdown.shares;
    assert_eq!(
        shares.platform_share + shares.creator_share + shares.withholding_tax + shares.distributor_share,
        breakdown.net_revenue,
        "shares must partition net revenue"
    );
    assert_eq!(
        shares.creator_share + shares.withholding_tax,
        shares.creator_gross,
        "withholding must come out of the creator's gross share"
    );
}

/// Asserts every aggregate of a breakdown is zero
pub fn assert_all_zero(breakdown: &RevenueBreakdown) {
    assert!(breakdown.per_type_revenue.iter().all(|e| e.revenue.is_zero()));
    for value in [
        breakdown.gross_revenue,
        breakdown.total_impressions,
        breakdown.upkeep,
        breakdown.delivery_cost,
        breakdown.deductions,
        breakdown.net_revenue,
        breakdown.shares.platform_share,
        breakdown.shares.creator_gross,
        breakdown.shares.withholding_tax,
        breakdown.shares.creator_share,
        breakdown.shares.distributor_share,
    ] {
        assert_eq!(value, Decimal::ZERO);
    }
}
