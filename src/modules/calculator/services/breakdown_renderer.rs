//! Display formatting for a revenue breakdown.
//!
//! Amounts are rounded to 2 decimal places and prefixed with the currency
//! symbol. Total impressions are shown as a plain number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Currency;
use crate::modules::calculator::models::RevenueBreakdown;

pub const PLATFORM_SHARE_LABEL: &str = "Platform Share (50%)";
pub const CREATOR_SHARE_LABEL: &str = "Content Creator (40% - 5% TDS)";
pub const WITHHOLDING_TAX_LABEL: &str = "TDS Withheld (5%)";
pub const DISTRIBUTOR_SHARE_LABEL: &str = "Distributor (10% incl. GST)";

/// One labelled, formatted value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub label: String,
    pub value: String,
}

impl RenderedLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Breakdown formatted for the output surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBreakdown {
    pub currency: Currency,
    pub per_type_revenue: Vec<RenderedLine>,
    pub gross_revenue: String,
    pub total_impressions: String,
    pub deductions: String,
    pub net_revenue: String,
    pub shares: Vec<RenderedLine>,
}

impl RenderedBreakdown {
    pub fn render(breakdown: &RevenueBreakdown, currency: Currency) -> Self {
        let per_type_revenue = breakdown
            .per_type_revenue
            .iter()
            .map(|entry| {
                RenderedLine::new(entry.ad_type.label(), currency.format_amount(entry.revenue))
            })
            .collect();

        let shares = &breakdown.shares;
        let shares = vec![
            RenderedLine::new(PLATFORM_SHARE_LABEL, currency.format_amount(shares.platform_share)),
            RenderedLine::new(CREATOR_SHARE_LABEL, currency.format_amount(shares.creator_share)),
            RenderedLine::new(WITHHOLDING_TAX_LABEL, currency.format_amount(shares.withholding_tax)),
            RenderedLine::new(
                DISTRIBUTOR_SHARE_LABEL,
                currency.format_amount(shares.distributor_share),
            ),
        ];

        Self {
            currency,
            per_type_revenue,
            gross_revenue: currency.format_amount(breakdown.gross_revenue),
            total_impressions: format_count(breakdown.total_impressions),
            deductions: currency.format_amount(breakdown.deductions),
            net_revenue: currency.format_amount(breakdown.net_revenue),
            shares,
        }
    }
}

fn format_count(value: Decimal) -> String {
    value.normalize().to_string()
}

impl fmt::Display for RenderedBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.per_type_revenue {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        writeln!(f, "Gross Revenue: {}", self.gross_revenue)?;
        writeln!(f, "Total Impressions: {}", self.total_impressions)?;
        writeln!(f, "Total Deductions: {}", self.deductions)?;
        writeln!(f, "Net Revenue: {}", self.net_revenue)?;
        for line in &self.shares {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}
