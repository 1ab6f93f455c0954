// Display formatting tests
//
// The currency setting only changes the symbol in front of each amount;
// every amount is shown with exactly 2 decimal places.

use adsplit::calculator::models::{AdLineItem, AdType, CalculationInput};
use adsplit::calculator::{compute, RenderedBreakdown};
use adsplit::core::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn decimals_after_point(formatted: &str) -> usize {
    formatted.split('.').nth(1).map(str::len).unwrap_or(0)
}

proptest! {
    #[test]
    fn test_amounts_always_show_two_decimals(units in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..6u32) {
        let amount = Decimal::new(units, scale);
        for currency in [Currency::INR, Currency::USD] {
            let formatted = currency.format_amount(amount);
            prop_assert!(formatted.starts_with(currency.symbol()));
            prop_assert_eq!(decimals_after_point(&formatted), 2, "{}", formatted);
        }
    }

    #[test]
    fn test_currency_never_changes_values(impressions in 0u64..1_000_000u64, cpi_cents in 0u64..10_000u64) {
        let input = CalculationInput::new()
            .with_line_item(AdType::MidRoll, AdLineItem::new(Decimal::from(impressions), Decimal::new(cpi_cents as i64, 2)));
        let breakdown = compute(&input);

        let inr = RenderedBreakdown::render(&breakdown, Currency::INR);
        let usd = RenderedBreakdown::render(&breakdown, Currency::USD);

        prop_assert_eq!(
            inr.to_string().replace(Currency::INR.symbol(), ""),
            usd.to_string().replace(Currency::USD.symbol(), "")
        );
    }
}

#[test]
fn test_display_rounding() {
    assert_eq!(Currency::USD.format_amount(dec!(0.005)), "$0.01");
    assert_eq!(Currency::USD.format_amount(dec!(2.344)), "$2.34");
    assert_eq!(Currency::INR.format_amount(dec!(759.6)), "₹759.60");
}
