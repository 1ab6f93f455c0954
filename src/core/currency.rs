use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currencies offered by the calculator.
///
/// The currency only changes how amounts are shown. Every figure is computed
/// in whatever unit the user typed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    #[default]
    INR,
    /// US Dollar
    USD,
}

impl Currency {
    /// Number of decimal places shown for amounts
    pub const DISPLAY_SCALE: u32 = 2;

    /// Returns the symbol prefixed to displayed amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
        }
    }

    /// Rounds an amount for display (half away from zero)
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Formats an amount as symbol followed by the value at 2 decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!(
            "{}{:.width$}",
            self.symbol(),
            self.round(amount),
            width = Self::DISPLAY_SCALE as usize
        )
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::INR => write!(f, "INR"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
