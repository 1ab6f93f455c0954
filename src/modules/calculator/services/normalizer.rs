use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a form field into a number, treating anything unusable as zero
///
/// Accepts plain decimals (`"12"`, `"-3.5"`, `"0.5"`) and scientific notation
/// (`"1e3"`). Blank text, partial numbers such as `"12abc"`, `"NaN"`,
/// `"Infinity"`, digit separators (`"1_000"`, `"1,000"`) and values outside
/// the decimal range all yield zero. Negative values are returned as-is.
pub fn parse_number_or_zero(raw: &str) -> Decimal {
    let text = raw.trim();
    if text.is_empty() {
        return Decimal::ZERO;
    }

    // `Decimal::from_str` skips underscores; form inputs never send them
    if text.contains('_') {
        tracing::trace!(raw = %raw, "Digit separators are not accepted");
        return Decimal::ZERO;
    }

    if let Ok(value) = Decimal::from_str(text) {
        return value;
    }

    if text.contains(['e', 'E']) {
        if let Ok(value) = Decimal::from_scientific(text) {
            return value;
        }
    }

    tracing::trace!(raw = %raw, "Unparsable numeric field treated as zero");
    Decimal::ZERO
}
