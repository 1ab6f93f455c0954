//! Calculation input records
//!
//! The input surface hands over raw text per field. A `RawCalculationInput`
//! snapshot is normalized once per "Calculate" action into a
//! `CalculationInput`, which is what the revenue calculator consumes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AdType;
use crate::modules::calculator::services::normalizer::parse_number_or_zero;

/// Impressions and CPI for one ad type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdLineItem {
    /// Ad impressions served
    pub impressions: Decimal,
    /// Revenue per single impression
    pub cpi: Decimal,
}

impl AdLineItem {
    pub fn new(impressions: Decimal, cpi: Decimal) -> Self {
        Self { impressions, cpi }
    }

    /// Builds a line item from raw text, blank or unparsable fields become 0
    pub fn from_raw(impressions: &str, cpi: &str) -> Self {
        Self {
            impressions: parse_number_or_zero(impressions),
            cpi: parse_number_or_zero(cpi),
        }
    }
}

/// One normalized snapshot of the calculator form
///
/// Every ad type always has a line item; the array is indexed by
/// [`AdType::index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationInput {
    line_items: [AdLineItem; AdType::COUNT],
    /// Delivery (SSAI) cost per 1000 impressions
    pub delivery_cost_per_1000: Decimal,
}

impl CalculationInput {
    /// Creates an input with every field at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line item for one ad type
    pub fn with_line_item(mut self, ad_type: AdType, item: AdLineItem) -> Self {
        self.line_items[ad_type.index()] = item;
        self
    }

    /// Sets the delivery cost per 1000 impressions
    pub fn with_delivery_cost(mut self, delivery_cost_per_1000: Decimal) -> Self {
        self.delivery_cost_per_1000 = delivery_cost_per_1000;
        self
    }

    pub fn line_item(&self, ad_type: AdType) -> &AdLineItem {
        &self.line_items[ad_type.index()]
    }

    /// Line items paired with their ad type, in fixed order
    pub fn line_items(&self) -> impl Iterator<Item = (AdType, &AdLineItem)> {
        AdType::ALL.into_iter().zip(self.line_items.iter())
    }
}

/// A single form field as received from the input surface
///
/// Accepts JSON strings and numbers. Anything else (null, booleans, arrays)
/// counts as blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl RawField {
    pub fn normalize(&self) -> Decimal {
        match self {
            RawField::Text(text) => parse_number_or_zero(text),
            RawField::Number(number) => parse_number_or_zero(&number.to_string()),
            RawField::Other(_) => Decimal::ZERO,
        }
    }
}

impl Default for RawField {
    fn default() -> Self {
        RawField::Text(String::new())
    }
}

impl From<&str> for RawField {
    fn from(text: &str) -> Self {
        RawField::Text(text.to_string())
    }
}

/// Raw impression and CPI fields for one ad type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLineItem {
    #[serde(default)]
    pub impressions: RawField,
    #[serde(default)]
    pub cpi: RawField,
}

impl RawLineItem {
    pub fn new(impressions: impl Into<RawField>, cpi: impl Into<RawField>) -> Self {
        Self {
            impressions: impressions.into(),
            cpi: cpi.into(),
        }
    }
}

/// Form snapshot keyed by ad-type label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCalculationInput {
    #[serde(default)]
    pub ad_items: BTreeMap<String, RawLineItem>,
    #[serde(default)]
    pub delivery_cost_per_1000: RawField,
}

impl RawCalculationInput {
    /// Normalizes every field into a [`CalculationInput`]
    ///
    /// Missing ad types are blank. Keys that do not name an ad type are
    /// ignored.
    pub fn normalize(&self) -> CalculationInput {
        let mut input = CalculationInput::new()
            .with_delivery_cost(self.delivery_cost_per_1000.normalize());

        for (label, raw) in &self.ad_items {
            match AdType::from_label(label) {
                Some(ad_type) => {
                    input = input.with_line_item(
                        ad_type,
                        AdLineItem::new(raw.impressions.normalize(), raw.cpi.normalize()),
                    );
                }
                None => tracing::debug!(label = %label, "Ignoring unknown ad type"),
            }
        }

        input
    }
}
