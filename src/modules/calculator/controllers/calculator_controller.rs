//! Calculator controller for HTTP endpoints
//!
//! `POST /api/v1/calculations` is the "Calculate" trigger: it takes the raw
//! form snapshot, normalizes it, runs one calculation and returns both the
//! breakdown and its display rendering.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::{Currency, Result};
use crate::modules::calculator::models::{
    RawCalculationInput, RawField, RawLineItem, RevenueBreakdown,
};
use crate::modules::calculator::services::{RenderedBreakdown, RevenueCalculator};
use crate::routes::AppState;

/// Request body for a calculation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Platform the result is recorded under, if any
    #[serde(default)]
    pub platform: Option<String>,
    /// Display currency; the configured default when absent
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Raw impression/CPI fields keyed by ad-type label
    #[serde(default)]
    pub ad_items: BTreeMap<String, RawLineItem>,
    #[serde(default)]
    pub delivery_cost_per_1000: RawField,
}

impl CalculationRequest {
    pub fn raw_input(&self) -> RawCalculationInput {
        RawCalculationInput {
            ad_items: self.ad_items.clone(),
            delivery_cost_per_1000: self.delivery_cost_per_1000.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub platform: Option<String>,
    pub currency: Currency,
    pub breakdown: RevenueBreakdown,
    pub display: RenderedBreakdown,
}

/// Run a calculation
///
/// POST /api/v1/calculations
pub async fn create_calculation(
    state: web::Data<AppState>,
    request: web::Json<CalculationRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let currency = request.currency.unwrap_or(state.default_currency);

    let (calculator, platform) = match request.platform.as_deref() {
        Some(platform) => {
            let listener = state.tracker.listener_for(platform)?;
            let name = listener.platform().to_string();
            (
                RevenueCalculator::new().with_listener(Arc::new(listener)),
                Some(name),
            )
        }
        None => (RevenueCalculator::new(), None),
    };

    let input = request.raw_input().normalize();
    let breakdown = calculator.calculate(&input);
    let display = RenderedBreakdown::render(&breakdown, currency);

    Ok(HttpResponse::Ok().json(CalculationResponse {
        platform,
        currency,
        breakdown,
        display,
    }))
}

/// Configure calculator routes
pub fn configure_calculator_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/calculations").route(web::post().to(create_calculation)));
}
