//! Shared application state and route table.

use actix_web::web;
use std::sync::Arc;

use crate::core::Currency;
use crate::middleware::json_error_handler;
use crate::modules::calculator::controllers::configure_calculator_routes;
use crate::modules::health::controllers as health;
use crate::modules::platforms::controllers::configure_platform_routes;
use crate::modules::platforms::PlatformRevenueTracker;

/// State shared by every worker
#[derive(Debug, Clone)]
pub struct AppState {
    /// Display currency used when a request does not pick one
    pub default_currency: Currency,
    pub tracker: Arc<PlatformRevenueTracker>,
}

impl AppState {
    pub fn new(default_currency: Currency, tracker: Arc<PlatformRevenueTracker>) -> Self {
        Self {
            default_currency,
            tracker,
        }
    }
}

/// Registers all routes: health at the root, the API under `/api/v1`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::configure)
        .service(
            web::scope("/api/v1")
                .configure(configure_calculator_routes)
                .configure(configure_platform_routes),
        );
}
