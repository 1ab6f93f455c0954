//! Platform comparison endpoints

use actix_web::{web, HttpResponse};

use crate::routes::AppState;

/// Latest net revenue per platform, with combined total and leader
///
/// GET /api/v1/platforms/summary
pub async fn get_platform_summary(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.tracker.summary())
}

/// Forget all platform results
///
/// DELETE /api/v1/platforms
pub async fn clear_platforms(state: web::Data<AppState>) -> HttpResponse {
    state.tracker.clear();
    HttpResponse::NoContent().finish()
}

/// Configure platform routes
pub fn configure_platform_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/platforms")
            .route("", web::delete().to(clear_platforms))
            .route("/summary", web::get().to(get_platform_summary)),
    );
}
