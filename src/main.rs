use actix_web::{web, App, HttpServer};
use adsplit::config::Config;
use adsplit::middleware::RequestId;
use adsplit::platforms::PlatformRevenueTracker;
use adsplit::routes::{self, AppState};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting adsplit revenue calculator");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Default currency: {}", config.app.default_currency);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let state = AppState::new(
        config.app.default_currency,
        Arc::new(PlatformRevenueTracker::new()),
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
