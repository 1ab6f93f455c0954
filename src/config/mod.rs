use crate::core::{AppError, Currency, Result};
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Display currency for requests that do not choose one
    pub default_currency: Currency,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                default_currency: env::var("DEFAULT_CURRENCY")
                    .unwrap_or_else(|_| Currency::default().to_string())
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid DEFAULT_CURRENCY"))?,
            },
            server: ServerConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration("Server workers must be greater than 0"));
        }

        Ok(())
    }

    /// Default tracing filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> String {
        format!("adsplit={},actix_web=info", self.app.log_level)
    }
}
