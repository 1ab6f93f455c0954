//! Per-platform net revenue tracking
//!
//! Each platform runs its own calculator. The tracker is the containing
//! context those calculators report to: it keeps only the latest net revenue
//! for each platform, a new result replaces the old one.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{AppError, Result, RevenueListener};
use crate::modules::platforms::models::{PlatformRevenue, PlatformSummary};

/// Maximum accepted platform name length
pub const MAX_PLATFORM_NAME_LEN: usize = 100;

#[derive(Debug, Default)]
pub struct PlatformRevenueTracker {
    latest: Mutex<BTreeMap<String, Decimal>>,
}

impl PlatformRevenueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and trims a platform name
    pub fn normalize_platform_name(platform: &str) -> Result<String> {
        let name = platform.trim();

        if name.is_empty() {
            return Err(AppError::validation("Platform name cannot be empty"));
        }

        if name.chars().count() > MAX_PLATFORM_NAME_LEN {
            return Err(AppError::validation(format!(
                "Platform name cannot exceed {} characters",
                MAX_PLATFORM_NAME_LEN
            )));
        }

        Ok(name.to_string())
    }

    /// Returns a listener that records results under the given platform
    pub fn listener_for(self: &Arc<Self>, platform: &str) -> Result<PlatformListener> {
        Ok(PlatformListener {
            platform: Self::normalize_platform_name(platform)?,
            tracker: Arc::clone(self),
        })
    }

    pub fn net_for(&self, platform: &str) -> Option<Decimal> {
        self.lock().get(platform.trim()).copied()
    }

    pub fn summary(&self) -> PlatformSummary {
        let platforms = self
            .lock()
            .iter()
            .map(|(platform, net_revenue)| PlatformRevenue {
                platform: platform.clone(),
                net_revenue: *net_revenue,
            })
            .collect();

        PlatformSummary::new(platforms)
    }

    /// Forgets every platform's result
    pub fn clear(&self) {
        self.lock().clear();
        tracing::info!("Platform revenue tracker cleared");
    }

    fn store(&self, name: String, net_revenue: Decimal) {
        tracing::info!(platform = %name, net = %net_revenue, "Platform net revenue updated");
        self.lock().insert(name, net_revenue);
    }

    // Writes are single inserts or clears; a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Decimal>> {
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Listener bound to one platform name
#[derive(Debug, Clone)]
pub struct PlatformListener {
    platform: String,
    tracker: Arc<PlatformRevenueTracker>,
}

impl PlatformListener {
    pub fn platform(&self) -> &str {
        &self.platform
    }
}

impl RevenueListener for PlatformListener {
    fn on_net_revenue(&self, net_revenue: Decimal) {
        self.tracker.store(self.platform.clone(), net_revenue);
    }
}
