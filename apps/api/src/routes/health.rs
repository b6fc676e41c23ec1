use axum::Json;
use serde::Serialize;

use crate::dispatch::DISPATCH_RULES;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    /// Keyword rules loaded, not counting the fallback greeting.
    pub dispatch_rules: usize,
}

/// GET /health
pub async fn health_handler() -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        dispatch_rules: DISPATCH_RULES.len(),
    })
}
