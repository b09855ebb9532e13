use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    /// Server time, ISO-8601 without offset
    pub timestamp: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: state
            .clock
            .now()
            .format("%Y-%m-%dT%H:%M:%S%.f")
            .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
