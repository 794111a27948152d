//! Health check handlers for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Coordinate layout in use (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Walking speed in distance units per second (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walking_speed: Option<f64>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            layout: None,
            walking_speed: None,
        }
    }

    /// Create a ready status with the active planning settings.
    pub fn ready(service: &str, version: &str, layout: &str, walking_speed: f64) -> Self {
        Self {
            layout: Some(layout.to_string()),
            walking_speed: Some(walking_speed),
            ..Self::alive(service, version)
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            ..Self::alive(service, version)
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"pathfinding","version":"0.1.0"}
/// ```
pub async fn health_live(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::alive(state.service(), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Not ready when the configured walking speed cannot produce a time estimate.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"pathfinding","version":"0.1.0","layout":"hashed","walking_speed":1.4}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let version = env!("CARGO_PKG_VERSION");
    let config = state.config();

    if !(config.walking_speed.is_finite() && config.walking_speed > 0.0) {
        let status = HealthStatus::not_ready(state.service(), version, "invalid walking speed");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(
        state.service(),
        version,
        &config.layout.to_string(),
        config.walking_speed,
    );
    (StatusCode::OK, Json(status)).into_response()
}
