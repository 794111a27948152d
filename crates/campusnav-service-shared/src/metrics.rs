//! Prometheus metrics for the Campus Compass services.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for the `/metrics` endpoint
//! - Business metric helpers for pathfinding
//!
//! # Example
//!
//! ```no_run
//! use campusnav_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! let app: Router = Router::new()
//!     .route(&config.path, get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics")
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let path = std::env::var("METRICS_PATH")
            .ok()
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| "/metrics".to_string());

        Self { enabled, path }
    }
}

/// Initialize the Prometheus metrics recorder.
///
/// Must be called once before any metric is recorded for the values to be
/// exported.
///
/// # Errors
///
/// Returns an error if metrics are disabled, the recorder is already
/// installed, or the Prometheus builder fails.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the metrics endpoint, in Prometheus exposition format.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The recorder has already been installed.
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

/// Increment `campusnav_paths_computed_total` for a successful request.
pub fn record_path_computed(layout: &str, service: &str) {
    metrics::counter!(
        "campusnav_paths_computed_total",
        "layout" => layout.to_string(),
        "service" => service.to_string()
    )
    .increment(1);
}

/// Increment `campusnav_paths_failed_total`.
///
/// `reason` is one of `validation_error`, `no_path` or `internal_error`.
pub fn record_path_failed(reason: &str, service: &str) {
    metrics::counter!(
        "campusnav_paths_failed_total",
        "reason" => reason.to_string(),
        "service" => service.to_string()
    )
    .increment(1);
}

/// Record the node count of a returned path in `campusnav_path_nodes`.
pub fn record_path_nodes(nodes: usize, service: &str) {
    metrics::histogram!(
        "campusnav_path_nodes",
        "service" => service.to_string()
    )
    .record(nodes as f64);
}
