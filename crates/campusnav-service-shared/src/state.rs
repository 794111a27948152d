//! Application state for the HTTP services.
//!
//! Requests bring their own records, so the state only carries the
//! configuration every request is planned with.

use std::sync::Arc;

use campusnav_lib::PlanOptions;

use crate::config::ServiceConfig;

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; share it via axum's `State` extractor.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post, extract::State};
/// use campusnav_service_shared::{AppState, ServiceConfig};
///
/// async fn handler(State(state): State<AppState>) {
///     let options = state.plan_options();
///     // ... plan a route
/// }
///
/// let state = AppState::new(ServiceConfig::from_env()?);
/// let app = Router::new()
///     .route("/api/v1/pathfinding", post(handler))
///     .with_state(state);
/// ```
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: ServiceConfig,
    service: String,
}

impl AppState {
    /// Create state for the default `pathfinding` service name.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_service(config, "pathfinding")
    }

    /// Create state with an explicit service name used in logs and metrics.
    pub fn with_service(config: ServiceConfig, service: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                service: service.into(),
            }),
        }
    }

    /// Get the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Service name for logs and metric labels.
    pub fn service(&self) -> &str {
        &self.inner.service
    }

    /// Options applied to every planned route.
    pub fn plan_options(&self) -> PlanOptions {
        self.inner.config.plan_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusnav_lib::CoordinateLayout;

    #[test]
    fn test_app_state_clone_shares_config() {
        let config = ServiceConfig {
            layout: CoordinateLayout::Random,
            ..ServiceConfig::default()
        };
        let state = AppState::new(config);
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.inner, &cloned.inner));
        assert_eq!(cloned.config().layout, CoordinateLayout::Random);
        assert_eq!(cloned.service(), "pathfinding");
    }

    #[test]
    fn test_plan_options_from_state() {
        let state = AppState::with_service(ServiceConfig::default(), "edge");
        assert_eq!(state.service(), "edge");
        assert_eq!(state.plan_options().walking_speed, 1.4);
    }
}
