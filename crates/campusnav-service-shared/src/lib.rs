//! Shared infrastructure for the Campus Compass HTTP services.
//!
//! This crate provides the HTTP glue around `campusnav-lib`:
//!
//! - [`AppState`]: Service configuration shared by every handler
//! - [`ServiceConfig`]: Port, coordinate layout and walking speed from the environment
//! - [`health`]: Liveness and readiness handlers
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request ID propagation and CORS
//! - [`Validate`]: Request validation producing problem details
//!
//! # Architecture
//!
//! Handlers stay thin; every routing decision lives in `campusnav-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate start/end ids                                   │
//! │  - Call campusnav_lib::plan_route on a blocking thread      │
//! │  - Format response or problem details                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides request fixtures for handler testing.
//! Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, ServiceConfig, DEFAULT_SERVICE_PORT};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_path_computed, record_path_failed, record_path_nodes,
    MetricsConfig, MetricsError,
};
pub use middleware::{
    cors_layer, extract_or_generate_request_id, propagate_request_id, RequestId,
    REQUEST_ID_HEADER,
};
pub use problem::{
    from_lib_error, ProblemDetails, ERROR_MISSING_ENDPOINT, ERROR_NO_PATH, ERROR_PATHFINDING_FAILED,
    PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST, PROBLEM_ROUTE_NOT_FOUND,
};
pub use request::Validate;
pub use response::ServiceResponse;
pub use state::AppState;
