//! Campus Compass pathfinding service binary.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `CAMPUSNAV_LAYOUT` - `hashed` (default) or `random` placement for records without coordinates
//! - `CAMPUSNAV_WALKING_SPEED` - Walking speed in distance units per second (default: 1.4)
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint (default: enabled at `/metrics`)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::net::SocketAddr;

use tracing::{error, info};

use campusnav_service_route::app;
use campusnav_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("pathfinding");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env().map_err(|e| {
        error!(error = %e, "invalid service configuration");
        e
    })?;

    let service = logging_config
        .service
        .clone()
        .unwrap_or_else(|| "pathfinding".to_string());
    info!(
        service = %service,
        port = config.port,
        layout = %config.layout,
        walking_speed = config.walking_speed,
        "starting pathfinding service"
    );

    let state = AppState::with_service(config, service);
    let router = app(state, &metrics_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
