//! Campus Compass pathfinding HTTP service.
//!
//! Each request carries the location, waypoint and navigation-step records to
//! route over. The service builds a graph from them, finds the shortest path
//! and returns it with a rounded distance and walking-time estimate.
//!
//! # Endpoints
//!
//! - `POST /api/v1/pathfinding` - Compute a path between two locations
//! - `POST /functions/v1/pathfinding` - Same handler under the legacy path
//! - `GET /metrics` - Prometheus metrics endpoint (path set by `METRICS_PATH`)
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

#![deny(warnings)]

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use campusnav_lib::{plan_route, Error as LibError, PathfindingRequest, RoutePlan};
use campusnav_service_shared::{
    cors_layer, from_lib_error, health_live, health_ready, metrics_handler, propagate_request_id,
    record_path_computed, record_path_failed, record_path_nodes, AppState, MetricsConfig,
    ProblemDetails, RequestId, ServiceResponse, Validate,
};

/// Primary route for pathfinding requests.
pub const PATHFINDING_PATH: &str = "/api/v1/pathfinding";

/// Path kept for clients of the earlier edge-function deployment.
pub const LEGACY_PATHFINDING_PATH: &str = "/functions/v1/pathfinding";

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(ServiceResponse<RoutePlan>),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the service router.
///
/// The metrics endpoint is only mounted when `metrics.enabled` is set.
pub fn app(state: AppState, metrics: &MetricsConfig) -> Router {
    let mut router = Router::new()
        .route(PATHFINDING_PATH, post(pathfinding_handler))
        .route(LEGACY_PATHFINDING_PATH, post(pathfinding_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if metrics.enabled {
        router = router.route(&metrics.path, get(metrics_handler));
    }

    router
        .layer(from_fn(propagate_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Handle POST pathfinding requests.
async fn pathfinding_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<PathfindingRequest>, JsonRejection>,
) -> Response {
    let service = state.service();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "rejected request body");
            record_path_failed("validation_error", service);
            return Response::Error(ProblemDetails::bad_request(
                "Request body must be a JSON pathfinding request",
                request_id.as_str(),
            ));
        }
    };

    info!(
        request_id = %request_id,
        service,
        start = request.start().unwrap_or_default(),
        end = request.end().unwrap_or_default(),
        locations = request.locations.len(),
        waypoints = request.waypoints.len(),
        steps = request.navigation_steps.len(),
        "handling pathfinding request"
    );

    if let Err(problem) = request.validate(request_id.as_str()) {
        record_path_failed("validation_error", service);
        return Response::Error(*problem);
    }

    let options = state.plan_options();
    let outcome = tokio::task::spawn_blocking(move || plan_route(&request, &options)).await;

    let plan = match outcome {
        Ok(Ok(plan)) => plan,
        Ok(Err(e)) => {
            let reason = match e {
                LibError::MissingEndpoint { .. } => "validation_error",
                LibError::RouteNotFound { .. } => "no_path",
                _ => "internal_error",
            };
            if reason == "internal_error" {
                error!(request_id = %request_id, error = %e, "pathfinding failed");
            } else {
                info!(request_id = %request_id, error = %e, "no route returned");
            }
            record_path_failed(reason, service);
            return Response::Error(from_lib_error(&e, request_id.as_str()));
        }
        Err(join_error) => {
            error!(request_id = %request_id, error = %join_error, "pathfinding task aborted");
            record_path_failed("internal_error", service);
            return Response::Error(ProblemDetails::internal_error(request_id.as_str()));
        }
    };

    record_path_computed(&options.layout.to_string(), service);
    record_path_nodes(plan.path.len(), service);

    info!(
        request_id = %request_id,
        nodes = plan.path.len(),
        total_distance = plan.total_distance,
        estimated_time = plan.estimated_time,
        "path computed successfully"
    );

    Response::Success(ServiceResponse::new(plan))
}
