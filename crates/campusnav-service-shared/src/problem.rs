//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>
//!
//! Every problem also carries an `error` member with a short message so that
//! clients which only read `{ "error": "..." }` keep working.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use campusnav_lib::Error as LibError;

/// Problem type URI for routes that cannot be found.
pub const PROBLEM_ROUTE_NOT_FOUND: &str = "/problems/route-not-found";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// Client-facing message when the start or end id is absent.
pub const ERROR_MISSING_ENDPOINT: &str = "Missing start or end location";

/// Client-facing message when the end is unreachable.
pub const ERROR_NO_PATH: &str = "No path found between locations";

/// Client-facing message for any internal failure.
pub const ERROR_PATHFINDING_FAILED: &str = "Pathfinding failed";

/// RFC 9457 Problem Details response structure.
///
/// # Example
///
/// ```
/// use campusnav_service_shared::{ProblemDetails, PROBLEM_INVALID_REQUEST};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(
///     PROBLEM_INVALID_REQUEST,
///     "Invalid Request",
///     StatusCode::BAD_REQUEST,
///     "Missing start or end location",
/// )
/// .with_request_id("req-12345");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Short message for clients that only look at `error`.
    pub error: String,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Content type for this response (always "application/problem+json").
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(
        type_uri: impl Into<String>,
        title: impl Into<String>,
        status: StatusCode,
        error: impl Into<String>,
    ) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            error: error.into(),
            detail: None,
            instance: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Create a 400 Bad Request problem; `error` doubles as the detail.
    pub fn bad_request(error: impl Into<String>, request_id: impl Into<String>) -> Self {
        let error = error.into();
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
            error.clone(),
        )
        .with_detail(error)
        .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for unreachable locations.
    pub fn route_not_found(start: &str, goal: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_ROUTE_NOT_FOUND,
            "Route Not Found",
            StatusCode::NOT_FOUND,
            ERROR_NO_PATH,
        )
        .with_detail(format!("No path exists from '{}' to '{}'", start, goal))
        .with_request_id(request_id)
    }

    /// Create a 500 Internal Server Error problem.
    ///
    /// The cause is only logged; clients see the generic message.
    pub fn internal_error(request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
            ERROR_PATHFINDING_FAILED,
        )
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.error)
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::MissingEndpoint { .. } => {
            ProblemDetails::bad_request(ERROR_MISSING_ENDPOINT, request_id)
        }
        LibError::RouteNotFound { start, goal } => {
            ProblemDetails::route_not_found(start, goal, request_id)
        }
        _ => ProblemDetails::internal_error(request_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_new() {
        let problem = ProblemDetails::new(
            PROBLEM_ROUTE_NOT_FOUND,
            "Route Not Found",
            StatusCode::NOT_FOUND,
            ERROR_NO_PATH,
        );
        assert_eq!(problem.type_uri, PROBLEM_ROUTE_NOT_FOUND);
        assert_eq!(problem.status, 404);
        assert_eq!(problem.error, ERROR_NO_PATH);
        assert_eq!(problem.content_type, "application/problem+json");
    }

    #[test]
    fn test_problem_details_bad_request() {
        let problem = ProblemDetails::bad_request("Invalid JSON", "req-123");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.error, "Invalid JSON");
        assert_eq!(problem.instance.as_deref(), Some("req-123"));
    }

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails::bad_request("Test error", "req-test");
        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(json["type"], "/problems/invalid-request");
        assert_eq!(json["title"], "Invalid Request");
        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Test error");
        assert_eq!(json["instance"], "req-test");
    }

    #[test]
    fn test_from_lib_error_missing_endpoint() {
        let error = LibError::MissingEndpoint {
            field: "endLocationId",
        };
        let problem = from_lib_error(&error, "req-lib");

        assert_eq!(problem.type_uri, PROBLEM_INVALID_REQUEST);
        assert_eq!(problem.status, 400);
        assert_eq!(problem.error, ERROR_MISSING_ENDPOINT);
    }

    #[test]
    fn test_from_lib_error_route_not_found() {
        let error = LibError::RouteNotFound {
            start: "lobby".to_string(),
            goal: "library".to_string(),
        };
        let problem = from_lib_error(&error, "req-route");

        assert_eq!(problem.status, 404);
        assert_eq!(problem.error, ERROR_NO_PATH);
        assert!(problem.detail.as_deref().unwrap().contains("library"));
    }

    #[test]
    fn test_from_lib_error_hides_internal_detail() {
        let error = LibError::InvalidReference {
            from: "a".to_string(),
            to: "w-secret".to_string(),
            missing: "w-secret".to_string(),
        };
        let problem = from_lib_error(&error, "req-internal");

        assert_eq!(problem.status, 500);
        assert_eq!(problem.error, ERROR_PATHFINDING_FAILED);
        assert!(problem.detail.is_none());
        assert!(!serde_json::to_string(&problem).unwrap().contains("w-secret"));
    }
}
