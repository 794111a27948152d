//! Response wrapper for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Wrapper for successful responses with content type metadata.
///
/// Mirrors the `content_type` member of [`ProblemDetails`](crate::ProblemDetails)
/// so both outcomes share a shape.
///
/// # Example
///
/// ```
/// use campusnav_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Plan {
///     total_distance: u64,
/// }
///
/// let response = ServiceResponse::new(Plan { total_distance: 42 });
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,

    /// Content type for this response.
    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    /// Create a new successful response with the default content type.
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusnav_lib::RoutePlan;

    #[test]
    fn test_plan_fields_stay_at_top_level() {
        let plan = RoutePlan {
            path: Vec::new(),
            total_distance: 20,
            estimated_time: 14,
        };
        let json = serde_json::to_value(ServiceResponse::new(plan)).unwrap();

        assert_eq!(json["totalDistance"], 20);
        assert_eq!(json["estimatedTime"], 14);
        assert!(json["path"].as_array().unwrap().is_empty());
        assert_eq!(json["content_type"], "application/json");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_response_from_trait() {
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
        struct Payload {
            value: i32,
        }

        let response: ServiceResponse<Payload> = Payload { value: 99 }.into();
        assert_eq!(response.data, Payload { value: 99 });
        assert_eq!(response.content_type, "application/json");
    }
}
