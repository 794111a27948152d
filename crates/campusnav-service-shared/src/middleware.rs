//! HTTP middleware for the Campus Compass services.
//!
//! This module provides:
//! - [`RequestId`]: Newtype for correlation ID extraction/generation
//! - [`extract_or_generate_request_id`]: Extract X-Request-ID header or generate UUID v7
//! - [`propagate_request_id`]: Stores the ID in request extensions and echoes it back
//! - [`cors_layer`]: Browser access from any origin
//!
//! # Request ID Propagation
//!
//! The `X-Request-ID` header is reused when present, otherwise a new UUID v7
//! (time-sortable) is generated. Handlers read it through the
//! `Extension<RequestId>` extractor and log it as `request_id`.

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapper for request correlation IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new UUID v7 request ID.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the request ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Extract the request ID from headers or generate a new UUID v7.
///
/// Header lookup is case-insensitive. Empty or non-UTF-8 values are replaced.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

/// Axum middleware attaching a [`RequestId`] to every request and response.
///
/// Use with `axum::middleware::from_fn(propagate_request_id)`.
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let request_id = extract_or_generate_request_id(request.headers());
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

/// CORS policy for browser clients calling from any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware::from_fn, routing::get, Extension, Router};
    use axum_test::TestServer;

    #[test]
    fn test_request_id_generate() {
        let id1 = RequestId::generate();
        let id2 = RequestId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 36);
    }

    #[test]
    fn test_extract_request_id_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Request-ID", HeaderValue::from_static("test-123"));

        let id = extract_or_generate_request_id(&headers);
        assert_eq!(id.as_str(), "test-123");
    }

    #[test]
    fn test_extract_request_id_generates_when_empty() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("  "));

        let id = extract_or_generate_request_id(&headers);
        assert!(!id.as_str().trim().is_empty());
        assert_ne!(id.as_str(), "  ");
    }

    #[tokio::test]
    async fn test_request_id_reaches_handler_and_response() {
        async fn echo(Extension(id): Extension<RequestId>) -> String {
            id.to_string()
        }

        let app = Router::new()
            .route("/echo", get(echo))
            .layer(from_fn(propagate_request_id));
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/echo")
            .add_header(
                HeaderName::from_static(REQUEST_ID_HEADER),
                HeaderValue::from_static("abc-1"),
            )
            .await;
        response.assert_text("abc-1");
        assert_eq!(response.header(REQUEST_ID_HEADER), "abc-1");

        let generated = server.get("/echo").await;
        assert_eq!(
            generated.header(REQUEST_ID_HEADER).to_str().unwrap(),
            generated.text()
        );
    }
}
