//! Request validation for HTTP endpoints.

use campusnav_lib::PathfindingRequest;

use crate::problem::ERROR_MISSING_ENDPOINT;
use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations check the request before any computation and describe the
/// first problem found.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`. The problem is boxed to keep `Result::Err` small.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

impl Validate for PathfindingRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if self.start().is_none() || self.end().is_none() {
            let missing = match (self.start(), self.end()) {
                (None, None) => "startLocationId and endLocationId are required",
                (None, Some(_)) => "startLocationId is required",
                _ => "endLocationId is required",
            };
            return Err(Box::new(
                ProblemDetails::bad_request(ERROR_MISSING_ENDPOINT, request_id)
                    .with_detail(missing),
            ));
        }
        Ok(())
    }
}
