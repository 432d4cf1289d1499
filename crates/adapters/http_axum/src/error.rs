//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tally_domain::error::{TallyError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TallyError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(TallyError);

impl From<TallyError> for ApiError {
    fn from(err: TallyError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TallyError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            TallyError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        tracing::debug!(%status, %message, "request rejected");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_domain::error::NotFoundError;
    use tally_domain::id::RecordId;

    #[test]
    fn should_map_validation_to_bad_request() {
        let response = ApiError::from(ValidationError::NonPositiveId(0)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = TallyError::from(NotFoundError {
            kind: "Product",
            id: RecordId::FIRST,
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
