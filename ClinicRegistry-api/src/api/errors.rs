use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use clinic_registry_domain::services::ServiceError;

use crate::entities::common::ErrorResponse;

/// Errors a handler can turn into an HTTP response
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not valid JSON for the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The path id is not an integer
    #[error("Invalid id: {0}")]
    InvalidId(#[from] PathRejection),

    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// Storage failure; the detail is logged and never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            // 400 for syntax errors, 415 for a missing content type, 422 for a wrong shape
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBody(_) => "invalid_body",
            ApiError::InvalidId(_) => "invalid_id",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::InvalidBody(rejection) => rejection.body_text(),
            ApiError::InvalidId(_) => "The id in the path must be an integer".to_string(),
            ApiError::NotFound { .. } => self.to_string(),
            ApiError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { entity, id } => ApiError::NotFound { entity, id },
            ServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_registry_domain::database::DatabaseError;
    use clinic_registry_domain::services::RepositoryError;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(ServiceError::NotFound { entity: "Doctor", id: 9 });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.public_message(), "Doctor with ID 9 not found");
    }

    #[test]
    fn test_storage_failure_hides_detail() {
        let err = ApiError::from(ServiceError::Repository(RepositoryError::Database(
            DatabaseError::GenericError("secret connection string".to_string()),
        )));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "internal_error");
        assert!(!err.public_message().contains("secret"));
    }
}
