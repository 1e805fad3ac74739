use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned after a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned by the database
    #[schema(example = 1)]
    pub id: i64,

    /// Confirmation message
    #[schema(example = "Patient created successfully")]
    pub message: String,
}

impl CreatedResponse {
    pub fn new(id: i64, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

/// Standardized error response format
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error kind - one of `invalid_body`, `invalid_id`, `not_found`, `internal_error`
    #[schema(example = "not_found")]
    pub error: String,

    /// Human-readable error message
    #[schema(example = "Patient with ID 42 not found")]
    pub message: String,
}
