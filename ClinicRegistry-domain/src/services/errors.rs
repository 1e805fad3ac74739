use thiserror::Error;

use clinic_registry_data::repository::RepositoryError;

/// Errors returned by the patient and doctor services
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record with the requested id
    #[error("{entity} with ID {id} not found")]
    NotFound {
        entity: &'static str,
        id: i64,
    },

    /// Storage failure
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Whether the error is a missing record rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }
}
