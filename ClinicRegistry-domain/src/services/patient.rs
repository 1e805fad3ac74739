use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use clinic_registry_data::database::Database;
use clinic_registry_data::repository::{PatientRepository, PatientRepositoryTrait};

use crate::entities::conversions;
use crate::entities::patient::{CreatePatientRequest, Patient};
use super::errors::ServiceError;

/// Trait for patient service operations
#[async_trait]
pub trait PatientServiceTrait: Send + Sync {
    /// Register a new patient and return it with its assigned id
    async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, ServiceError>;

    /// Get a patient by id
    async fn get_patient(&self, id: i64) -> Result<Patient, ServiceError>;
}

/// Patient service for domain logic
pub struct PatientService<R: PatientRepositoryTrait> {
    repository: R,
}

impl<R: PatientRepositoryTrait> PatientService<R> {
    /// Create a new patient service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PatientRepositoryTrait> PatientServiceTrait for PatientService<R> {
    async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, ServiceError> {
        let data_patient = conversions::convert_to_data_new_patient(request);

        let stored = self.repository.create(data_patient).await.map_err(|e| {
            error!("Failed to store patient: {}", e);
            ServiceError::from(e)
        })?;

        debug!("Created patient {}", stored.id);
        Ok(conversions::convert_to_domain_patient(stored))
    }

    async fn get_patient(&self, id: i64) -> Result<Patient, ServiceError> {
        let stored = self.repository.get_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to load patient {}: {}", id, e);
                ServiceError::from(e)
            })?
            .ok_or(ServiceError::NotFound { entity: "Patient", id })?;

        Ok(conversions::convert_to_domain_patient(stored))
    }
}

/// Create the patient service backed by the given database
pub fn create_default_patient_service(db: Database) -> Arc<dyn PatientServiceTrait> {
    Arc::new(PatientService::new(PatientRepository::new(db)))
}

/// Create a mock patient service for testing
/// This function is only available when the mock feature is enabled
#[cfg(feature = "mock")]
pub fn create_mock_patient_service() -> Arc<dyn PatientServiceTrait> {
    Arc::new(crate::testing::MockPatientService::new())
}
