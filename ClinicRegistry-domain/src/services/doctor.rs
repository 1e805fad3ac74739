use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use clinic_registry_data::database::Database;
use clinic_registry_data::repository::{DoctorRepository, DoctorRepositoryTrait};

use crate::entities::conversions;
use crate::entities::doctor::{CreateDoctorRequest, Doctor};
use super::errors::ServiceError;

/// Trait for doctor service operations
#[async_trait]
pub trait DoctorServiceTrait: Send + Sync {
    /// Register a new doctor and return it with its assigned id
    async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, ServiceError>;

    /// Get a doctor by id
    async fn get_doctor(&self, id: i64) -> Result<Doctor, ServiceError>;
}

/// Doctor service for domain logic
pub struct DoctorService<R: DoctorRepositoryTrait> {
    repository: R,
}

impl<R: DoctorRepositoryTrait> DoctorService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: DoctorRepositoryTrait> DoctorServiceTrait for DoctorService<R> {
    async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, ServiceError> {
        let stored = self.repository
            .create(conversions::convert_to_data_new_doctor(request))
            .await
            .map_err(|e| {
                error!("Failed to store doctor: {}", e);
                ServiceError::from(e)
            })?;

        debug!("Created doctor {}", stored.id);
        Ok(conversions::convert_to_domain_doctor(stored))
    }

    async fn get_doctor(&self, id: i64) -> Result<Doctor, ServiceError> {
        let stored = self.repository.get_by_id(id)
            .await
            .map_err(|e| {
                error!("Failed to load doctor {}: {}", id, e);
                ServiceError::from(e)
            })?
            .ok_or(ServiceError::NotFound { entity: "Doctor", id })?;

        Ok(conversions::convert_to_domain_doctor(stored))
    }
}

/// Create the doctor service backed by the given database
pub fn create_default_doctor_service(db: Database) -> Arc<dyn DoctorServiceTrait> {
    Arc::new(DoctorService::new(DoctorRepository::new(db)))
}

/// Create a mock doctor service for testing
#[cfg(feature = "mock")]
pub fn create_mock_doctor_service() -> Arc<dyn DoctorServiceTrait> {
    Arc::new(crate::testing::MockDoctorService::new())
}
