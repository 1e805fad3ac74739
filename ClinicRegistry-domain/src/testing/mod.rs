// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use clinic_registry_data::database::DatabaseError;
use clinic_registry_data::repository::RepositoryError;

use crate::entities::doctor::{CreateDoctorRequest, Doctor};
use crate::entities::patient::{CreatePatientRequest, Patient};
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth};
use crate::services::doctor::DoctorServiceTrait;
use crate::services::errors::ServiceError;
use crate::services::patient::PatientServiceTrait;

fn storage_failure() -> ServiceError {
    ServiceError::Repository(RepositoryError::Database(DatabaseError::GenericError(
        "Storage unavailable - mock is configured to fail".to_string(),
    )))
}

/// In-process patient service that keeps records in a map
pub struct MockPatientService {
    patients: RwLock<HashMap<i64, Patient>>,
    next_id: AtomicI64,
    should_fail_storage: bool,
    delay: Option<Duration>,
}

impl Default for MockPatientService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPatientService {
    /// Create an empty mock patient service
    pub fn new() -> Self {
        Self {
            patients: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            should_fail_storage: false,
            delay: None,
        }
    }

    /// Configure the mock so every call fails as a storage error
    pub fn with_storage_failure(mut self) -> Self {
        self.should_fail_storage = true;
        self
    }

    /// Configure the mock to wait before answering every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    /// Add a pre-defined patient to the mock
    pub fn with_patient(mut self, patient: Patient) -> Self {
        let next = self.next_id.get_mut();
        *next = (*next).max(patient.id + 1);
        self.patients.get_mut().insert(patient.id, patient);
        self
    }
}

#[async_trait]
impl PatientServiceTrait for MockPatientService {
    async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, ServiceError> {
        self.wait().await;
        if self.should_fail_storage {
            return Err(storage_failure());
        }

        let patient = Patient {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: request.name,
            age: request.age,
            health: request.health,
        };
        self.patients.write().await.insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn get_patient(&self, id: i64) -> Result<Patient, ServiceError> {
        self.wait().await;
        if self.should_fail_storage {
            return Err(storage_failure());
        }

        self.patients.read().await
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound { entity: "Patient", id })
    }
}

/// In-process doctor service that keeps records in a map
pub struct MockDoctorService {
    doctors: RwLock<HashMap<i64, Doctor>>,
    next_id: AtomicI64,
    should_fail_storage: bool,
}

impl Default for MockDoctorService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDoctorService {
    pub fn new() -> Self {
        Self {
            doctors: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            should_fail_storage: false,
        }
    }

    pub fn with_storage_failure(mut self) -> Self {
        self.should_fail_storage = true;
        self
    }

    pub fn with_doctor(mut self, doctor: Doctor) -> Self {
        let next = self.next_id.get_mut();
        *next = (*next).max(doctor.id + 1);
        self.doctors.get_mut().insert(doctor.id, doctor);
        self
    }
}

#[async_trait]
impl DoctorServiceTrait for MockDoctorService {
    async fn create_doctor(&self, request: CreateDoctorRequest) -> Result<Doctor, ServiceError> {
        if self.should_fail_storage {
            return Err(storage_failure());
        }

        let doctor = Doctor {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: request.name,
            specialty: request.specialty,
            experience: request.experience,
        };
        self.doctors.write().await.insert(doctor.id, doctor.clone());
        Ok(doctor)
    }

    async fn get_doctor(&self, id: i64) -> Result<Doctor, ServiceError> {
        if self.should_fail_storage {
            return Err(storage_failure());
        }

        self.doctors.read().await
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound { entity: "Doctor", id })
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Database component status
    database_status: ComponentStatus,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            database_status: ComponentStatus::Healthy,
        }
    }

    /// Configure the mock with an unhealthy database
    pub fn with_unhealthy_database(mut self) -> Self {
        self.database_status = ComponentStatus::Unhealthy;
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let database = HealthComponent {
            status: self.database_status.clone(),
            details: self.check_database_status().await.err(),
        };
        let api = HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        };

        SystemHealth::from_components(
            vec![
                ("database".to_string(), database),
                ("api".to_string(), api),
            ].into_iter().collect(),
        )
    }

    async fn check_database_status(&self) -> Result<String, String> {
        match self.database_status {
            ComponentStatus::Healthy => Ok("Mock database".to_string()),
            ComponentStatus::Unhealthy => Err("Database connection failed".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_patient_service_assigns_ids_after_seeded_records() {
        let service = MockPatientService::new().with_patient(Patient {
            id: 5,
            name: "Seeded".to_string(),
            age: 40,
            health: "fine".to_string(),
        });

        let created = service.create_patient(CreatePatientRequest {
            name: "New".to_string(),
            age: 22,
            health: "good".to_string(),
        }).await.unwrap();

        assert_eq!(created.id, 6);
        assert_eq!(service.get_patient(5).await.unwrap().name, "Seeded");
        assert!(service.get_patient(7).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_doctor_service_failure_switch() {
        let service = MockDoctorService::new().with_storage_failure();
        let err = service.get_doctor(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
    }
}
