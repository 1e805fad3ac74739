pub mod errors;
pub mod doctor;
pub mod patient;

// Domain services
// This module contains the registration and lookup logic for patients and doctors.

// Re-export service traits and factory functions
pub use errors::ServiceError;
pub use clinic_registry_data::repository::RepositoryError;
pub use doctor::{DoctorService, DoctorServiceTrait, create_default_doctor_service};
pub use patient::{PatientService, PatientServiceTrait, create_default_patient_service};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use doctor::create_mock_doctor_service;
#[cfg(feature = "mock")]
pub use patient::create_mock_patient_service;
