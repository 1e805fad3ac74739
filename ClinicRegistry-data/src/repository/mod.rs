// Repository module structure
pub mod errors;
mod doctor;
mod patient;
mod storage;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use doctor::{DoctorRepository, DoctorRepositoryTrait};
pub use patient::{PatientRepository, PatientRepositoryTrait};
pub use storage::DatabaseStorage;

// Mocks of the repository traits for the layers above
#[cfg(feature = "mock")]
pub use doctor::MockDoctorRepositoryTrait;
#[cfg(feature = "mock")]
pub use patient::MockPatientRepositoryTrait;
