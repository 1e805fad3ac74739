// Domain entities and value objects
pub mod conversions;
pub mod doctor;
pub mod patient;

// Re-export common types for easier imports
pub use doctor::{CreateDoctorRequest, Doctor};
pub use patient::{CreatePatientRequest, Patient};
