pub mod doctors;
pub mod health;
pub mod patients;

// Re-export handlers for easier imports
pub use doctors::{create_doctor, get_doctor};
pub use health::health_check;
pub use patients::{create_patient, get_patient};
