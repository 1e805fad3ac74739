// Public entities for the ClinicRegistry API
// This module contains the JSON shapes exchanged with clients

pub mod common;
pub mod doctor;
pub mod patient;

pub use common::{CreatedResponse, ErrorResponse};
pub use doctor::{CreateDoctorRequest, Doctor};
pub use patient::{CreatePatientRequest, Patient};
