// Storage models mapped one-to-one onto table rows
pub mod doctor;
pub mod patient;

pub use doctor::{Doctor, NewDoctor};
pub use patient::{NewPatient, Patient};
