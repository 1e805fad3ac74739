use serde::{Deserialize, Serialize};

/// A registered doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub specialty: String,
    /// Years of experience
    pub experience: i32,
}

/// Fields supplied by a client when registering a doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub specialty: String,
    pub experience: i32,
}
