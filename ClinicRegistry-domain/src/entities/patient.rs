use serde::{Deserialize, Serialize};

/// A registered patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    pub age: i32,
    /// Free-form health status, e.g. "stable"
    pub health: String,
}

/// Fields supplied by a client when registering a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: i32,
    pub health: String,
}
