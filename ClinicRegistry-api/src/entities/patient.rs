use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clinic_registry_domain::entities::patient as domain;

/// Public representation of a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    /// Unique identifier for the patient
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = 34)]
    pub age: i32,

    /// Free-form health status
    #[schema(example = "stable")]
    pub health: String,
}

/// Request payload for registering a patient
///
/// Any `id` sent by the client is ignored; the database assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePatientRequest {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[schema(example = 34)]
    pub age: i32,

    #[schema(example = "stable")]
    pub health: String,
}

impl From<domain::Patient> for Patient {
    fn from(patient: domain::Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            age: patient.age,
            health: patient.health,
        }
    }
}

impl From<CreatePatientRequest> for domain::CreatePatientRequest {
    fn from(request: CreatePatientRequest) -> Self {
        Self {
            name: request.name,
            age: request.age,
            health: request.health,
        }
    }
}
