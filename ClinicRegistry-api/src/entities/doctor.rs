use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clinic_registry_domain::entities::doctor as domain;

/// Public representation of a doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Gregory House")]
    pub name: String,

    #[schema(example = "Diagnostics")]
    pub specialty: String,

    /// Years of experience
    #[schema(example = 20)]
    pub experience: i32,
}

/// Request payload for registering a doctor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDoctorRequest {
    #[schema(example = "Gregory House")]
    pub name: String,

    #[schema(example = "Diagnostics")]
    pub specialty: String,

    #[schema(example = 20)]
    pub experience: i32,
}

impl From<domain::Doctor> for Doctor {
    fn from(doctor: domain::Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            specialty: doctor.specialty,
            experience: doctor.experience,
        }
    }
}

impl From<CreateDoctorRequest> for domain::CreateDoctorRequest {
    fn from(request: CreateDoctorRequest) -> Self {
        Self {
            name: request.name,
            specialty: request.specialty,
            experience: request.experience,
        }
    }
}
