use std::sync::Arc;

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument};

use clinic_registry_domain::services::PatientServiceTrait;

use crate::api::errors::ApiError;
use crate::entities::common::CreatedResponse;
use crate::entities::patient::{CreatePatientRequest, Patient};

/// Service type for dependency injection
pub type PatientService = Arc<dyn PatientServiceTrait>;

/// Register a new patient
#[utoipa::path(
    post,
    path = "/api/newpatient",
    request_body = CreatePatientRequest,
    responses(
        (status = 201, description = "Patient created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON body", body = crate::entities::common::ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = crate::entities::common::ErrorResponse),
        (status = 422, description = "Body has the wrong shape", body = crate::entities::common::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::entities::common::ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service, payload))]
pub async fn create_patient(
    State(service): State<PatientService>,
    payload: Result<Json<CreatePatientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = payload?;

    let patient = service.create_patient(request.into()).await?;
    info!("Patient created with ID: {}", patient.id);

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(patient.id, "Patient created successfully")),
    ))
}

/// Get a single patient by ID
#[utoipa::path(
    get,
    path = "/api/patient/{id}",
    params(
        ("id" = i64, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Patient found", body = Patient),
        (status = 400, description = "ID is not an integer", body = crate::entities::common::ErrorResponse),
        (status = 404, description = "Patient not found", body = crate::entities::common::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::entities::common::ErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service, id))]
pub async fn get_patient(
    State(service): State<PatientService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Patient>, ApiError> {
    let Path(id) = id?;
    info!("Fetching patient with ID: {}", id);

    let patient = service.get_patient(id).await?;
    Ok(Json(patient.into()))
}

/// Plain OPTIONS on the create route
pub async fn create_patient_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "POST, OPTIONS")])
}

/// Plain OPTIONS on the lookup route
pub async fn get_patient_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "GET, OPTIONS")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_registry_domain::entities::patient as domain;
    use clinic_registry_domain::testing::MockPatientService;

    fn service(mock: MockPatientService) -> State<PatientService> {
        State(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_create_patient_returns_created() {
        let request = CreatePatientRequest {
            name: "Jane Doe".to_string(),
            age: 34,
            health: "stable".to_string(),
        };

        let (status, Json(body)) = create_patient(service(MockPatientService::new()), Ok(Json(request)))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, CreatedResponse::new(1, "Patient created successfully"));
    }

    #[tokio::test]
    async fn test_get_patient_found_and_missing() {
        let mock = MockPatientService::new().with_patient(domain::Patient {
            id: 3,
            name: "John Roe".to_string(),
            age: 51,
            health: "recovering".to_string(),
        });
        let state: PatientService = Arc::new(mock);

        let Json(patient) = get_patient(State(state.clone()), Ok(Path(3))).await.unwrap();
        assert_eq!(patient.name, "John Roe");

        let err = get_patient(State(state), Ok(Path(4))).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let request = CreatePatientRequest {
            name: "Jane Doe".to_string(),
            age: 34,
            health: "stable".to_string(),
        };

        let err = create_patient(
            service(MockPatientService::new().with_storage_failure()),
            Ok(Json(request)),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "internal_error");
    }
}
