use std::sync::Arc;

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument};

use clinic_registry_domain::services::DoctorServiceTrait;

use crate::api::errors::ApiError;
use crate::entities::common::CreatedResponse;
use crate::entities::doctor::{CreateDoctorRequest, Doctor};

pub type DoctorService = Arc<dyn DoctorServiceTrait>;

/// Register a new doctor
#[utoipa::path(
    post,
    path = "/api/newdoctor",
    request_body = CreateDoctorRequest,
    responses(
        (status = 201, description = "Doctor created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON body", body = crate::entities::common::ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = crate::entities::common::ErrorResponse),
        (status = 422, description = "Body has the wrong shape", body = crate::entities::common::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::entities::common::ErrorResponse),
    ),
    tag = "doctors"
)]
#[instrument(skip(service, payload))]
pub async fn create_doctor(
    State(service): State<DoctorService>,
    payload: Result<Json<CreateDoctorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(request) = payload?;

    let doctor = service.create_doctor(request.into()).await?;
    info!("Doctor created with ID: {}", doctor.id);

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(doctor.id, "Doctor created successfully")),
    ))
}

/// Get a single doctor by ID
#[utoipa::path(
    get,
    path = "/api/doctor/{id}",
    params(
        ("id" = i64, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Doctor found", body = Doctor),
        (status = 400, description = "ID is not an integer", body = crate::entities::common::ErrorResponse),
        (status = 404, description = "Doctor not found", body = crate::entities::common::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::entities::common::ErrorResponse),
    ),
    tag = "doctors"
)]
#[instrument(skip(service, id))]
pub async fn get_doctor(
    State(service): State<DoctorService>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Doctor>, ApiError> {
    let Path(id) = id?;
    info!("Fetching doctor with ID: {}", id);

    Ok(Json(service.get_doctor(id).await?.into()))
}

pub async fn create_doctor_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "POST, OPTIONS")])
}

pub async fn get_doctor_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "GET, OPTIONS")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_registry_domain::entities::doctor as domain;
    use clinic_registry_domain::testing::MockDoctorService;

    fn house() -> CreateDoctorRequest {
        CreateDoctorRequest {
            name: "Gregory House".to_string(),
            specialty: "Diagnostics".to_string(),
            experience: 20,
        }
    }

    #[tokio::test]
    async fn test_create_doctor_returns_created() {
        let state: DoctorService = Arc::new(MockDoctorService::new());

        let (status, Json(body)) = create_doctor(State(state), Ok(Json(house()))).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, CreatedResponse::new(1, "Doctor created successfully"));
    }

    #[tokio::test]
    async fn test_get_doctor_found_and_missing() {
        let state: DoctorService = Arc::new(MockDoctorService::new().with_doctor(domain::Doctor {
            id: 8,
            name: "Meredith Grey".to_string(),
            specialty: "Surgery".to_string(),
            experience: 12,
        }));

        let Json(doctor) = get_doctor(State(state.clone()), Ok(Path(8))).await.unwrap();
        assert_eq!(doctor.specialty, "Surgery");
        assert_eq!(doctor.experience, 12);

        let err = get_doctor(State(state), Ok(Path(9))).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let state: DoctorService = Arc::new(MockDoctorService::new().with_storage_failure());

        let err = create_doctor(State(state), Ok(Json(house()))).await.unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "internal_error");
    }

    #[tokio::test]
    async fn test_options_handlers_list_allowed_methods() {
        let response = create_doctor_options().await.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()[header::ALLOW], "POST, OPTIONS");

        let response = get_doctor_options().await.into_response();
        assert_eq!(response.headers()[header::ALLOW], "GET, OPTIONS");
    }
}
