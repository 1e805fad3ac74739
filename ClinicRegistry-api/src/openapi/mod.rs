use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Patient endpoints
        crate::api::handlers::patients::create_patient,
        crate::api::handlers::patients::get_patient,

        // Doctor endpoints
        crate::api::handlers::doctors::create_doctor,
        crate::api::handlers::doctors::get_doctor,
    ),
    components(
        schemas(
            // Entities
            crate::entities::patient::Patient,
            crate::entities::patient::CreatePatientRequest,
            crate::entities::doctor::Doctor,
            crate::entities::doctor::CreateDoctorRequest,
            crate::entities::common::CreatedResponse,
            crate::entities::common::ErrorResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "patients", description = "Patient registration and lookup"),
        (name = "doctors", description = "Doctor registration and lookup")
    ),
    info(
        title = "ClinicRegistry API",
        version = "0.1.0",
        description = "REST API for registering and looking up patients and doctors",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
