use axum::{
    body::Body,
    extract::{FromRef, State},
    http::{header, HeaderName, HeaderValue, Method, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Extension, Router,
};
use tower::{ServiceBuilder, ServiceExt};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{debug, info_span};
use uuid::Uuid;

use clinic_registry_domain::database::Database;
use clinic_registry_domain::health::create_health_service;
use clinic_registry_domain::services::{create_default_doctor_service, create_default_patient_service};

use crate::api::handlers::{doctors, health, patients};
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Services shared by the API handlers
#[derive(Clone, FromRef)]
pub struct AppState {
    pub patients: patients::PatientService,
    pub doctors: doctors::DoctorService,
}

/// Build the application on top of an open database
pub fn create_application(db: Database, config: &ServerConfig) -> Router {
    let state = AppState {
        patients: create_default_patient_service(db.clone()),
        doctors: create_default_doctor_service(db.clone()),
    };

    create_router(state, create_health_service(db), config)
}

/// Create the application router from already constructed services
pub fn create_router(state: AppState, health_service: health::HealthService, config: &ServerConfig) -> Router {
    debug!("Creating application router");

    let api_routes = Router::new()
        .route(
            "/api/newpatient",
            post(patients::create_patient).options(patients::create_patient_options),
        )
        .route(
            "/api/patient/:id",
            get(patients::get_patient).options(patients::get_patient_options),
        )
        .route(
            "/api/newdoctor",
            post(doctors::create_doctor).options(doctors::create_doctor_options),
        )
        .route(
            "/api/doctor/:id",
            get(doctors::get_doctor).options(doctors::get_doctor_options),
        )
        .with_state(state);

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(health::AppEnvironment(config.environment.clone())));

    let app = Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .merge(configure_swagger_routes());

    debug!("Swagger UI merged");

    health::initialize_server_start_time();

    apply_middleware(app, config)
}

/// Wrap the router with CORS, request ids, tracing and the request timeout
fn apply_middleware(app: Router, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-");

        info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    });

    let stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::new(config.request_timeout()));

    let cors_app = app.clone().layer(build_cors_layer(config));

    app.layer(middleware::from_fn_with_state(cors_app, route_through_cors))
        .layer(stack)
}

/// Whether the request is a CORS preflight rather than a plain OPTIONS
fn is_preflight<B>(request: &Request<B>) -> bool {
    request.method() == Method::OPTIONS
        && request.headers().contains_key(header::ORIGIN)
        && request.headers().contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Plain OPTIONS goes to the route handlers; everything else passes the CORS layer.
///
/// `CorsLayer` answers every OPTIONS request itself.
async fn route_through_cors(
    State(cors_app): State<Router>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS && !is_preflight(&request) {
        return next.run(request).await;
    }

    cors_app
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {})
}

/// Builds the CORS layer based on configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors_origins.trim() == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Generates a UUID v4 for every request without an `x-request-id`
#[derive(Debug, Clone, Copy)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}
