use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use clinic_registry_domain::health::{
    ComponentStatus as DomainComponentStatus, HealthComponent as DomainHealthComponent,
    HealthServiceTrait, SystemStatus,
};

/// Health check response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok" or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// RFC 3339 timestamp of when the response was generated
    pub timestamp: String,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment name
    pub environment: String,
}

/// Status of individual system components
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Database connection status
    pub database: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok" or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Environment name reported by the health endpoint
#[derive(Debug, Clone)]
pub struct AppEnvironment(pub String);

/// Health service type for dependency injection
pub type HealthService = Arc<dyn HealthServiceTrait>;

static SERVER_START_TIME: OnceCell<DateTime<Utc>> = OnceCell::new();

/// Record the server start time; later calls keep the first value
pub fn initialize_server_start_time() {
    SERVER_START_TIME.get_or_init(Utc::now);
}

/// Health check endpoint to verify the API and its database are running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 503, description = "API is not healthy", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip_all)]
pub async fn health_check(
    Extension(health_service): Extension<HealthService>,
    Extension(environment): Extension<AppEnvironment>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = Utc::now();
    let uptime = SERVER_START_TIME
        .get()
        .map(|start| (now - *start).num_seconds().max(0) as u64);

    let system_health = health_service.get_system_health().await;

    let component = |name: &str| {
        let component = system_health.components.get(name);
        ComponentHealthStatus {
            status: map_component_status(component),
            message: component.and_then(|c| c.details.clone()),
        }
    };

    let response = HealthResponse {
        status: match system_health.status {
            SystemStatus::Healthy => "ok",
            SystemStatus::Unhealthy => "error",
        }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now.to_rfc3339(),
        uptime,
        components: ComponentStatus {
            database: component("database"),
            api: component("api"),
        },
        environment: environment.0,
    };

    match system_health.status {
        SystemStatus::Healthy => (StatusCode::OK, Json(response)),
        SystemStatus::Unhealthy => {
            warn!("Health check reports an unhealthy system");
            (StatusCode::SERVICE_UNAVAILABLE, Json(response))
        }
    }
}

/// Map domain component status to API status string
fn map_component_status(component: Option<&DomainHealthComponent>) -> String {
    match component.map(|c| &c.status) {
        Some(DomainComponentStatus::Healthy) => "ok",
        Some(DomainComponentStatus::Unhealthy) => "error",
        None => "unknown",
    }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_registry_domain::testing::MockHealthService;

    fn environment() -> Extension<AppEnvironment> {
        Extension(AppEnvironment("test".to_string()))
    }

    #[tokio::test]
    async fn test_healthy_service_returns_ok() {
        initialize_server_start_time();
        let service: HealthService = Arc::new(MockHealthService::new());

        let response = health_check(Extension(service), environment()).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unhealthy_database_returns_service_unavailable() {
        let service: HealthService = Arc::new(MockHealthService::new().with_unhealthy_database());

        let response = health_check(Extension(service), environment()).await.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
