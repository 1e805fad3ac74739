//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use clinic_registry_data::database::Database;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// At least one component is not functioning
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build the overall status from the component statuses
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the database
    /// Returns a description of the connection when it answers, an error message otherwise
    async fn check_database_status(&self) -> Result<String, String>;
}

/// Ping the database and describe the connection
pub async fn check_database_status(db: &Database) -> Result<String, String> {
    match db.ping().await {
        Ok(()) => Ok(db.describe()),
        Err(e) => {
            warn!("Database health check failed: {}", e);
            Err(format!("Database connection error: {}", e))
        }
    }
}

/// Health service backed by the live database
#[derive(Debug, Clone)]
pub struct HealthService {
    db: Database,
}

impl HealthService {
    /// Create a new health service
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let database = match self.check_database_status().await {
            Ok(description) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: Some(description),
            },
            Err(e) => HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e),
            },
        };

        // The API answering this call is healthy by definition
        let api = HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        };

        SystemHealth::from_components(
            vec![
                ("database".to_string(), database),
                ("api".to_string(), api),
            ].into_iter().collect(),
        )
    }

    async fn check_database_status(&self) -> Result<String, String> {
        check_database_status(&self.db).await
    }
}

/// Factory function to create a health service
pub fn create_health_service(db: Database) -> Arc<dyn HealthServiceTrait> {
    Arc::new(HealthService::new(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_registry_data::database::DatabaseConfig;

    #[tokio::test]
    async fn test_in_memory_database_is_healthy() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        let health = HealthService::new(db).get_system_health().await;

        assert_eq!(health.status, SystemStatus::Healthy);
        let database = &health.components["database"];
        assert_eq!(database.status, ComponentStatus::Healthy);
        assert!(database.details.as_deref().unwrap_or_default().contains("in-memory"));
        assert!(health.components.contains_key("api"));
    }

    #[test]
    fn test_any_unhealthy_component_fails_the_system() {
        let components = vec![
            ("database".to_string(), HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some("down".to_string()),
            }),
            ("api".to_string(), HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            }),
        ].into_iter().collect();

        assert_eq!(SystemHealth::from_components(components).status, SystemStatus::Unhealthy);
    }
}
