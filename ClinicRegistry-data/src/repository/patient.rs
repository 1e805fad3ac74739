use async_trait::async_trait;
use tracing::debug;

use crate::database::Database;
use crate::models::{NewPatient, Patient};
use super::errors::RepositoryError;
use super::storage::DatabaseStorage;

/// Repository trait for patients
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait PatientRepositoryTrait: Send + Sync {
    /// Insert a patient and return the stored record with its generated id
    async fn create(&self, patient: NewPatient) -> Result<Patient, RepositoryError>;

    /// Get a patient by id, `None` when no row matches
    async fn get_by_id(&self, id: i64) -> Result<Option<Patient>, RepositoryError>;
}

/// Repository for patients backed by the configured database
#[derive(Debug, Clone)]
pub struct PatientRepository {
    db: Database,
}

impl PatientRepository {
    /// Create a new repository
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PatientRepositoryTrait for PatientRepository {
    async fn create(&self, patient: NewPatient) -> Result<Patient, RepositoryError> {
        let id = DatabaseStorage::insert_patient(&self.db, &patient).await?;
        debug!("Patient stored with id {}", id);
        Ok(patient.into_patient(id))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Patient>, RepositoryError> {
        DatabaseStorage::get_patient(&self.db, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{ConnectionPolicy, DatabaseConfig};
    use std::collections::HashSet;

    fn new_patient(name: &str, age: i32) -> NewPatient {
        NewPatient {
            name: name.to_string(),
            age,
            health: "stable".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = PatientRepository::new(db);

        let created = repo.create(new_patient("Jane Doe", 34)).await.unwrap();
        assert_eq!(created.name, "Jane Doe");
        assert_eq!(created.age, 34);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = PatientRepository::new(db);

        assert_eq!(repo.get_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_the_database() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = PatientRepository::new(db);
        let repo2 = repo.clone();

        let created = repo2.create(new_patient("John Roe", 51)).await.unwrap();
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.db");
        let config = DatabaseConfig::sqlite_file(path.to_string_lossy(), ConnectionPolicy::PerCall);
        let repo = PatientRepository::new(Database::connect(&config).await.unwrap());

        let creates = (0..20).map(|i| {
            let repo = repo.clone();
            async move { repo.create(new_patient(&format!("Patient {}", i), i)).await }
        });
        let results = futures::future::join_all(creates).await;

        let ids: HashSet<i64> = results.into_iter().map(|r| r.unwrap().id).collect();
        assert_eq!(ids.len(), 20);

        for id in ids {
            assert!(repo.get_by_id(id).await.unwrap().is_some());
        }
    }
}
