use async_trait::async_trait;
use tracing::debug;

use crate::database::Database;
use crate::models::{Doctor, NewDoctor};
use super::errors::RepositoryError;
use super::storage::DatabaseStorage;

/// Repository trait for doctors
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DoctorRepositoryTrait: Send + Sync {
    /// Insert a doctor and return the stored record with its generated id
    async fn create(&self, doctor: NewDoctor) -> Result<Doctor, RepositoryError>;

    /// Get a doctor by id, `None` when no row matches
    async fn get_by_id(&self, id: i64) -> Result<Option<Doctor>, RepositoryError>;
}

/// Repository for doctors backed by the configured database
#[derive(Debug, Clone)]
pub struct DoctorRepository {
    db: Database,
}

impl DoctorRepository {
    /// Create a new repository
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorRepositoryTrait for DoctorRepository {
    async fn create(&self, doctor: NewDoctor) -> Result<Doctor, RepositoryError> {
        let id = DatabaseStorage::insert_doctor(&self.db, &doctor).await?;
        debug!("Doctor stored with id {}", id);
        Ok(doctor.into_doctor(id))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Doctor>, RepositoryError> {
        DatabaseStorage::get_doctor(&self.db, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{ConnectionPolicy, DatabaseConfig};

    #[tokio::test]
    async fn test_create_then_get() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        let repo = DoctorRepository::new(db);

        let created = repo.create(NewDoctor {
            name: "Meredith Grey".to_string(),
            specialty: "General Surgery".to_string(),
            experience: 12,
        }).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Meredith Grey");
        assert_eq!(fetched.specialty, "General Surgery");
        assert_eq!(fetched.experience, 12);
    }

    #[tokio::test]
    async fn test_pooled_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctors.db");
        let config = DatabaseConfig::sqlite_file(path.to_string_lossy(), ConnectionPolicy::Pooled);

        let created = {
            let repo = DoctorRepository::new(Database::connect(&config).await.unwrap());
            repo.create(NewDoctor {
                name: "John Carter".to_string(),
                specialty: "Emergency Medicine".to_string(),
                experience: 8,
            }).await.unwrap()
        };

        let reopened = DoctorRepository::new(Database::connect(&config).await.unwrap());
        assert_eq!(reopened.get_by_id(created.id).await.unwrap(), Some(created));
    }
}
