use rusqlite::{params, OptionalExtension};
use tracing::{debug, info};

use crate::database::{Database, SqliteBackend};
use crate::models::{Doctor, NewDoctor, NewPatient, Patient};
use super::errors::RepositoryError;

const SQLITE_INSERT_PATIENT: &str =
    "INSERT INTO patients (name, age, health) VALUES (?1, ?2, ?3) RETURNING id";
const SQLITE_SELECT_PATIENT: &str =
    "SELECT id, name, age, health FROM patients WHERE id = ?1";
const SQLITE_INSERT_DOCTOR: &str =
    "INSERT INTO doctors (name, specialty, experience) VALUES (?1, ?2, ?3) RETURNING id";
const SQLITE_SELECT_DOCTOR: &str =
    "SELECT id, name, specialty, experience FROM doctors WHERE id = ?1";

#[cfg(feature = "postgres")]
const PG_INSERT_PATIENT: &str =
    "INSERT INTO patients (name, age, health) VALUES ($1, $2, $3) RETURNING id";
#[cfg(feature = "postgres")]
const PG_SELECT_PATIENT: &str =
    "SELECT id, name, age, health FROM patients WHERE id = $1";
#[cfg(feature = "postgres")]
const PG_INSERT_DOCTOR: &str =
    "INSERT INTO doctors (name, specialty, experience) VALUES ($1, $2, $3) RETURNING id";
#[cfg(feature = "postgres")]
const PG_SELECT_DOCTOR: &str =
    "SELECT id, name, specialty, experience FROM doctors WHERE id = $1";

/// Storage gateway: one connection, one statement, one row per call
pub struct DatabaseStorage;

impl DatabaseStorage {
    /// Insert a patient and return the generated id
    pub async fn insert_patient(db: &Database, patient: &NewPatient) -> Result<i64, RepositoryError> {
        debug!("Inserting patient into database");

        let id = match db {
            Database::Sqlite(backend) => {
                let patient = patient.clone();
                with_sqlite(backend, move |conn| {
                    conn.query_row(
                        SQLITE_INSERT_PATIENT,
                        params![patient.name, patient.age, patient.health],
                        |row| row.get(0),
                    )
                }).await?
            },

            #[cfg(feature = "postgres")]
            Database::PostgreSQL(backend) => {
                let client = backend.client().await?;
                let row = client.query_one(
                    PG_INSERT_PATIENT,
                    &[&patient.name, &patient.age, &patient.health],
                ).await?;
                row.try_get(0)?
            },
        };

        info!("Inserted a single patient {}", id);
        Ok(id)
    }

    /// Look up a patient by id
    pub async fn get_patient(db: &Database, id: i64) -> Result<Option<Patient>, RepositoryError> {
        debug!("Getting patient by ID from database: id={}", id);

        let patient = match db {
            Database::Sqlite(backend) => {
                with_sqlite(backend, move |conn| {
                    conn.query_row(SQLITE_SELECT_PATIENT, [id], |row| {
                        Ok(Patient {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            age: row.get(2)?,
                            health: row.get(3)?,
                        })
                    }).optional()
                }).await?
            },

            #[cfg(feature = "postgres")]
            Database::PostgreSQL(backend) => {
                let client = backend.client().await?;
                match client.query_opt(PG_SELECT_PATIENT, &[&id]).await? {
                    Some(row) => Some(Patient {
                        id: row.try_get(0)?,
                        name: row.try_get(1)?,
                        age: row.try_get(2)?,
                        health: row.try_get(3)?,
                    }),
                    None => None,
                }
            },
        };

        if patient.is_none() {
            debug!("No patient row with id={}", id);
        }

        Ok(patient)
    }

    /// Insert a doctor and return the generated id
    pub async fn insert_doctor(db: &Database, doctor: &NewDoctor) -> Result<i64, RepositoryError> {
        debug!("Inserting doctor into database");

        let id = match db {
            Database::Sqlite(backend) => {
                let doctor = doctor.clone();
                with_sqlite(backend, move |conn| {
                    conn.query_row(
                        SQLITE_INSERT_DOCTOR,
                        params![doctor.name, doctor.specialty, doctor.experience],
                        |row| row.get(0),
                    )
                }).await?
            },

            #[cfg(feature = "postgres")]
            Database::PostgreSQL(backend) => {
                let client = backend.client().await?;
                let row = client.query_one(
                    PG_INSERT_DOCTOR,
                    &[&doctor.name, &doctor.specialty, &doctor.experience],
                ).await?;
                row.try_get(0)?
            },
        };

        info!("Inserted a single doctor {}", id);
        Ok(id)
    }

    /// Look up a doctor by id
    pub async fn get_doctor(db: &Database, id: i64) -> Result<Option<Doctor>, RepositoryError> {
        debug!("Getting doctor by ID from database: id={}", id);

        let doctor = match db {
            Database::Sqlite(backend) => {
                with_sqlite(backend, move |conn| {
                    conn.query_row(SQLITE_SELECT_DOCTOR, [id], |row| {
                        Ok(Doctor {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            specialty: row.get(2)?,
                            experience: row.get(3)?,
                        })
                    }).optional()
                }).await?
            },

            #[cfg(feature = "postgres")]
            Database::PostgreSQL(backend) => {
                let client = backend.client().await?;
                match client.query_opt(PG_SELECT_DOCTOR, &[&id]).await? {
                    Some(row) => Some(Doctor {
                        id: row.try_get(0)?,
                        name: row.try_get(1)?,
                        specialty: row.try_get(2)?,
                        experience: row.try_get(3)?,
                    }),
                    None => None,
                }
            },
        };

        if doctor.is_none() {
            debug!("No doctor row with id={}", id);
        }

        Ok(doctor)
    }
}

/// Run one SQLite operation on the blocking pool.
///
/// The connection is acquired inside the task and released (returned to the pool,
/// or closed for per-call connections) before the result is handed back.
async fn with_sqlite<T, F>(backend: &SqliteBackend, op: F) -> Result<T, RepositoryError>
where
    T: Send + 'static,
    F: FnOnce(&rusqlite::Connection) -> rusqlite::Result<T> + Send + 'static,
{
    let backend = backend.clone();

    tokio::task::spawn_blocking(move || -> Result<T, RepositoryError> {
        let conn = backend.acquire()?;
        let value = op(&*conn)?;
        Ok(value)
    })
    .await?
}
