use tokio_postgres::Client;
use tracing::{debug, info};

use crate::database::DatabaseError;

/// Create the PostgreSQL tables if they do not exist yet
pub async fn run_migrations(client: &Client) -> Result<(), DatabaseError> {
    info!("Running PostgreSQL migrations");

    create_patients_table(client).await?;
    create_doctors_table(client).await?;

    debug!("PostgreSQL migrations completed");
    Ok(())
}

/// Create the patients table
async fn create_patients_table(client: &Client) -> Result<(), DatabaseError> {
    debug!("Creating patients table if not exists");

    client.execute(
        "CREATE TABLE IF NOT EXISTS patients (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            health TEXT NOT NULL
        )",
        &[],
    ).await.map_err(|e| DatabaseError::SchemaError(format!("Failed to create patients table: {}", e)))?;

    Ok(())
}

/// Create the doctors table
async fn create_doctors_table(client: &Client) -> Result<(), DatabaseError> {
    debug!("Creating doctors table if not exists");

    client.execute(
        "CREATE TABLE IF NOT EXISTS doctors (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            specialty TEXT NOT NULL,
            experience INTEGER NOT NULL
        )",
        &[],
    ).await.map_err(|e| DatabaseError::SchemaError(format!("Failed to create doctors table: {}", e)))?;

    Ok(())
}
