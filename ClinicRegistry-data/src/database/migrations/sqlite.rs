use rusqlite::Connection;
use tracing::{debug, info};

use crate::database::DatabaseError;

/// Create the SQLite tables if they do not exist yet
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    info!("Running SQLite migrations");

    create_patients_table(conn)?;
    create_doctors_table(conn)?;

    debug!("SQLite migrations completed");
    Ok(())
}

/// Create the patients table
///
/// AUTOINCREMENT keeps ids monotonic and never reuses the id of a removed row.
fn create_patients_table(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Creating patients table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS patients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            health TEXT NOT NULL
        )",
        [],
    ).map_err(|e| DatabaseError::SchemaError(format!("Failed to create patients table: {}", e)))?;

    Ok(())
}

/// Create the doctors table
fn create_doctors_table(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Creating doctors table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS doctors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            specialty TEXT NOT NULL,
            experience INTEGER NOT NULL
        )",
        [],
    ).map_err(|e| DatabaseError::SchemaError(format!("Failed to create doctors table: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get::<_, String>(0))
            .unwrap()
            .map(|name| name.unwrap())
            .collect()
    }

    #[test]
    fn test_migrations_create_tables() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let tables = table_names(&conn);
        assert!(tables.contains(&"patients".to_string()));
        assert!(tables.contains(&"doctors".to_string()));
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        conn.execute(
            "INSERT INTO patients (name, age, health) VALUES ('Existing', 50, 'fine')",
            [],
        ).unwrap();

        // Running again must keep existing rows
        run_migrations(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
