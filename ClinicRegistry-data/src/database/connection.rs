//! Database connection module for the ClinicRegistry service
//!
//! This module provides database connectivity for two backends:
//! - SQLite (default)
//! - PostgreSQL (optional, `postgres` feature)
//!
//! Both backends honour a [`ConnectionPolicy`]: connections are either handed out
//! by a pool or opened fresh for a single call and closed when the call returns.

use std::fmt;
use std::fs;
use std::ops::Deref;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::migrations;

/// Default location of the SQLite database file
pub const DEFAULT_SQLITE_PATH: &str = "data/clinic_registry.db";

/// Path value that selects an in-memory SQLite database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// SQLite database (file-based or in-memory)
    Sqlite,
    /// PostgreSQL database
    #[cfg(feature = "postgres")]
    PostgreSQL,
}

impl FromStr for DatabaseType {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(DatabaseType::Sqlite),
            #[cfg(feature = "postgres")]
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSQL),
            _ => Err(DatabaseError::UnsupportedDatabaseType(s.to_string())),
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseType::Sqlite => write!(f, "sqlite"),
            #[cfg(feature = "postgres")]
            DatabaseType::PostgreSQL => write!(f, "postgres"),
        }
    }
}

/// How connections are acquired for each storage call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionPolicy {
    /// Reuse connections from a bounded pool
    #[default]
    Pooled,
    /// Open a new connection for every call and close it before returning
    PerCall,
}

impl FromStr for ConnectionPolicy {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pooled" | "pool" => Ok(ConnectionPolicy::Pooled),
            "per_call" | "per-call" | "percall" => Ok(ConnectionPolicy::PerCall),
            other => Err(DatabaseError::ConfigError(format!(
                "Unknown connection policy '{}', expected 'pooled' or 'per_call'",
                other
            ))),
        }
    }
}

impl fmt::Display for ConnectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionPolicy::Pooled => write!(f, "pooled"),
            ConnectionPolicy::PerCall => write!(f, "per_call"),
        }
    }
}

/// Database error
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Required environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// Invalid configuration value
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Unsupported database type
    #[error("Unsupported database type: {0}")]
    UnsupportedDatabaseType(String),

    /// SQLite error
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// SQLite connection pool error
    #[error("SQLite connection pool error: {0}")]
    SqlitePoolError(#[from] r2d2::Error),

    /// PostgreSQL error
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    PostgresError(#[from] tokio_postgres::Error),

    /// PostgreSQL connection pool error
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL connection pool error: {0}")]
    PostgresPoolError(String),

    /// Schema bootstrap error
    #[error("Database schema error: {0}")]
    SchemaError(String),

    /// Filesystem error while preparing the database location
    #[error("Database I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic database error
    #[error("Database error: {0}")]
    GenericError(String),
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database type (sqlite, postgres)
    pub db_type: DatabaseType,
    /// Connection string for PostgreSQL
    pub connection_string: Option<String>,
    /// Path to the SQLite database file, or `:memory:`
    pub sqlite_path: String,
    /// Pooled or per-call connections
    pub policy: ConnectionPolicy,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Connection acquisition timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DatabaseType::Sqlite,
            connection_string: None,
            sqlite_path: DEFAULT_SQLITE_PATH.to_string(),
            policy: ConnectionPolicy::Pooled,
            max_connections: 10,
            timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for a private in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            sqlite_path: IN_MEMORY_PATH.to_string(),
            ..Self::default()
        }
    }

    /// Configuration for a SQLite database file
    pub fn sqlite_file(path: impl Into<String>, policy: ConnectionPolicy) -> Self {
        Self {
            sqlite_path: path.into(),
            policy,
            ..Self::default()
        }
    }

    /// Create a new database configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Recognised keys: `DB_TYPE`, `DB_SQLITE_PATH`, `DB_CONNECTION` (or `POSTGRES_URL`),
    /// `DB_POOL_MODE`, `DB_MAX_CONNECTIONS`, `DB_TIMEOUT_SECONDS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_type = match lookup("DB_TYPE") {
            Some(raw) => raw.parse::<DatabaseType>()?,
            None => defaults.db_type,
        };

        let policy = match lookup("DB_POOL_MODE") {
            Some(raw) => raw.parse::<ConnectionPolicy>()?,
            None => defaults.policy,
        };

        let config = DatabaseConfig {
            db_type,
            connection_string: lookup("DB_CONNECTION").or_else(|| lookup("POSTGRES_URL")),
            sqlite_path: lookup("DB_SQLITE_PATH").unwrap_or(defaults.sqlite_path),
            policy,
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            timeout_seconds: parse_var(&lookup, "DB_TIMEOUT_SECONDS", defaults.timeout_seconds)?,
        };

        config.validate()?;

        info!(
            "Database configuration: type={}, policy={}, max_connections={}, timeout={}s",
            config.db_type, config.policy, config.max_connections, config.timeout_seconds
        );

        Ok(config)
    }

    /// Check that the settings can produce a working connection
    pub fn validate(&self) -> Result<(), DatabaseError> {
        if self.max_connections == 0 {
            return Err(DatabaseError::ConfigError(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        match self.db_type {
            DatabaseType::Sqlite => {
                if self.is_in_memory() && self.policy == ConnectionPolicy::PerCall {
                    // A fresh in-memory connection is a fresh, empty database
                    return Err(DatabaseError::ConfigError(
                        "per_call connections cannot be used with an in-memory SQLite database".to_string(),
                    ));
                }
            }
            #[cfg(feature = "postgres")]
            DatabaseType::PostgreSQL => {
                if self.connection_string.is_none() {
                    return Err(DatabaseError::EnvVarNotFound("DB_CONNECTION".to_string()));
                }
            }
        }

        Ok(())
    }

    /// Whether the SQLite path selects an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.sqlite_path.trim() == IN_MEMORY_PATH
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T, DatabaseError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            DatabaseError::ConfigError(format!("{} has an invalid value '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}

/// Handle to the configured database, cheap to clone and share between requests
#[derive(Clone)]
pub enum Database {
    /// SQLite backend
    Sqlite(SqliteBackend),

    /// PostgreSQL backend
    #[cfg(feature = "postgres")]
    PostgreSQL(PostgresBackend),
}

impl Database {
    /// Open the database described by `config` and make sure the tables exist
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        config.validate()?;

        info!("Opening {} database with {} connections", config.db_type, config.policy);

        match config.db_type {
            DatabaseType::Sqlite => Ok(Database::Sqlite(SqliteBackend::open(config)?)),
            #[cfg(feature = "postgres")]
            DatabaseType::PostgreSQL => Ok(Database::PostgreSQL(PostgresBackend::open(config).await?)),
        }
    }

    /// Backend type of this database
    pub fn db_type(&self) -> DatabaseType {
        match self {
            Database::Sqlite(_) => DatabaseType::Sqlite,
            #[cfg(feature = "postgres")]
            Database::PostgreSQL(_) => DatabaseType::PostgreSQL,
        }
    }

    /// Connection policy in effect
    pub fn policy(&self) -> ConnectionPolicy {
        match self {
            Database::Sqlite(SqliteBackend::Pooled { .. }) => ConnectionPolicy::Pooled,
            Database::Sqlite(SqliteBackend::PerCall { .. }) => ConnectionPolicy::PerCall,
            #[cfg(feature = "postgres")]
            Database::PostgreSQL(PostgresBackend::Pooled(_)) => ConnectionPolicy::Pooled,
            #[cfg(feature = "postgres")]
            Database::PostgreSQL(PostgresBackend::PerCall(_)) => ConnectionPolicy::PerCall,
        }
    }

    /// Run a trivial statement to verify the database answers
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        match self {
            Database::Sqlite(backend) => {
                let backend = backend.clone();
                tokio::task::spawn_blocking(move || -> Result<(), DatabaseError> {
                    let conn = backend.acquire()?;
                    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
                    Ok(())
                })
                .await
                .map_err(|e| DatabaseError::GenericError(format!("Ping task failed: {}", e)))?
            }
            #[cfg(feature = "postgres")]
            Database::PostgreSQL(backend) => {
                let client = backend.client().await?;
                client.execute("SELECT 1", &[]).await?;
                Ok(())
            }
        }
    }

    /// Human readable description of the connection, used by health checks
    pub fn describe(&self) -> String {
        match self {
            Database::Sqlite(SqliteBackend::Pooled { pool, path }) => {
                let state = pool.state();
                let location = if path == IN_MEMORY_PATH {
                    "SQLite in-memory database".to_string()
                } else {
                    format!("SQLite database at {}", path)
                };
                format!(
                    "{} (pooled, connections: active={}, idle={})",
                    location, state.connections, state.idle_connections
                )
            }
            Database::Sqlite(SqliteBackend::PerCall { path, .. }) => {
                format!("SQLite database at {} (per_call)", path.display())
            }
            #[cfg(feature = "postgres")]
            Database::PostgreSQL(PostgresBackend::Pooled(pool)) => {
                let status = pool.status();
                format!(
                    "PostgreSQL database (pooled, size={}, available={})",
                    status.size, status.available
                )
            }
            #[cfg(feature = "postgres")]
            Database::PostgreSQL(PostgresBackend::PerCall(_)) => {
                "PostgreSQL database (per_call)".to_string()
            }
        }
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("type", &self.db_type())
            .field("policy", &self.policy())
            .finish()
    }
}

/// SQLite connection source
#[derive(Clone)]
pub enum SqliteBackend {
    /// r2d2 pool of open connections
    Pooled {
        pool: r2d2::Pool<SqliteConnectionManager>,
        path: String,
    },
    /// Open the file for every call
    PerCall {
        path: PathBuf,
        timeout: Duration,
    },
}

impl SqliteBackend {
    fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let timeout = config.timeout();

        if config.is_in_memory() {
            return Self::open_in_memory(config);
        }

        let path = PathBuf::from(config.sqlite_path.trim());
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent)?;
            }
        }

        info!("Initializing SQLite database at: {}", path.display());

        let backend = match config.policy {
            ConnectionPolicy::Pooled => {
                let manager = SqliteConnectionManager::file(&path)
                    .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE)
                    .with_init(move |conn| conn.busy_timeout(timeout));

                let pool = r2d2::Pool::builder()
                    .max_size(config.max_connections)
                    .connection_timeout(timeout)
                    .build(manager)?;

                SqliteBackend::Pooled {
                    pool,
                    path: path.display().to_string(),
                }
            }
            ConnectionPolicy::PerCall => SqliteBackend::PerCall { path, timeout },
        };

        let conn = backend.acquire()?;
        migrations::run_sqlite_migrations(&conn)?;

        info!("SQLite database ready");
        Ok(backend)
    }

    fn open_in_memory(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        info!("Initializing in-memory SQLite database");

        // Every in-memory connection is a separate database, so the pool keeps exactly one alive
        if config.max_connections > 1 {
            warn!(
                "In-memory SQLite database is limited to one connection (requested {})",
                config.max_connections
            );
        }

        let pool = r2d2::Pool::builder()
            .max_size(1)
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_timeout(config.timeout())
            .build(SqliteConnectionManager::memory())?;

        let conn = pool.get()?;
        migrations::run_sqlite_migrations(&conn)?;

        Ok(SqliteBackend::Pooled {
            pool,
            path: IN_MEMORY_PATH.to_string(),
        })
    }

    /// Get a connection according to the policy. Blocking.
    pub fn acquire(&self) -> Result<SqliteConnection, DatabaseError> {
        match self {
            SqliteBackend::Pooled { pool, .. } => Ok(SqliteConnection::Pooled(pool.get()?)),
            SqliteBackend::PerCall { path, timeout } => {
                debug!("Opening SQLite connection for a single call: {}", path.display());
                let conn = rusqlite::Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
                )?;
                conn.busy_timeout(*timeout)?;
                Ok(SqliteConnection::Owned(conn))
            }
        }
    }
}

/// A SQLite connection that is either returned to the pool or closed on drop
pub enum SqliteConnection {
    Pooled(r2d2::PooledConnection<SqliteConnectionManager>),
    Owned(rusqlite::Connection),
}

impl Deref for SqliteConnection {
    type Target = rusqlite::Connection;

    fn deref(&self) -> &rusqlite::Connection {
        match self {
            SqliteConnection::Pooled(conn) => conn,
            SqliteConnection::Owned(conn) => conn,
        }
    }
}

/// PostgreSQL connection source
#[cfg(feature = "postgres")]
#[derive(Clone)]
pub enum PostgresBackend {
    /// deadpool pool of clients
    Pooled(deadpool_postgres::Pool),
    /// Connect for every call
    PerCall(tokio_postgres::Config),
}

#[cfg(feature = "postgres")]
impl PostgresBackend {
    async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};

        let connection_string = config.connection_string
            .as_ref()
            .ok_or_else(|| DatabaseError::EnvVarNotFound("DB_CONNECTION".to_string()))?;

        let pg_config = tokio_postgres::Config::from_str(connection_string)
            .map_err(|e| DatabaseError::ConfigError(format!("Invalid PostgreSQL connection string: {}", e)))?;

        let backend = match config.policy {
            ConnectionPolicy::Pooled => {
                let manager = Manager::from_config(
                    pg_config,
                    tokio_postgres::NoTls,
                    ManagerConfig { recycling_method: RecyclingMethod::Fast },
                );
                let pool = Pool::builder(manager)
                    .max_size(config.max_connections as usize)
                    .wait_timeout(Some(config.timeout()))
                    .runtime(Runtime::Tokio1)
                    .build()
                    .map_err(|e| DatabaseError::PostgresPoolError(format!("Failed to create PostgreSQL pool: {}", e)))?;
                PostgresBackend::Pooled(pool)
            }
            ConnectionPolicy::PerCall => PostgresBackend::PerCall(pg_config),
        };

        let client = backend.client().await?;
        migrations::run_postgres_migrations(&client).await?;

        info!("PostgreSQL database ready");
        Ok(backend)
    }

    /// Get a client according to the policy
    pub async fn client(&self) -> Result<PostgresClient, DatabaseError> {
        match self {
            PostgresBackend::Pooled(pool) => {
                let client = pool.get()
                    .await
                    .map_err(|e| DatabaseError::PostgresPoolError(e.to_string()))?;
                Ok(PostgresClient::Pooled(client))
            }
            PostgresBackend::PerCall(pg_config) => {
                debug!("Opening PostgreSQL connection for a single call");
                let (client, connection) = pg_config.connect(tokio_postgres::NoTls).await?;

                // The connection task ends once the client is dropped
                tokio::spawn(async move {
                    if let Err(e) = connection.await {
                        warn!("PostgreSQL connection closed with error: {}", e);
                    }
                });

                Ok(PostgresClient::Owned(client))
            }
        }
    }
}

/// A PostgreSQL client that is either returned to the pool or disconnected on drop
#[cfg(feature = "postgres")]
pub enum PostgresClient {
    Pooled(deadpool_postgres::Object),
    Owned(tokio_postgres::Client),
}

#[cfg(feature = "postgres")]
impl Deref for PostgresClient {
    type Target = tokio_postgres::Client;

    fn deref(&self) -> &tokio_postgres::Client {
        match self {
            PostgresClient::Pooled(client) => client,
            PostgresClient::Owned(client) => client,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.db_type, DatabaseType::Sqlite);
        assert_eq!(config.sqlite_path, DEFAULT_SQLITE_PATH);
        assert_eq!(config.policy, ConnectionPolicy::Pooled);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_database_type_from_str() {
        assert_eq!("sqlite".parse::<DatabaseType>().unwrap(), DatabaseType::Sqlite);
        assert_eq!("SQLite".parse::<DatabaseType>().unwrap(), DatabaseType::Sqlite);

        #[cfg(feature = "postgres")]
        assert_eq!("postgres".parse::<DatabaseType>().unwrap(), DatabaseType::PostgreSQL);

        assert!("unknown".parse::<DatabaseType>().is_err());
    }

    #[test]
    fn test_connection_policy_from_str() {
        assert_eq!("pooled".parse::<ConnectionPolicy>().unwrap(), ConnectionPolicy::Pooled);
        assert_eq!("per_call".parse::<ConnectionPolicy>().unwrap(), ConnectionPolicy::PerCall);
        assert_eq!("per-call".parse::<ConnectionPolicy>().unwrap(), ConnectionPolicy::PerCall);
        assert!("sometimes".parse::<ConnectionPolicy>().is_err());
    }

    #[test]
    fn test_config_from_lookup_uses_defaults() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, DatabaseConfig::default());
    }

    #[test]
    fn test_config_from_lookup_reads_values() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("DB_TYPE", "sqlite"),
            ("DB_SQLITE_PATH", "/tmp/registry.db"),
            ("DB_POOL_MODE", "per_call"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_TIMEOUT_SECONDS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.sqlite_path, "/tmp/registry.db");
        assert_eq!(config.policy, ConnectionPolicy::PerCall);
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_config_accepts_postgres_url_alias() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("POSTGRES_URL", "postgres://clinic@localhost/clinic"),
        ]))
        .unwrap();
        assert_eq!(config.connection_string.as_deref(), Some("postgres://clinic@localhost/clinic"));
    }

    #[test]
    fn test_config_rejects_invalid_numbers() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "lots")]));
        assert!(matches!(result, Err(DatabaseError::ConfigError(_))));

        let result = DatabaseConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")]));
        assert!(matches!(result, Err(DatabaseError::ConfigError(_))));
    }

    #[test]
    fn test_config_rejects_per_call_in_memory() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[
            ("DB_SQLITE_PATH", ":memory:"),
            ("DB_POOL_MODE", "per_call"),
        ]));
        assert!(matches!(result, Err(DatabaseError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_connect_in_memory() {
        let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        assert_eq!(db.db_type(), DatabaseType::Sqlite);
        assert_eq!(db.policy(), ConnectionPolicy::Pooled);
        assert!(db.ping().await.is_ok());
        assert!(db.describe().contains("in-memory"));
    }

    #[tokio::test]
    async fn test_connect_per_call_creates_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("registry.db");
        let config = DatabaseConfig::sqlite_file(path.to_string_lossy(), ConnectionPolicy::PerCall);

        let db = Database::connect(&config).await.unwrap();
        assert!(path.exists());
        assert_eq!(db.policy(), ConnectionPolicy::PerCall);
        assert!(db.ping().await.is_ok());
        assert!(db.describe().contains("per_call"));
    }

    #[tokio::test]
    async fn test_connect_pooled_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.db");
        let config = DatabaseConfig::sqlite_file(path.to_string_lossy(), ConnectionPolicy::Pooled);

        let db = Database::connect(&config).await.unwrap();
        assert!(db.ping().await.is_ok());
        assert!(db.describe().contains("pooled"));
    }
}
