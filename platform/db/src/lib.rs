//! Database primitives: pool alias, settings and connection setup.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use thiserror::Error;
use tracing::info;

/// Shared connection pool. Cloning is cheap and hands out the same pool.
pub type DbPool = DatabaseConnection;

const URL_ENV: &str = "DATABASE_URL";
const MAX_CONNECTIONS_ENV: &str = "DATABASE_MAX_CONNECTIONS";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database url missing (set DATABASE_URL)")]
    MissingUrl,
    #[error(transparent)]
    Store(#[from] DbErr),
}

pub type DbResult<T> = Result<T, DbError>;

/// Environment-driven connection settings.
#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    url: Option<String>,
    max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`. Unparseable pool
    /// sizes fall back to the default.
    pub fn from_env() -> Self {
        let url = std::env::var(URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());
        let max_connections = std::env::var(MAX_CONNECTIONS_ENV)
            .ok()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        Self {
            url,
            max_connections,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    pub fn database_url(&self) -> DbResult<&str> {
        self.url.as_deref().ok_or(DbError::MissingUrl)
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

/// Open the shared pool described by `settings`.
pub async fn connect(settings: &DatabaseSettings) -> DbResult<DbPool> {
    let url = settings.database_url()?;
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(settings.max_connections)
        .sqlx_logging(false);
    let pool = Database::connect(options).await?;
    info!(max_connections = settings.max_connections, "database pool ready");
    Ok(pool)
}
