use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from DatabaseManager and the repositories built on its pool
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Owner of the process-wide connection pool.
///
/// Created once at startup and handed to request handlers through the
/// router state; cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Connect eagerly using the configured URL and pool limits
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let url = Self::resolve_url(config)?;
        let pool = Self::pool_options(config).connect(&url).await?;
        info!("Created database pool ({} max connections)", config.max_connections);
        Ok(Self { pool })
    }

    /// Build a pool that only connects when first used
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let url = Self::resolve_url(config)?;
        let pool = Self::pool_options(config).connect_lazy(&url)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }

    fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
    }

    fn resolve_url(config: &DatabaseConfig) -> Result<String, DatabaseError> {
        let raw = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;
        Self::validate_url(raw)
    }

    /// Accept only postgres URLs that name a database
    fn validate_url(raw: &str) -> Result<String, DatabaseError> {
        let url = url::Url::parse(raw).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        if !matches!(url.scheme(), "postgres" | "postgresql") {
            return Err(DatabaseError::InvalidDatabaseUrl);
        }
        if url.path().trim_start_matches('/').is_empty() {
            return Err(DatabaseError::InvalidDatabaseUrl);
        }
        Ok(url.into())
    }
}
