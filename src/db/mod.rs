use secrecy::ExposeSecret;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::{config::Config, errors::AppResult};

const CREATE_ATTENDEE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS attendee (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_PROCTOR_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS proctor (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(config.database_url.expose_secret())
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        log::info!("Connected to PostgreSQL (max {} connections)", config.database_max_connections);

        Ok(Self { pool })
    }

    /// Wraps an existing pool, e.g. one built with `connect_lazy` in tests.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the role tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(CREATE_ATTENDEE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_PROCTOR_TABLE).execute(&self.pool).await?;
        log::info!("Ensured attendee and proctor tables");
        Ok(())
    }

    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        log::info!("Closed PostgreSQL pool");
    }
}
