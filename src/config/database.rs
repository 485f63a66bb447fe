use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Connection settings for the single Postgres database this service
/// talks to. The pool built from these is created once in `main` and
/// shared by every handler for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(Self {
            // No default: refusing to boot beats pointing at the wrong database
            url: cfg.get_string("DATABASE_URL")?,
            max_connections: cfg.get_int("DATABASE_MAX_CONNECTIONS").unwrap_or(10) as u32,
            acquire_timeout_secs: cfg.get_int("DATABASE_ACQUIRE_TIMEOUT_SECS").unwrap_or(5) as u64,
        })
    }

    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .connect(&self.url)
            .await
    }
}

/// Apply pending migrations at process start, before the router is built
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
}
