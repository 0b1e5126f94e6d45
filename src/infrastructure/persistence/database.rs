use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info, instrument, warn};

use crate::config::Config;

const CONNECT_RETRIES: u32 = 3;

/// Shared connection pool handle.
///
/// Opened once at startup and handed to every repository; call
/// [`Database::close`] at shutdown.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect with the pool settings from `config`, retrying with
    /// exponential backoff
    #[instrument(skip(config))]
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let mut retries = CONNECT_RETRIES;
        let mut delay = Duration::from_secs(1);

        let pool = loop {
            match Self::pool_options(config)
                .connect(&config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay, retries, e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    error!("Failed to connect to database after retries: {}", e);
                    return Err(e);
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
            config.db_max_connections,
            config.db_min_connections,
            config.db_acquire_timeout_secs,
            config.db_idle_timeout_secs,
            config.db_max_lifetime_secs
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, embedding applications)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool_options(config: &Config) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .min_connections(config.db_min_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
            .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout_secs)))
            .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime_secs)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await.map(|_| ())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
