use std::path::Path;

use serde::Deserialize;

/// Default number of rows returned by list and search operations
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    // Database connection pool settings
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub db_idle_timeout_secs: u64,
    pub db_max_lifetime_secs: u64,
    /// Row limit used when a caller doesn't supply one
    pub default_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost:5432/lightbnb".to_string(),
            db_max_connections: 20,
            db_min_connections: 1,
            db_acquire_timeout_secs: 30,
            db_idle_timeout_secs: 600,  // 10 minutes
            db_max_lifetime_secs: 1800, // 30 minutes
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// `DATABASE_URL` wins when set. Otherwise the URL is assembled from the
    /// `POSTG_HOST`, `POSTG_PORT`, `POSTG_USER`, `POSTG_PASSWORD` and
    /// `POSTG_DATABASE` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            database_url: lookup("DATABASE_URL")
                .or_else(|| database_url_from_parts(&lookup))
                .unwrap_or(defaults.database_url),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_max_connections),
            db_min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_min_connections),
            db_acquire_timeout_secs: lookup("DB_ACQUIRE_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_acquire_timeout_secs),
            db_idle_timeout_secs: lookup("DB_IDLE_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_idle_timeout_secs),
            db_max_lifetime_secs: lookup("DB_MAX_LIFETIME_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.db_max_lifetime_secs),
            default_limit: lookup("DEFAULT_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_limit),
        }
    }

    /// Parse configuration from TOML; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&contents).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.database_url.starts_with("postgres://")
            && !self.database_url.starts_with("postgresql://")
        {
            return Err("DATABASE_URL must start with postgres:// or postgresql://".to_string());
        }

        if self.db_max_connections == 0 {
            return Err("DB_MAX_CONNECTIONS must be at least 1".to_string());
        }

        if self.db_min_connections > self.db_max_connections {
            return Err("DB_MIN_CONNECTIONS cannot exceed DB_MAX_CONNECTIONS".to_string());
        }

        if self.default_limit < 1 {
            return Err("DEFAULT_LIMIT must be a positive integer".to_string());
        }

        Ok(())
    }
}

fn database_url_from_parts<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("POSTG_HOST");
    let database = lookup("POSTG_DATABASE");
    if host.is_none() && database.is_none() {
        return None;
    }

    let host = host.unwrap_or_else(|| "localhost".to_string());
    let database = database.unwrap_or_else(|| "lightbnb".to_string());
    let port = lookup("POSTG_PORT").unwrap_or_else(|| "5432".to_string());
    let credentials = match (lookup("POSTG_USER"), lookup("POSTG_PASSWORD")) {
        (Some(user), Some(password)) => format!("{}:{}@", user, password),
        (Some(user), None) => format!("{}@", user),
        _ => String::new(),
    };

    Some(format!(
        "postgres://{}{}:{}/{}",
        credentials, host, port, database
    ))
}
