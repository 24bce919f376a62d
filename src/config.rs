//! Application configuration.
//!
//! Configuration comes from the environment: `DATABASE_URL` selects
//! the store, `BIND_ADDR` the listen address, and `APP_ENV` the
//! runtime environment (`development` or `production`).

use std::env;

/// Runtime environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    /// Local development (the default).
    #[default]
    Development,
    /// Production deployment.
    Production,
}

impl AppEnv {
    fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Runtime environment.
    pub env: AppEnv,
}

impl AppConfig {
    /// Local development database default.
    pub const DEV_DATABASE_URL: &'static str = "postgresql://localhost/todos";

    /// Default bind address.
    pub const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:3000";

    /// Reads configuration from the environment.
    ///
    /// In development a missing `DATABASE_URL` falls back to the local
    /// default; in production it is required.
    ///
    /// # Errors
    ///
    /// Returns an error when `APP_ENV=production` and `DATABASE_URL`
    /// is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let app_env = AppEnv::from_env();
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) if app_env == AppEnv::Development => Self::DEV_DATABASE_URL.to_string(),
            Err(_) => anyhow::bail!("DATABASE_URL must be set in production"),
        };
        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| Self::DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url,
            bind_addr,
            env: app_env,
        })
    }
}
