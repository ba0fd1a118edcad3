//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed by
//! value into the server and the admin CLI. Nothing reads the environment
//! after that point.
//!
//! ## Environments
//!
//! `APP_ENV` selects logging defaults:
//!
//! | `APP_ENV` | `RUST_LOG` default | `LOG_FORMAT` default |
//! |-----------|--------------------|----------------------|
//! | `local`   | `debug`            | `text`               |
//! | `dev`     | `debug`            | `json`               |
//! | `prod`    | `info`             | `json`               |
//!
//! An unset `APP_ENV` means `prod`.
//!
//! ## Storage
//!
//! ```bash
//! export DATABASE_URL="sqlite://./storage/storage.db"
//! # or
//! export STORAGE_PATH="./storage/storage.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `STORAGE_PATH`.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Generated alias length (default: 6, range 4-32)
//! - `ALIAS_MAX_ATTEMPTS` - Random alias attempts before giving up (default: 16)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::AliasSettings;

const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        }
    }

    fn default_log_level(&self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    fn default_log_format(&self) -> &'static str {
        match self {
            AppEnv::Local => "text",
            AppEnv::Dev | AppEnv::Prod => "json",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,
    pub database_url: String,
    /// Database file path, set only when `database_url` was built from `STORAGE_PATH`.
    pub storage_path: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`, default: 4).
    pub http_timeout: u64,
    pub alias_length: usize,
    pub alias_max_attempts: u32,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection in seconds (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_ENV` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let env = match env::var("APP_ENV") {
            Ok(value) => value
                .parse::<AppEnv>()
                .context("Failed to parse APP_ENV")?,
            Err(_) => AppEnv::Prod,
        };

        let (database_url, storage_path) = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| env.default_log_level().to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| env.default_log_format().to_string());

        let http_timeout = parse_var("HTTP_TIMEOUT").unwrap_or(4);
        let alias_length = parse_var("ALIAS_LENGTH").unwrap_or(AliasSettings::default().length);
        let alias_max_attempts =
            parse_var("ALIAS_MAX_ATTEMPTS").unwrap_or(AliasSettings::default().max_attempts);
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS").unwrap_or(5);
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT").unwrap_or(30);

        Ok(Self {
            env,
            database_url,
            storage_path,
            listen_addr,
            log_level,
            log_format,
            http_timeout,
            alias_length,
            alias_max_attempts,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `STORAGE_PATH` (default `./storage/storage.db`)
    ///
    /// The second element is the file path when the URL was built from it.
    fn load_database_url() -> (String, Option<String>) {
        if let Ok(url) = env::var("DATABASE_URL") {
            return (url, None);
        }

        let path = env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());
        (format!("sqlite://{}", path), Some(path))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `database_url` is not a SQLite URL
    /// - a timeout is zero
    /// - alias settings are out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if !(4..=32).contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 4 and 32, got {}",
                self.alias_length
            );
        }

        if self.alias_max_attempts == 0 || self.alias_max_attempts > 1024 {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and 1024, got {}",
                self.alias_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Alias generation settings for [`crate::application::services::UrlService`].
    pub fn alias_settings(&self) -> AliasSettings {
        AliasSettings {
            length: self.alias_length,
            max_attempts: self.alias_max_attempts,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env.as_str());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!(
            "  Alias length: {} (max {} attempts)",
            self.alias_length,
            self.alias_max_attempts
        );
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
