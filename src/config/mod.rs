pub mod database_config;
pub mod defaults;

use chrono::FixedOffset;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use database_config::DatabaseConfig;

const ENVIRONMENTS: [&str; 3] = ["dev", "test", "production"];
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid app configuration: {0}")]
    App(String),

    #[error("Invalid database configuration: {0}")]
    Database(String),

    #[error("Invalid check-in configuration: {0}")]
    CheckIn(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub app: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub check_in: CheckInConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::default_host(),
            port: defaults::default_port(),
            environment: defaults::default_environment(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

/// Settings that shape check-in validation.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CheckInConfig {
    /// Offset from UTC, in minutes, of the clock that decides which calendar
    /// day a check-in belongs to.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl CheckInConfig {
    pub fn day_offset(&self) -> Result<FixedOffset, ConfigError> {
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::CheckIn(format!(
                "utc_offset_minutes must be within ±{MAX_UTC_OFFSET_MINUTES}, got {}",
                self.utc_offset_minutes
            )));
        }

        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ConfigError::CheckIn(format!(
                "utc_offset_minutes {} is not a valid offset",
                self.utc_offset_minutes
            ))
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::default("check_in", CheckInConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config/local.toml"))
            .merge(Env::prefixed("APP_").map(|key| format!("app.{key}").into()))
            .merge(Env::prefixed("DATABASE_").map(|key| format!("database.{key}").into()))
            .merge(Env::prefixed("LOGGING_").map(|key| format!("logging.{key}").into()))
            .merge(Env::prefixed("CHECK_IN_").map(|key| format!("check_in.{key}").into()))
            .merge(Env::raw().only(&["PORT"]).map(|_| "app.port".into()))
            .merge(Env::raw().only(&["APP_ENV"]).map(|_| "app.environment".into()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ENVIRONMENTS.contains(&self.app.environment.as_str()) {
            return Err(ConfigError::App(format!(
                "environment must be one of {}, got {:?}",
                ENVIRONMENTS.join(", "),
                self.app.environment
            )));
        }

        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Database(
                "DATABASE_URL must be set".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Database(format!(
                "min_connections ({}) exceeds max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }

        self.check_in.day_offset().map(|_| ())
    }
}
