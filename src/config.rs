//! Environment configuration for the server, live-query mode, and the export job.
//! DB_* variables mirror the database the export job reads from; a .env file is
//! honored via dotenvy before any of these are resolved.

use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PORT: u16 = 3306;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value '{value}' for {name}")]
    InvalidVar { name: &'static str, value: String },
}

/// Which NpcSource the server builds at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Filter the startup-loaded snapshot in memory.
    #[default]
    Snapshot,
    /// Query MySQL per request through a shared pool.
    Live,
}

impl SourceMode {
    pub fn from_env() -> Result<SourceMode, ConfigError> {
        match env::var("CHARMFINDER_SOURCE") {
            Ok(value) if value.eq_ignore_ascii_case("live") => Ok(SourceMode::Live),
            Ok(value) if value.eq_ignore_ascii_case("snapshot") => Ok(SourceMode::Snapshot),
            Ok(value) => Err(ConfigError::InvalidVar {
                name: "CHARMFINDER_SOURCE",
                value,
            }),
            Err(_) => Ok(SourceMode::Snapshot),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub mode: SourceMode,
    pub snapshot_path: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<ServerConfig, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };
        let snapshot_path = env::var("CHARMFINDER_SNAPSHOT")
            .unwrap_or_else(|_| crate::data::snapshot::DEFAULT_SNAPSHOT_PATH.to_string());

        Ok(ServerConfig {
            bind_addr: format!("0.0.0.0:{port}"),
            mode: SourceMode::from_env()?,
            snapshot_path,
        })
    }
}

/// MySQL connection settings for live mode and the export job.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl DbConfig {
    pub fn from_env() -> Result<DbConfig, ConfigError> {
        let port = match env::var("DB_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "DB_PORT",
                value,
            })?,
            Err(_) => DEFAULT_DB_PORT,
        };

        Ok(DbConfig {
            host: require_var("DB_HOST")?,
            user: require_var("DB_USER")?,
            password: require_var("DB_PASSWORD")?,
            database: require_var("DB_NAME")?,
            port,
        })
    }

    /// Connection URL in the form sqlx expects.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
