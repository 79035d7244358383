//! # Runtime Configuration
//!
//! Settings come from environment variables (optionally seeded from a `.env`
//! file by the binary). Every variable has a default.
//!
//! - `APP_HOST` - Bind address, default [`DEFAULT_HOST`]
//! - `APP_PORT` - Bind port, default [`DEFAULT_PORT`]
//! - `APP_ENV` - `development` (default) or `production`; selects the log format

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT};

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable `{0}`: {1}")]
    InvalidValue(&'static str, String),
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_owned())),
        }
    }
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_env("APP_HOST")?.unwrap_or(DEFAULT_HOST),
            port: parse_env("APP_PORT")?.unwrap_or(DEFAULT_PORT),
            environment: parse_env("APP_ENV")?.unwrap_or_default(),
        })
    }

    #[inline]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_env<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, value)),
        _ => Ok(None),
    }
}
