use log::{info, warn};
use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_ADMIN_TOKEN: &str = "secret123";
pub const DEFAULT_STATIC_DIR: &str = "dist";

/// Server settings read from the environment
///
/// | Variable | Default |
/// |---|---|
/// | `PORT` | `5000` |
/// | `HOST` | `0.0.0.0` |
/// | `POLL_ADMIN_TOKEN` | `secret123` |
/// | `STATIC_DIR` | `dist` |
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub admin_token: String,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            admin_token: DEFAULT_ADMIN_TOKEN.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Load from the process environment, after applying a `.env` file if
    /// one is present
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// # Arguments
    /// * `lookup` - Returns the value for a variable name, or `None` if unset
    ///
    /// # Errors
    /// * `ConfigError::InvalidNumber` if `PORT` is set but is not a valid port
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port: u16 = match non_empty(&lookup, "PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    key: "PORT",
                    value: value.clone(),
                    source,
                })?,
            None => defaults.port,
        };

        let host = non_empty(&lookup, "HOST").unwrap_or(defaults.host);

        let admin_token = match lookup("POLL_ADMIN_TOKEN") {
            Some(token) if !token.is_empty() => token,
            _ => {
                warn!("POLL_ADMIN_TOKEN not set, using the built-in default token");
                defaults.admin_token
            }
        };

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Ok(Config {
            host,
            port,
            admin_token,
            static_dir,
        })
    }
}

/// Look up `key`, treating an empty or blank value as unset
fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}
