use crate::cookbook::DEFAULT_MAX_DEPTH;
use std::env;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the cookbook server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional override for the HTTP server port.
    pub server_port: Option<u16>,
    /// Deepest recipe nesting the resolver will expand.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server_port: load_env_optional("SERVER_PORT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?,
            max_depth: load_env_optional("COOKBOOK_MAX_DEPTH")
                .map(|value| {
                    value
                        .parse()
                        .ok()
                        .filter(|&depth: &usize| depth > 0)
                        .ok_or_else(|| ConfigError::InvalidValue("COOKBOOK_MAX_DEPTH".into()))
                })
                .transpose()?
                .unwrap_or(DEFAULT_MAX_DEPTH),
        })
    }
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Load `.env` (when present) and read configuration from the environment.
pub fn init_config() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    tracing::debug!(
        server_port = ?config.server_port,
        max_depth = config.max_depth,
        "Loaded configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = Config::default();
        assert_eq!(config.server_port, None);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        // SAFETY: this variable is only touched by this test.
        unsafe { env::set_var("COOKBOOK_TEST_BLANK", "   ") };
        assert!(load_env_optional("COOKBOOK_TEST_BLANK").is_none());
        unsafe { env::remove_var("COOKBOOK_TEST_BLANK") };
    }
}
