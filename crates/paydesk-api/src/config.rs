//! Console service configuration.
//!
//! Read from environment variables at startup. The registry part can also
//! come from a YAML file (see [`RegistryConfig`]); individual environment
//! variables override the file.

use std::path::PathBuf;

use paydesk_core::Platform;
use paydesk_state::RegistryConfig;

/// Configuration for the console service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// How the platform registry is assembled.
    pub registry: RegistryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            registry: RegistryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PAYDESK_PORT` (default: 8080)
    /// - `PAYDESK_CONFIG`: YAML registry config file (optional)
    /// - `PAYDESK_STATE_FILE`: overrides `state_file` (optional)
    /// - `PAYDESK_DEFAULT_PLATFORM`: overrides `default_platform` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PAYDESK_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("PAYDESK_PORT".to_string(), raw))?,
            None => 8080,
        };

        let mut registry = match lookup("PAYDESK_CONFIG") {
            Some(path) => RegistryConfig::from_yaml_file(&PathBuf::from(path))?,
            None => RegistryConfig::default(),
        };

        if let Some(path) = lookup("PAYDESK_STATE_FILE") {
            registry.state_file = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("PAYDESK_DEFAULT_PLATFORM") {
            registry.default_platform = raw
                .parse::<Platform>()
                .map_err(|_| ConfigError::InvalidVar("PAYDESK_DEFAULT_PLATFORM".to_string(), raw))?;
        }

        registry
            .platform_set()
            .map_err(paydesk_state::ConfigError::from)?;

        Ok(Self { port, registry })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    InvalidVar(String, String),
    #[error(transparent)]
    Registry(#[from] paydesk_state::ConfigError),
}
