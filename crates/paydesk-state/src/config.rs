//! # Registry Configuration
//!
//! Describes how a [`PlatformRegistry`] is assembled: which platforms are
//! valid, which one is the default, the storage key, and where (if
//! anywhere) the active platform is persisted.
//!
//! Loaded from YAML:
//!
//! ```yaml
//! platforms: [admin, merchant, agent]
//! default_platform: admin
//! storage_key: current_platform
//! state_file: /var/lib/paydesk/state.json
//! ```
//!
//! Every field is optional; omitted fields take the defaults shown above,
//! except `state_file`, whose absence selects an in-memory store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use paydesk_core::{PaydeskError, Platform, PlatformSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::{PlatformRegistry, STORAGE_KEY};
use crate::store::{FileStore, MemoryStore, PlatformStore};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for this schema.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// The file that failed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The platform set is inconsistent.
    #[error(transparent)]
    Platforms(#[from] PaydeskError),
}

/// How to build the platform registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Valid platforms, in display order.
    pub platforms: Vec<Platform>,
    /// Platform adopted when none is active.
    pub default_platform: Platform,
    /// Store key for the active platform.
    pub storage_key: String,
    /// JSON file persisting the active platform. `None` keeps it in memory.
    pub state_file: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            platforms: Platform::all().to_vec(),
            default_platform: Platform::Admin,
            storage_key: STORAGE_KEY.to_string(),
            state_file: None,
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from YAML text. `origin` is used in errors.
    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.platform_set()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw, path)
    }

    /// The validated platform set.
    pub fn platform_set(&self) -> Result<PlatformSet, PaydeskError> {
        PlatformSet::new(self.platforms.iter().copied(), self.default_platform)
    }

    /// Open the configured store: a [`FileStore`] when `state_file` is set,
    /// otherwise a fresh [`MemoryStore`].
    pub fn open_store(&self) -> Arc<dyn PlatformStore> {
        match &self.state_file {
            Some(path) => Arc::new(FileStore::new(path)),
            None => Arc::new(MemoryStore::new()),
        }
    }

    /// Build the registry this configuration describes.
    pub fn build_registry(&self) -> Result<PlatformRegistry, ConfigError> {
        let platforms = self.platform_set()?;
        tracing::debug!(
            platforms = ?platforms.as_slice(),
            default = %platforms.default_platform(),
            state_file = ?self.state_file,
            "building platform registry"
        );
        Ok(PlatformRegistry::with_storage_key(
            self.open_store(),
            platforms,
            self.storage_key.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("paydesk.yaml")
    }

    #[test]
    fn defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.platforms, Platform::all());
        assert_eq!(config.default_platform, Platform::Admin);
        assert_eq!(config.storage_key, "current_platform");
        assert!(config.state_file.is_none());
    }

    #[test]
    fn empty_yaml_is_default() {
        let config = RegistryConfig::from_yaml_str("{}", origin()).unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn full_yaml() {
        let yaml = "platforms: [merchant, agent]\n\
                    default_platform: merchant\n\
                    storage_key: console_platform\n\
                    state_file: /tmp/paydesk.json\n";
        let config = RegistryConfig::from_yaml_str(yaml, origin()).unwrap();
        assert_eq!(config.platforms, vec![Platform::Merchant, Platform::Agent]);
        assert_eq!(config.default_platform, Platform::Merchant);
        assert_eq!(config.storage_key, "console_platform");
        assert_eq!(config.state_file, Some(PathBuf::from("/tmp/paydesk.json")));
    }

    #[test]
    fn rejects_unknown_platform() {
        let err = RegistryConfig::from_yaml_str("platforms: [admin, reseller]", origin())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_unknown_field() {
        let err = RegistryConfig::from_yaml_str("default: admin", origin()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_default_outside_set() {
        let yaml = "platforms: [merchant]\ndefault_platform: admin\n";
        let err = RegistryConfig::from_yaml_str(yaml, origin()).unwrap_err();
        assert!(matches!(err, ConfigError::Platforms(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RegistryConfig::from_yaml_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn file_backed_registry_survives_rebuild() {
        let dir = tempfile::tempdir().unwrap();
        let config = RegistryConfig {
            state_file: Some(dir.path().join("state.json")),
            ..RegistryConfig::default()
        };

        config.build_registry().unwrap().set_platform(Platform::Agent);
        let rebuilt = config.build_registry().unwrap();
        assert_eq!(rebuilt.get_platform(), Some(Platform::Agent));
    }

    #[test]
    fn memory_registry_starts_empty_on_rebuild() {
        let config = RegistryConfig::default();
        config.build_registry().unwrap().set_platform(Platform::Agent);
        assert_eq!(config.build_registry().unwrap().get_platform(), None);
    }
}
