//! # paydesk-cli: Command-Line Access to the Platform Router
//!
//! Provides the `paydesk` command. Every command runs against one
//! [`PlatformRegistry`] whose active platform is persisted in a JSON state
//! file, so successive invocations behave like successive navigations in
//! one console session:
//!
//! ```bash
//! paydesk resolve /dashboard          # {"needRedirect":true,"redirectPath":"/admin/dashboard"}
//! paydesk use merchant
//! paydesk resolve /list?page=2        # {"needRedirect":true,"redirectPath":"/merchant/list?page=2"}
//! paydesk entry agent                 # root and login paths of the agent platform
//! ```

pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use paydesk_state::{PlatformRegistry, RegistryConfig};

/// State file used when neither `--state-file` nor the config names one.
pub const DEFAULT_STATE_FILE: &str = ".paydesk/state.json";

/// Build the registry from an optional YAML config and state-file override.
///
/// Precedence for the state file: `state_file` argument, then the config's
/// `state_file`, then [`DEFAULT_STATE_FILE`].
pub fn load_registry(config: Option<&Path>, state_file: Option<&Path>) -> Result<PlatformRegistry> {
    let mut registry_config = match config {
        Some(path) => RegistryConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RegistryConfig::default(),
    };

    if let Some(path) = state_file {
        registry_config.state_file = Some(path.to_path_buf());
    } else if registry_config.state_file.is_none() {
        registry_config.state_file = Some(PathBuf::from(DEFAULT_STATE_FILE));
    }

    tracing::debug!(
        state_file = ?registry_config.state_file,
        default_platform = %registry_config.default_platform,
        "loading platform registry"
    );

    registry_config
        .build_registry()
        .context("building platform registry")
}
