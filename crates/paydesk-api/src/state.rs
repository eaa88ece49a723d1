//! # Application State
//!
//! Shared state for the Axum application, passed to handlers and to the
//! platform guard via the `State` extractor.
//!
//! The console is a single-operator service: one registry, one active
//! platform per running instance, exactly as a browser client has one.

use std::sync::Arc;

use paydesk_router::PlatformRouteHandler;
use paydesk_state::PlatformRegistry;

use crate::config::{AppConfig, ConfigError};
use crate::menu::RouteMenu;

/// Shared application state. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Startup configuration.
    pub config: AppConfig,
    /// Route resolver over the platform registry.
    pub routes: PlatformRouteHandler,
    /// Route-menu table matched against real paths.
    pub menu: Arc<RouteMenu>,
}

impl AppState {
    /// Build state from configuration, opening the configured store.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let registry = config.registry.build_registry()?;
        Ok(Self::with_registry(config, registry))
    }

    /// Build state around an existing registry.
    pub fn with_registry(config: AppConfig, registry: PlatformRegistry) -> Self {
        Self {
            config,
            routes: PlatformRouteHandler::new(Arc::new(registry)),
            menu: Arc::new(RouteMenu::builtin()),
        }
    }

    /// Default configuration over an in-memory store.
    pub fn in_memory() -> Self {
        let config = AppConfig::default();
        let registry = PlatformRegistry::new(
            Arc::new(paydesk_state::MemoryStore::new()),
            paydesk_core::PlatformSet::default(),
        );
        Self::with_registry(config, registry)
    }

    /// The platform registry.
    pub fn registry(&self) -> &PlatformRegistry {
        self.routes.registry()
    }
}
