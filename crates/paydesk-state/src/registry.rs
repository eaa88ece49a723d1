//! # Platform Registry
//!
//! Single source of truth for which operator platform is active.
//!
//! ## Lookup
//!
//! ```text
//! get_platform()
//!   ├─ cached?            → cached value
//!   └─ store[key] valid?  → cache it, return it
//!                  else   → None (failure logged, never raised)
//! ```
//!
//! The cached value is authoritative once populated. The persisted value is
//! only read back lazily after a restart; external changes to the store are
//! not watched.

use std::sync::Arc;

use paydesk_core::{Platform, PlatformSet, ParsedPath};
use parking_lot::RwLock;

use crate::store::PlatformStore;

/// Store key under which the active platform is persisted.
pub const STORAGE_KEY: &str = "current_platform";

/// The active platform, cached in memory and persisted through a
/// [`PlatformStore`].
pub struct PlatformRegistry {
    store: Arc<dyn PlatformStore>,
    platforms: PlatformSet,
    storage_key: String,
    current: RwLock<Option<Platform>>,
}

impl std::fmt::Debug for PlatformRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformRegistry")
            .field("platforms", &self.platforms)
            .field("storage_key", &self.storage_key)
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}

impl PlatformRegistry {
    /// Create a registry over `store`, persisting under [`STORAGE_KEY`].
    pub fn new(store: Arc<dyn PlatformStore>, platforms: PlatformSet) -> Self {
        Self::with_storage_key(store, platforms, STORAGE_KEY)
    }

    /// Create a registry persisting under a custom key.
    pub fn with_storage_key(
        store: Arc<dyn PlatformStore>,
        platforms: PlatformSet,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            platforms,
            storage_key: storage_key.into(),
            current: RwLock::new(None),
        }
    }

    /// The configured platform set.
    pub fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    /// The platform adopted when none is active.
    pub fn default_platform(&self) -> Platform {
        self.platforms.default_platform()
    }

    /// The key the active platform is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The active platform, if any.
    ///
    /// Returns the cached value when set. Otherwise reads the store; a
    /// stored value naming a configured platform is cached and returned.
    /// An unreadable store, a missing value, or an unrecognized value all
    /// yield `None`.
    pub fn get_platform(&self) -> Option<Platform> {
        if let Some(platform) = *self.current.read() {
            return Some(platform);
        }

        let stored = match self.store.get_item(&self.storage_key) {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::error!(key = %self.storage_key, "failed to read platform from store: {e}");
                return None;
            }
        };

        match self.platforms.lookup(&stored) {
            Some(platform) => {
                tracing::debug!(%platform, "restored active platform from store");
                *self.current.write() = Some(platform);
                Some(platform)
            }
            None => {
                tracing::warn!(key = %self.storage_key, value = %stored, "ignoring unrecognized stored platform");
                None
            }
        }
    }

    /// Make `platform` the active platform.
    ///
    /// The in-memory value is overwritten unconditionally. A persistence
    /// failure is logged; the in-memory value stays authoritative for the
    /// rest of the process lifetime.
    pub fn set_platform(&self, platform: Platform) {
        *self.current.write() = Some(platform);
        if let Err(e) = self.store.set_item(&self.storage_key, platform.as_str()) {
            tracing::error!(%platform, key = %self.storage_key, "failed to persist platform: {e}");
        }
    }

    /// Whether the backing store can currently be read.
    pub fn store_readable(&self) -> bool {
        self.store.get_item(&self.storage_key).is_ok()
    }

    /// Split `path` into platform prefix and real path against the
    /// configured set.
    pub fn parse_path(&self, path: &str) -> ParsedPath {
        paydesk_core::parse_path(path, &self.platforms)
    }

    /// Prefix `path` with `/<platform>`, replacing any existing prefix.
    pub fn add_platform_prefix(&self, path: &str, platform: Platform) -> String {
        paydesk_core::add_platform_prefix(path, platform, &self.platforms)
    }
}
