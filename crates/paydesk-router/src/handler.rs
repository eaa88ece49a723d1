//! # Platform Route Handler
//!
//! Resolves navigation targets against the platform registry.
//!
//! ## Decision Table
//!
//! | Target prefix | Active platform | Effect on registry  | Decision                      |
//! |---------------|-----------------|---------------------|-------------------------------|
//! | valid `p`     | any             | active := `p`       | `Proceed`                     |
//! | none          | `a`             | unchanged           | `Redirect(/a + target)`       |
//! | none          | none            | active := default   | `Redirect(/default + target)` |
//!
//! Targets may carry a `?query` or `#fragment` suffix. Only the path part is
//! parsed and prefixed; the suffix is carried through untouched.

use std::sync::Arc;

use paydesk_core::{is_root, ParsedPath, Platform};
use paydesk_state::PlatformRegistry;
use serde::Serialize;

use crate::decision::RouteDecision;
use crate::location::RouteLocation;

/// Real path of every platform's entry (login) page.
pub const LOGIN_PATH: &str = "/auth/login";

/// One row of the platform selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformEntry {
    /// The platform.
    pub platform: Platform,
    /// Its entry path, `/<id>/auth/login`.
    pub path: String,
    /// Its display label.
    pub label: &'static str,
}

/// Navigation-time platform resolution over a shared [`PlatformRegistry`].
#[derive(Debug, Clone)]
pub struct PlatformRouteHandler {
    registry: Arc<PlatformRegistry>,
}

impl PlatformRouteHandler {
    /// Create a handler over `registry`.
    pub fn new(registry: Arc<PlatformRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Arc<PlatformRegistry> {
        &self.registry
    }

    /// Split a navigation target into platform and real path.
    ///
    /// When a prefix is found, any query or fragment suffix is kept on the
    /// real path. When none is found the real path is the target unchanged.
    pub fn parse_route(&self, target: &str) -> ParsedPath {
        let (path, suffix) = split_suffix(target);
        let parsed = self.registry.parse_path(path);
        match parsed.platform {
            Some(_) => ParsedPath {
                real_path: format!("{}{suffix}", parsed.real_path),
                ..parsed
            },
            None => ParsedPath {
                platform: None,
                real_path: target.to_string(),
            },
        }
    }

    /// Decide whether navigation to `target` must be redirected.
    ///
    /// An explicit prefix always wins and becomes the active platform. An
    /// unprefixed target is redirected under the active platform, or under
    /// the default platform (which then becomes active) when none is known.
    pub fn handle_before_route(&self, target: &str) -> RouteDecision {
        let (path, suffix) = split_suffix(target);

        if let Some(platform) = self.registry.parse_path(path).platform {
            self.registry.set_platform(platform);
            tracing::debug!(%target, %platform, "target carries platform prefix");
            return RouteDecision::Proceed;
        }

        let platform = match self.registry.get_platform() {
            Some(active) => active,
            None => {
                let fallback = self.registry.default_platform();
                tracing::debug!(%fallback, "no active platform, adopting default");
                self.registry.set_platform(fallback);
                fallback
            }
        };

        let redirect = format!("{}{suffix}", self.registry.add_platform_prefix(path, platform));
        tracing::debug!(%target, %redirect, "redirecting to platform-prefixed path");
        RouteDecision::Redirect { path: redirect }
    }

    /// The real (unprefixed) path of `target`, used for route matching.
    pub fn real_path(&self, target: &str) -> String {
        self.parse_route(target).real_path
    }

    /// Rewrite a destination to carry the active platform's prefix.
    ///
    /// Passes `location` through untouched when no platform is active or
    /// when it is a structured location without a path.
    pub fn transform_location(&self, location: RouteLocation) -> RouteLocation {
        let Some(platform) = self.registry.get_platform() else {
            return location;
        };

        match location {
            RouteLocation::Path(path) => RouteLocation::Path(self.prefix_target(&path, platform)),
            RouteLocation::Object(mut object) => {
                if let Some(path) = object.path.as_deref().filter(|p| !p.is_empty()) {
                    object.path = Some(self.prefix_target(path, platform));
                }
                RouteLocation::Object(object)
            }
        }
    }

    /// Whether `path` denotes a platform root (`/`, `/admin`, `/merchant/`, ...).
    pub fn is_root_path(&self, path: &str) -> bool {
        let (path, _) = split_suffix(path);
        is_root(&self.registry.parse_path(path).real_path)
    }

    /// Canonical root path of `platform`, else of the active platform, else
    /// of the default platform.
    pub fn platform_root_path(&self, platform: Option<Platform>) -> String {
        format!("/{}", self.target_platform(platform))
    }

    /// Canonical entry (login) path, resolved like [`Self::platform_root_path`].
    pub fn login_path(&self, platform: Option<Platform>) -> String {
        format!("/{}{LOGIN_PATH}", self.target_platform(platform))
    }

    /// The entry path and label of every configured platform, in order.
    pub fn platform_selection_paths(&self) -> Vec<PlatformEntry> {
        self.registry
            .platforms()
            .iter()
            .map(|platform| PlatformEntry {
                platform,
                path: format!("/{platform}{LOGIN_PATH}"),
                label: platform.label(),
            })
            .collect()
    }

    fn target_platform(&self, platform: Option<Platform>) -> Platform {
        platform
            .or_else(|| self.registry.get_platform())
            .unwrap_or_else(|| self.registry.default_platform())
    }

    fn prefix_target(&self, target: &str, platform: Platform) -> String {
        let (path, suffix) = split_suffix(target);
        format!("{}{suffix}", self.registry.add_platform_prefix(path, platform))
    }
}

/// Split `target` at the first `?` or `#`.
fn split_suffix(target: &str) -> (&str, &str) {
    match target.find(['?', '#']) {
        Some(idx) => target.split_at(idx),
        None => (target, ""),
    }
}
