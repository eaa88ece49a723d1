//! # Platform-Prefixed Paths
//!
//! A navigation path may carry a platform identifier as its first segment:
//!
//! ```text
//! /merchant/orderManagement/payInOrder
//!  ^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^
//!  prefix   real path (used for route matching)
//! ```
//!
//! Parsing strips at most one prefix. `/admin/merchant/x` parses to platform
//! `admin` with real path `/merchant/x`.

use serde::{Deserialize, Serialize};

use crate::platform::{Platform, PlatformSet};

/// A navigation path split into its platform prefix and real path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPath {
    /// The platform named by the first segment, if it is a configured one.
    pub platform: Option<Platform>,
    /// The path with the prefix segment removed. When no prefix was found
    /// this is the input path, unchanged.
    pub real_path: String,
}

/// Split `path` into its platform prefix and real path.
///
/// A single leading `/` is ignored. If the first segment names a member of
/// `platforms`, the remaining segments are rejoined behind a leading `/`
/// (so `/admin` and `/admin/` both yield `/`). Otherwise the platform is
/// absent and the real path is `path` as given.
pub fn parse_path(path: &str, platforms: &PlatformSet) -> ParsedPath {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut segments = trimmed.splitn(2, '/');
    let first = segments.next().unwrap_or_default();

    match platforms.lookup(first) {
        Some(platform) => {
            let rest = segments.next().unwrap_or_default();
            ParsedPath {
                platform: Some(platform),
                real_path: format!("/{rest}"),
            }
        }
        None => ParsedPath {
            platform: None,
            real_path: path.to_string(),
        },
    }
}

/// Ensure a leading `/`; the empty path becomes `/`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Prefix `path` with `/<platform>`.
///
/// Any existing prefix is stripped first, so prefixes are replaced rather
/// than stacked. A root real path collapses to exactly `/<platform>`.
pub fn add_platform_prefix(path: &str, platform: Platform, platforms: &PlatformSet) -> String {
    let real_path = normalize_path(&parse_path(path, platforms).real_path);
    if real_path == "/" {
        format!("/{platform}")
    } else {
        format!("/{platform}{real_path}")
    }
}

/// Whether a real path denotes the root of a platform.
pub fn is_root(real_path: &str) -> bool {
    real_path.is_empty() || real_path == "/"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> PlatformSet {
        PlatformSet::default()
    }

    #[test]
    fn parse_prefixed_path() {
        let parsed = parse_path("/admin/foo/bar", &all());
        assert_eq!(parsed.platform, Some(Platform::Admin));
        assert_eq!(parsed.real_path, "/foo/bar");
    }

    #[test]
    fn parse_unprefixed_path_is_unchanged() {
        let parsed = parse_path("/foo/bar", &all());
        assert_eq!(parsed.platform, None);
        assert_eq!(parsed.real_path, "/foo/bar");
    }

    #[test]
    fn parse_bare_prefix_yields_root() {
        assert_eq!(parse_path("/merchant", &all()).real_path, "/");
        assert_eq!(parse_path("/merchant/", &all()).real_path, "/");
    }

    #[test]
    fn parse_without_leading_slash() {
        let parsed = parse_path("agent/payInAgent", &all());
        assert_eq!(parsed.platform, Some(Platform::Agent));
        assert_eq!(parsed.real_path, "/payInAgent");
    }

    #[test]
    fn parse_strips_only_one_level() {
        let parsed = parse_path("/admin/merchant/x", &all());
        assert_eq!(parsed.platform, Some(Platform::Admin));
        assert_eq!(parsed.real_path, "/merchant/x");
    }

    #[test]
    fn parse_requires_whole_segment_match() {
        let parsed = parse_path("/administrator/x", &all());
        assert_eq!(parsed.platform, None);
        assert_eq!(parsed.real_path, "/administrator/x");
    }

    #[test]
    fn parse_ignores_platforms_outside_the_set() {
        let set = PlatformSet::new([Platform::Admin], Platform::Admin).unwrap();
        let parsed = parse_path("/agent/x", &set);
        assert_eq!(parsed.platform, None);
        assert_eq!(parsed.real_path, "/agent/x");
    }

    #[test]
    fn parse_empty_and_root() {
        assert_eq!(parse_path("", &all()).platform, None);
        assert_eq!(parse_path("", &all()).real_path, "");
        assert_eq!(parse_path("/", &all()).real_path, "/");
    }

    #[test]
    fn prefix_root_collapses() {
        assert_eq!(add_platform_prefix("/", Platform::Merchant, &all()), "/merchant");
        assert_eq!(add_platform_prefix("", Platform::Merchant, &all()), "/merchant");
    }

    #[test]
    fn prefix_plain_path() {
        assert_eq!(
            add_platform_prefix("/dashboard", Platform::Admin, &all()),
            "/admin/dashboard"
        );
    }

    #[test]
    fn prefix_adds_missing_leading_slash() {
        assert_eq!(
            add_platform_prefix("dashboard", Platform::Agent, &all()),
            "/agent/dashboard"
        );
    }

    #[test]
    fn prefix_replaces_existing_prefix() {
        assert_eq!(
            add_platform_prefix("/admin/list", Platform::Merchant, &all()),
            "/merchant/list"
        );
        assert_eq!(add_platform_prefix("/agent", Platform::Admin, &all()), "/admin");
    }

    #[test]
    fn normalize_cases() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("x/y"), "/x/y");
        assert_eq!(normalize_path("/x/y"), "/x/y");
    }

    #[test]
    fn is_root_cases() {
        assert!(is_root(""));
        assert!(is_root("/"));
        assert!(!is_root("/auth/login"));
    }

    #[test]
    fn parsed_path_serializes_camel_case() {
        let parsed = parse_path("/admin/x", &all());
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["platform"], "admin");
        assert_eq!(json["realPath"], "/x");
    }
}
