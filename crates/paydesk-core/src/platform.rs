//! # Platform Identifiers
//!
//! Defines the `Platform` enum: the closed set of operator roles served by
//! the console, and `PlatformSet`, the subset of those roles a deployment
//! recognizes together with its default.
//!
//! The identifier strings are part of the URL contract (`/admin/...`) and
//! of the persisted `current_platform` value, so they never change.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PaydeskError;

/// An operator role served by the console.
///
/// | Identifier | Role                      | Label    |
/// |------------|---------------------------|----------|
/// | `admin`    | Back-office administrator | 管理端   |
/// | `merchant` | Merchant self-service     | 商户端   |
/// | `agent`    | Agent (reseller) portal   | 代理端   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Back-office administration.
    Admin,
    /// Merchant self-service.
    Merchant,
    /// Agent portal.
    Agent,
}

/// Number of platform variants.
pub const PLATFORM_COUNT: usize = 3;

impl Platform {
    /// All platforms in canonical order.
    pub fn all() -> &'static [Platform] {
        &[Self::Admin, Self::Merchant, Self::Agent]
    }

    /// The identifier used as path prefix and persisted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Merchant => "merchant",
            Self::Agent => "agent",
        }
    }

    /// Human-readable label shown on the platform selection screen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "管理端",
            Self::Merchant => "商户端",
            Self::Agent => "代理端",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PaydeskError;

    /// Parse a platform from its identifier. Matching is exact: `Admin` and
    /// ` admin` are rejected, as they would be as path segments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "merchant" => Ok(Self::Merchant),
            "agent" => Ok(Self::Agent),
            other => Err(PaydeskError::UnknownPlatform(other.to_string())),
        }
    }
}

/// The platforms a deployment recognizes, in display order, plus the
/// platform adopted when nothing else is known.
///
/// Fixed at construction; never extended at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformSet {
    platforms: Vec<Platform>,
    default: Platform,
}

impl PlatformSet {
    /// Build a platform set.
    ///
    /// Duplicates are dropped, keeping the first occurrence. Fails when the
    /// set is empty or the default is not a member.
    pub fn new(
        platforms: impl IntoIterator<Item = Platform>,
        default: Platform,
    ) -> Result<Self, PaydeskError> {
        let mut unique: Vec<Platform> = Vec::with_capacity(PLATFORM_COUNT);
        for p in platforms {
            if !unique.contains(&p) {
                unique.push(p);
            }
        }
        if unique.is_empty() {
            return Err(PaydeskError::InvalidPlatformSet(
                "at least one platform is required".to_string(),
            ));
        }
        if !unique.contains(&default) {
            return Err(PaydeskError::InvalidPlatformSet(format!(
                "default platform {default} is not in the configured set"
            )));
        }
        Ok(Self {
            platforms: unique,
            default,
        })
    }

    /// The configured platforms in display order.
    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }

    /// Iterate over the configured platforms.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.platforms.iter().copied()
    }

    /// The default platform.
    pub fn default_platform(&self) -> Platform {
        self.default
    }

    /// Whether `platform` is a member of this set.
    pub fn contains(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Resolve a raw string (a path segment or a stored value) to a member
    /// of this set. Anything else, including known platforms excluded from
    /// this deployment, yields `None`.
    pub fn lookup(&self, raw: &str) -> Option<Platform> {
        raw.parse::<Platform>().ok().filter(|p| self.contains(*p))
    }
}

impl Default for PlatformSet {
    fn default() -> Self {
        Self {
            platforms: Platform::all().to_vec(),
            default: Platform::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_platforms_count() {
        assert_eq!(Platform::all().len(), PLATFORM_COUNT);
    }

    #[test]
    fn as_str_roundtrips_through_from_str() {
        for p in Platform::all() {
            let parsed: Platform = p.as_str().parse().unwrap();
            assert_eq!(*p, parsed);
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("Admin".parse::<Platform>().is_err());
        assert!("MERCHANT".parse::<Platform>().is_err());
        assert!(" agent".parse::<Platform>().is_err());
    }

    #[test]
    fn from_str_unknown_reports_input() {
        let err = "reseller".parse::<Platform>().unwrap_err();
        assert_eq!(err, PaydeskError::UnknownPlatform("reseller".to_string()));
        assert!(err.to_string().contains("reseller"));
    }

    #[test]
    fn labels_are_fixed() {
        assert_eq!(Platform::Admin.label(), "管理端");
        assert_eq!(Platform::Merchant.label(), "商户端");
        assert_eq!(Platform::Agent.label(), "代理端");
    }

    #[test]
    fn serde_uses_identifier_strings() {
        let json = serde_json::to_string(&Platform::Merchant).unwrap();
        assert_eq!(json, "\"merchant\"");
        let back: Platform = serde_json::from_str("\"agent\"").unwrap();
        assert_eq!(back, Platform::Agent);
    }

    #[test]
    fn default_set_has_all_platforms_and_admin_default() {
        let set = PlatformSet::default();
        assert_eq!(set.as_slice(), Platform::all());
        assert_eq!(set.default_platform(), Platform::Admin);
    }

    #[test]
    fn new_rejects_empty_set() {
        let err = PlatformSet::new([], Platform::Admin).unwrap_err();
        assert!(matches!(err, PaydeskError::InvalidPlatformSet(_)));
    }

    #[test]
    fn new_rejects_default_outside_set() {
        let err = PlatformSet::new([Platform::Merchant], Platform::Admin).unwrap_err();
        assert!(err.to_string().contains("admin"));
    }

    #[test]
    fn new_drops_duplicates_keeping_order() {
        let set = PlatformSet::new(
            [Platform::Agent, Platform::Admin, Platform::Agent],
            Platform::Agent,
        )
        .unwrap();
        assert_eq!(set.as_slice(), &[Platform::Agent, Platform::Admin]);
    }

    #[test]
    fn lookup_only_accepts_members() {
        let set = PlatformSet::new([Platform::Admin, Platform::Merchant], Platform::Admin).unwrap();
        assert_eq!(set.lookup("merchant"), Some(Platform::Merchant));
        assert_eq!(set.lookup("agent"), None);
        assert_eq!(set.lookup("dashboard"), None);
        assert_eq!(set.lookup(""), None);
    }
}
