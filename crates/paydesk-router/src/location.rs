//! # Route Locations
//!
//! A navigation destination as callers hand it to the router: either a
//! bare path string or a structured location. Only the `path` of a
//! structured location is ever rewritten; named locations pass through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteLocation {
    /// `"/orderManagement/payInOrder"`
    Path(String),
    /// `{ "name": "PayInOrder", "query": { "page": "2" } }`
    Object(LocationObject),
}

/// A structured navigation destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationObject {
    /// Target path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Target route name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Route params.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
    /// Query string parameters.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
    /// Fragment, including the leading `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl From<&str> for RouteLocation {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for RouteLocation {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<LocationObject> for RouteLocation {
    fn from(location: LocationObject) -> Self {
        Self::Object(location)
    }
}
