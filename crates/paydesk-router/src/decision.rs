//! # Route Decision
//!
//! The outcome of one `handle_before_route` call.
//!
//! On the wire it keeps the navigation-guard shape
//! `{ "needRedirect": bool, "redirectPath"?: string }`.

use serde::{Deserialize, Serialize};

/// What the navigation guard must do with a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DecisionBody", try_from = "DecisionBody")]
pub enum RouteDecision {
    /// The target carries a valid prefix; let it through as-is.
    Proceed,
    /// Halt the original navigation and re-issue it at `path`.
    Redirect {
        /// The canonical, prefixed path.
        path: String,
    },
}

impl RouteDecision {
    /// Whether the guard must redirect.
    pub fn need_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// The redirect target, when redirecting.
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::Redirect { path } => Some(path),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecisionBody {
    need_redirect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    redirect_path: Option<String>,
}

impl From<RouteDecision> for DecisionBody {
    fn from(decision: RouteDecision) -> Self {
        match decision {
            RouteDecision::Proceed => Self {
                need_redirect: false,
                redirect_path: None,
            },
            RouteDecision::Redirect { path } => Self {
                need_redirect: true,
                redirect_path: Some(path),
            },
        }
    }
}

impl TryFrom<DecisionBody> for RouteDecision {
    type Error = String;

    fn try_from(body: DecisionBody) -> Result<Self, Self::Error> {
        match (body.need_redirect, body.redirect_path) {
            (false, _) => Ok(Self::Proceed),
            (true, Some(path)) => Ok(Self::Redirect { path }),
            (true, None) => Err("needRedirect is true but redirectPath is missing".to_string()),
        }
    }
}
