//! # Error Types
//!
//! Errors raised while building or parsing platform configuration.
//! Path parsing itself is total and never fails.

use thiserror::Error;

/// Top-level error type for `paydesk-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaydeskError {
    /// A string did not name any known platform.
    #[error("unknown platform: {0:?}")]
    UnknownPlatform(String),

    /// A platform set was configured inconsistently.
    #[error("invalid platform set: {0}")]
    InvalidPlatformSet(String),
}
