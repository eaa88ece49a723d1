//! # paydesk-core: Foundational Types for the Paydesk Console
//!
//! The Paydesk console serves three operator roles (admin, merchant, agent)
//! from a single route tree. The role is carried as the first path segment:
//! `/admin/orderManagement/payInOrder`, `/merchant/auth/login`, and so on.
//! This crate defines the vocabulary every other crate shares:
//!
//! - [`Platform`]: the closed set of operator roles.
//! - [`PlatformSet`]: the configured valid identifiers plus the default.
//! - [`parse_path`] / [`add_platform_prefix`]: the pure path arithmetic
//!   used by the registry and the route resolver.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `paydesk-*` crates (this is the leaf of the DAG).
//! - No I/O. Persistence lives in `paydesk-state`.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod path;
pub mod platform;

pub use error::PaydeskError;
pub use path::{add_platform_prefix, is_root, normalize_path, parse_path, ParsedPath};
pub use platform::{Platform, PlatformSet, PLATFORM_COUNT};
