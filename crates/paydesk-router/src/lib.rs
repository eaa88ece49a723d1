//! # paydesk-router: Route Path Resolver
//!
//! Decides, for each navigation attempt, whether the target already carries
//! a valid platform prefix and, if not, where to redirect.
//!
//! ```text
//! guard ──target──▶ PlatformRouteHandler::handle_before_route
//!                        │  parse / get / set
//!                        ▼
//!                   PlatformRegistry (paydesk-state)
//!   ◀── RouteDecision::Proceed | RouteDecision::Redirect { path }
//! ```
//!
//! The resolver never navigates and never fails; halting and re-issuing
//! navigation is the caller's job.

pub mod decision;
pub mod handler;
pub mod location;

pub use decision::RouteDecision;
pub use handler::{PlatformEntry, PlatformRouteHandler, LOGIN_PATH};
pub use location::{LocationObject, RouteLocation};
