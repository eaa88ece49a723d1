//! # Middleware Stack
//!
//! Tower middleware for the console service:
//! - [`platform_guard`]: platform-prefix navigation guard.
//! - [`tracing_layer`]: request/response tracing with `TraceLayer`.

pub mod platform_guard;
pub mod tracing_layer;
