//! # Request/Response Tracing
//!
//! Configures `tower_http::trace::TraceLayer` so every request gets an
//! `INFO` span carrying method and URI, and every response is logged with
//! its status and latency.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the console's `TraceLayer`.
///
/// The span is opened before the platform guard runs, so it records the
/// URI as the client sent it (prefixed or not).
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
