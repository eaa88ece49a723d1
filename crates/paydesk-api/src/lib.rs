//! # paydesk-api: Axum Console Service
//!
//! Serves the Paydesk console for all three operator platforms from one
//! route tree, disambiguated by path prefix.
//!
//! ## API Surface
//!
//! | Path                     | Guarded | Purpose                                 |
//! |--------------------------|---------|-----------------------------------------|
//! | `/health/liveness`       | no      | Process is up                           |
//! | `/health/readiness`      | no      | Platform store is readable              |
//! | `/<platform>/...`        | yes     | Console routes ([`routes::console_router`]) |
//! | anything else            | yes     | Redirected under the active platform    |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → PlatformGuard → console router
//! ```
//!
//! The guard wraps the console router as a service rather than being
//! layered onto it, so the URI rewrite happens before route matching.

pub mod config;
pub mod error;
pub mod menu;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower::Layer;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router.
///
/// Health probes are matched first and bypass the platform guard.
pub fn app(state: AppState) -> Router {
    let console = routes::console_router().with_state(state.clone());
    let guarded = from_fn_with_state(state.clone(), middleware::platform_guard::platform_guard)
        .layer(console);

    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .with_state(state)
        .fallback_service(guarded)
        .layer(middleware::tracing_layer::layer())
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 "ready" when the platform store can be read,
/// 503 otherwise.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if !state.registry().store_readable() {
        return AppError::ServiceUnavailable("platform store unreadable".to_string())
            .into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
