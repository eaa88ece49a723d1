//! # Platform Guard
//!
//! The navigation guard of the console. Runs before routing, on every
//! request to the console router:
//!
//! ```text
//! GET /dashboard          → 307 Location: /admin/dashboard
//! GET /merchant/menu      → active := merchant, routed as GET /menu
//! GET /agent?tab=2        → active := agent,    routed as GET /?tab=2
//! ```
//!
//! The console router only ever sees real paths. Handlers read the platform
//! the request arrived under from the [`ActivePlatform`] extension.

use axum::extract::{Request, State};
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use paydesk_core::Platform;
use paydesk_router::RouteDecision;

use crate::error::AppError;
use crate::state::AppState;

/// The platform a request was accepted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePlatform(pub Platform);

/// Resolve the request target; redirect unprefixed targets, strip the
/// prefix from accepted ones.
pub async fn platform_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    match state.routes.handle_before_route(&target) {
        RouteDecision::Redirect { path } => Redirect::temporary(&path).into_response(),
        RouteDecision::Proceed => {
            let parsed = state.routes.parse_route(&target);
            let Some(platform) = parsed.platform else {
                return AppError::Internal(format!("accepted target {target} has no platform"))
                    .into_response();
            };
            let real_uri: Uri = match parsed.real_path.parse() {
                Ok(uri) => uri,
                Err(e) => {
                    return AppError::Validation(format!("invalid path {target}: {e}"))
                        .into_response()
                }
            };
            tracing::debug!(%platform, real_path = %real_uri, "request accepted under platform");
            *request.uri_mut() = real_uri;
            request.extensions_mut().insert(ActivePlatform(platform));
            next.run(request).await
        }
    }
}
