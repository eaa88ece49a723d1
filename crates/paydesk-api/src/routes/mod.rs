//! # Route Modules
//!
//! The console router. Every route here is matched against the real
//! (unprefixed) path; the platform guard in front of it has already
//! stripped the prefix.

pub mod console;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Routes served under every platform prefix.
///
/// - `GET  /`          : platform home
/// - `GET  /auth/login`: platform entry page
/// - `GET  /platforms` : platform selection entries
/// - `GET  /menu`      : route-menu table
/// - `POST /navigate`  : prefix a navigation destination for the active platform
/// - anything else     : route-menu page lookup, else 404
pub fn console_router() -> Router<AppState> {
    Router::new()
        .route("/", get(console::home))
        .route(paydesk_router::LOGIN_PATH, get(console::login))
        .route("/platforms", get(console::platforms))
        .route("/menu", get(console::menu))
        .route("/navigate", post(console::navigate))
        .fallback(console::page)
}
