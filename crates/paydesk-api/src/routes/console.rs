//! # Console Handlers
//!
//! Platform-aware views of the console. Each handler receives the platform
//! the request was accepted under through [`ActivePlatform`].

use axum::extract::State;
use axum::http::Uri;
use axum::{Extension, Json};
use paydesk_core::Platform;
use paydesk_router::{PlatformEntry, RouteLocation};
use serde::Serialize;

use crate::error::AppError;
use crate::menu::{RouteMenu, RouteRecord};
use crate::middleware::platform_guard::ActivePlatform;
use crate::state::AppState;

/// `GET /` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformHome {
    pub platform: Platform,
    pub label: &'static str,
    pub root_path: String,
    pub login_path: String,
}

/// `GET /auth/login` response: the entry page plus the other platforms the
/// operator can switch to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub platform: Platform,
    pub label: &'static str,
    pub path: String,
    pub platforms: Vec<PlatformEntry>,
}

/// A route-menu page resolved under a platform.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub platform: Platform,
    /// Canonical prefixed path of the page.
    pub path: String,
    /// Real path the page was matched on.
    pub real_path: String,
    pub route: RouteRecord,
}

pub async fn home(
    State(state): State<AppState>,
    Extension(ActivePlatform(platform)): Extension<ActivePlatform>,
) -> Json<PlatformHome> {
    Json(PlatformHome {
        platform,
        label: platform.label(),
        root_path: state.routes.platform_root_path(Some(platform)),
        login_path: state.routes.login_path(Some(platform)),
    })
}

pub async fn login(
    State(state): State<AppState>,
    Extension(ActivePlatform(platform)): Extension<ActivePlatform>,
) -> Json<LoginPage> {
    Json(LoginPage {
        platform,
        label: platform.label(),
        path: state.routes.login_path(Some(platform)),
        platforms: state.routes.platform_selection_paths(),
    })
}

pub async fn platforms(State(state): State<AppState>) -> Json<Vec<PlatformEntry>> {
    Json(state.routes.platform_selection_paths())
}

pub async fn menu(State(state): State<AppState>) -> Json<RouteMenu> {
    Json(state.menu.as_ref().clone())
}

pub async fn navigate(
    State(state): State<AppState>,
    Json(location): Json<RouteLocation>,
) -> Json<RouteLocation> {
    Json(state.routes.transform_location(location))
}

pub async fn page(
    State(state): State<AppState>,
    Extension(ActivePlatform(platform)): Extension<ActivePlatform>,
    uri: Uri,
) -> Result<Json<PageView>, AppError> {
    let matched = state
        .menu
        .resolve(uri.path())
        .ok_or_else(|| AppError::NotFound(format!("no console page at {}", uri.path())))?;

    Ok(Json(PageView {
        platform,
        path: state
            .registry()
            .add_platform_prefix(&matched.full_path, platform),
        real_path: matched.full_path,
        route: matched.route.clone(),
    }))
}
