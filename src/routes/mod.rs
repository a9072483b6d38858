//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page is server-rendered with the DSFR head links and the
//! stored color scheme stamped on `<html>`. Cookie routes let the browser
//! change the preference; DSFR fonts and favicons are served as static files
//! under the configured asset prefix.

pub mod color_scheme;
pub mod page;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, put};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let assets_prefix = asset_mount_path(state.assets().base());
    let assets = ServeDir::new(&state.assets_dir);

    let router = Router::new()
        .route("/", get(page::index))
        .route("/api/color-scheme", get(color_scheme::current).delete(color_scheme::clear))
        .route(
            "/api/color-scheme/{scheme}",
            put(color_scheme::set).post(color_scheme::set_and_redirect),
        )
        .route("/healthz", get(healthz))
        .with_state(state);

    let router = match assets_prefix {
        Some(prefix) => router.nest_service(&prefix, assets),
        None => router,
    };
    router.layer(TraceLayer::new_for_http())
}

/// Mount point for locally served assets. `None` when the base is an
/// absolute URL (assets hosted elsewhere) or the site root.
fn asset_mount_path(base: &str) -> Option<String> {
    (base.starts_with('/') && base.len() > 1).then(|| base.to_owned())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
