//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches Leptos SSR rendering together with the static
//! surfaces the hydrated client needs: the WASM/JS/CSS bundle under `/pkg`,
//! project images under `/assets`, and a health probe. The contact form posts
//! natively to the confirmation path; that POST is answered with a 303 so the
//! browser follows up with a GET the Leptos router renders. Unknown paths fall
//! through to the Leptos router, which renders its "Page not found." view.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use client::config::CONFIRMATION_PATH;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Health probe, contact form landing, and static file services.
pub fn static_routes(site_root: &Path, assets_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(CONFIRMATION_PATH, post(form_received))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
}

/// Leptos SSR frontend plus static routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), assets = %config.assets_dir.display(), "static roots");

    Ok(static_routes(&site_root_path, &config.assets_dir)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Native contact form POST. The hosting provider's form handler consumes
/// the body upstream; locally the browser is sent on to the confirmation page.
async fn form_received() -> Redirect {
    tracing::info!("contact form posted");
    Redirect::to(CONFIRMATION_PATH)
}
