//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the API proxy routes together with Leptos SSR
//! rendering under a single Axum router. The marketing pages and dashboard
//! are server-rendered and hydrated from `/pkg` assets; everything under
//! `/api` is a pass-through proxy to the compliance backend.

pub mod chat;
pub mod files;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::BackendReply;
use crate::state::AppState;

/// API proxy routes plus the health probe.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/files", get(files::list_files))
        .route("/api/files/{filename}", delete(files::delete_file))
        .route("/api/files/upload", post(files::upload_file))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application router: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// RELAY HELPERS
// =============================================================================

/// Relay a JSON-endpoint backend reply to the client.
///
/// Success passes the backend body through unchanged; a backend error status
/// is relayed with the body wrapped in the route's error envelope. The raw
/// backend payload is only ever logged, never reshaped.
pub(crate) fn relay_json(reply: BackendReply, wrap_error: &str) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if reply.is_success() {
        return (status, Json(reply.body)).into_response();
    }

    tracing::warn!(status = reply.status, body = %reply.body, "backend returned error");
    let envelope = serde_json::json!({ "error": wrap_error, "details": reply.body });
    (status, Json(envelope)).into_response()
}

/// The fixed 500 envelope for transport and parse failures. The underlying
/// error detail stays in server logs only.
pub(crate) fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}
