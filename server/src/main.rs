#![recursion_limit = "256"]

mod backend;
mod config;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = config::BackendConfig::from_env().expect("backend configuration");
    let client = backend::HttpBackend::from_config(&config).expect("backend client init failed");
    tracing::info!(origin = %config.base_url, "proxying to compliance backend");

    let state = state::AppState::new(Arc::new(client));

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "regiq listening");
    axum::serve(listener, app).await.expect("server failed");
}
