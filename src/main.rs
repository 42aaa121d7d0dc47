mod config;
mod config_manager;
mod handlers;
mod relay_service;
mod routes;
mod settings;
mod state;
mod websocket;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use config_manager::ConfigResolver;
use relay_service::RelayClient;
use settings::Settings;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("termfolio_backend=debug,tower_http=debug")
        .init();

    let settings = Settings::load();
    info!(
        "serving static frontend from {}, profile source: {}",
        settings.static_dir,
        settings.gist_url.as_deref().unwrap_or("built-in defaults")
    );

    // Resolve the profile before binding the listener: every connection
    // observes the same fully-formed config for the whole session.
    let fetcher = RelayClient::new(settings.relay_base_url.clone());
    let resolver = ConfigResolver::new(Box::new(fetcher));
    let config = resolver.resolve(settings.gist_url.as_deref()).await;

    let app_state = AppState::new(settings.clone(), config);

    let app = Router::new()
        .merge(routes::create_routes(app_state.clone()))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
