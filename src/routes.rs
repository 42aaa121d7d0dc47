use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.settings.static_dir.clone();

    Router::new()
        // WebSocket command channel for the terminal frontend
        .route("/client-ws", get(websocket_handler))
        // Health check
        .route("/api/health", get(health_check))
        // Read-only accessor for the resolved profile
        .route("/api/config", get(get_config))
        // Static frontend
        .fallback_service(ServeDir::new(static_dir))
}

async fn websocket_handler(
    ws: axum::extract::ws::WebSocketUpgrade,
    State(state): State<AppState>,
) -> axum::response::Response {
    crate::websocket::websocket_handler(ws, State(state)).await
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "clients": state.client_sessions.len(),
    }))
}

async fn get_config(State(state): State<AppState>) -> Json<Config> {
    Json(state.config.clone())
}
