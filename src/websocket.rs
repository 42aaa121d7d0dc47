use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};
use futures_util::{SinkExt, StreamExt};

use crate::handlers;
use crate::state::{AppState, ClientSession};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("new terminal connection: {}", client_uid);

    let session = ClientSession {
        client_uid: client_uid.clone(),
        connected_at: Utc::now(),
    };
    state.client_sessions.insert(client_uid.clone(), session);

    let (mut sender, mut receiver) = socket.split();

    // Push the resolved profile and the welcome panel before any input,
    // so the terminal can render its prompt and hero section.
    let initial_messages = vec![
        json!({
            "type": "connection-ack",
            "client_uid": client_uid,
        }),
        json!({
            "type": "profile",
            "config": state.config,
        }),
        handlers::dispatch_command(&state, "welcome"),
    ];

    for msg in initial_messages {
        if let Err(e) = sender.send(Message::Text(msg.to_string())).await {
            error!("failed to send initial message: {}", e);
            state.client_sessions.remove(&client_uid);
            return;
        }
    }

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Err(e) =
                    handlers::handle_message(&state, &client_uid, &text, &mut sender).await
                {
                    error!("error handling message: {}", e);
                }
            }
            Ok(Message::Close(_)) => {
                info!("client {} disconnected", client_uid);
                break;
            }
            Err(e) => {
                error!("websocket error: {}", e);
                break;
            }
            _ => {}
        }
    }

    if let Some((_, session)) = state.client_sessions.remove(&client_uid) {
        info!(
            "cleaned up client {} (connected at {})",
            session.client_uid, session.connected_at
        );
    }
}
