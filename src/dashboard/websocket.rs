//! WebSocket handler for live system-metric updates

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use crate::api::AppState;

/// Largest message forwarded to a client.
const MAX_MESSAGE_BYTES: usize = 10 * 1024;

/// Handles WebSocket upgrade requests for live dashboard updates
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handles an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    let mut rx = state.ws_broadcast.subscribe();

    let send_task = tokio::spawn(async move {
        loop {
            let update = match rx.recv().await {
                Ok(update) => update,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "WebSocket client lagging, dropped updates");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            match serde_json::to_string(&update) {
                Ok(json) => {
                    if json.len() > MAX_MESSAGE_BYTES {
                        tracing::warn!(
                            "WebSocket message exceeds 10KB limit ({}B), skipping",
                            json.len()
                        );
                        continue;
                    }

                    if sender.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize WebSocket update: {}", e);
                }
            }
        }
    });

    // axum answers pings; only a close matters here
    let recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }
}
