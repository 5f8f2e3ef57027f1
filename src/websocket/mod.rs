//! WebSocket Handler Module
//!
//! Keepalive channel: every inbound data frame is answered with `{"type":"pong"}`. The
//! same connections receive server broadcasts such as newly generated countries.

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{SinkExt, Stream, StreamExt};
use serde_json::{Value, json};
use std::fmt::Display;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error, info};

use crate::api::app_state::AppState;

pub mod registry;

pub use registry::ConnectionRegistry;

pub fn pong() -> Value {
    json!({"type": "pong"})
}

/// WebSocket handler using Axum's WebSocket support
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let connection_id = uuid::Uuid::new_v4().to_string();
    let (mut sink, stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    let writer_id = connection_id.clone();
    let writer = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if let Err(e) = sink.send(message).await {
                debug!("WebSocket send failed for {}: {}", writer_id, e);
                break;
            }
        }
    });

    serve_connection(&state.connections, &connection_id, tx, stream).await;
    writer.abort();
}

/// Runs one connection from registration to deregistration.
///
/// Data frames are answered with a pong on `outbound`. The loop ends on a close frame, a
/// read error or the end of `inbound`.
pub async fn serve_connection<S, E>(
    connections: &ConnectionRegistry,
    connection_id: &str,
    outbound: UnboundedSender<Message>,
    mut inbound: S,
) where
    S: Stream<Item = Result<Message, E>> + Unpin,
    E: Display,
{
    connections.register(connection_id, outbound);
    info!("New WebSocket connection: {}", connection_id);

    while let Some(frame) = inbound.next().await {
        match frame {
            Ok(Message::Text(_)) | Ok(Message::Binary(_)) => {
                connections.send_to(connection_id, &pong());
            }
            Ok(Message::Close(_)) => {
                debug!("Client initiated close for {}", connection_id);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!("WebSocket error for {}: {}", connection_id, e);
                break;
            }
        }
    }

    connections.deregister(connection_id);
    info!("WebSocket connection closed: {}", connection_id);
}
