//! 活跃连接注册表

use axum::extract::ws::Message;
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Live realtime connections keyed by connection id.
///
/// Each connection is represented by the sending half of its outbound queue; a writer task
/// owned by the socket drains the queue into the websocket.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: DashMap<String, UnboundedSender<Message>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, connection_id: &str, sender: UnboundedSender<Message>) {
        self.connections.insert(connection_id.to_string(), sender);
        debug!(connection_id, active = self.connections.len(), "Connection registered");
    }

    pub fn deregister(&self, connection_id: &str) -> bool {
        let removed = self.connections.remove(connection_id).is_some();
        debug!(connection_id, active = self.connections.len(), "Connection deregistered");
        removed
    }

    /// Queue `message` on one connection.
    pub fn send_to(&self, connection_id: &str, message: &Value) -> bool {
        self.connections
            .get(connection_id)
            .is_some_and(|sender| sender.send(Message::Text(message.to_string())).is_ok())
    }

    /// Queue `message` on every live connection and return how many accepted it.
    ///
    /// A connection whose queue is closed is skipped; delivery to the rest continues.
    pub fn broadcast(&self, message: &Value) -> usize {
        let payload = message.to_string();
        let senders: Vec<_> = self
            .connections
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        senders
            .into_iter()
            .filter(|sender| sender.send(Message::Text(payload.clone())).is_ok())
            .count()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
