use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use super::events::GameEvent;

/// Per-room broadcast channels carrying accepted-mutation facts to everyone
/// subscribed to a game's state.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<GameEvent>>>>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Emits an event to all subscribers of a room, creating the channel on
    /// first use.
    pub async fn emit(&self, room_id: &str, event: GameEvent) {
        let channels = self.channels.read().await;
        if let Some(sender) = channels.get(room_id) {
            match sender.send(event) {
                Ok(receivers) => {
                    debug!(room_id = %room_id, receivers, "Game event emitted");
                }
                Err(_) => {
                    debug!(room_id = %room_id, "Game event emitted with no receivers");
                }
            }
            return;
        }
        drop(channels);

        let mut channels = self.channels.write().await;
        let sender = channels
            .entry(room_id.to_string())
            .or_insert_with(|| broadcast::channel(100).0);
        if sender.send(event).is_err() {
            debug!(room_id = %room_id, "Game event emitted with no receivers");
        }
    }

    /// Subscribes to a room's events, creating the channel on first use.
    pub async fn subscribe(&self, room_id: &str) -> broadcast::Receiver<GameEvent> {
        let channels = self.channels.read().await;
        if let Some(sender) = channels.get(room_id) {
            return sender.subscribe();
        }
        drop(channels);

        let mut channels = self.channels.write().await;
        channels
            .entry(room_id.to_string())
            .or_insert_with(|| broadcast::channel(100).0)
            .subscribe()
    }
}
