use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    response::Response,
};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use super::handlers::ViewerQuery;
use crate::game::GameStateView;
use crate::shared::AppState;

/// WebSocket subscription: pushes the caller's projected snapshot after every
/// accepted mutation of the room's round. Incoming frames are ignored; all
/// intents go through the HTTP routes.
pub async fn subscribe(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(viewer): Query<ViewerQuery>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run(state, code, viewer.username, socket))
}

async fn run(state: AppState, code: String, username: String, socket: WebSocket) {
    let mut events = state.event_bus.subscribe(&code).await;
    let (mut outbound, mut inbound) = socket.split();

    // Current state first, so a reloading client catches up immediately.
    if let Ok(view) = state.game_service.get_view(&code, &username).await {
        if send_view(&mut outbound, &view).await.is_err() {
            return;
        }
    }

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(_) | Err(RecvError::Lagged(_)) => {
                    // A lagged receiver resyncs the same way: the snapshot is
                    // always the latest state, not a replayed event.
                    if let Ok(view) = state.game_service.get_view(&code, &username).await {
                        if send_view(&mut outbound, &view).await.is_err() {
                            break;
                        }
                    }
                }
                Err(RecvError::Closed) => break,
            },
            message = inbound.next() => match message {
                Some(Ok(_)) => continue,
                _ => {
                    debug!(room_id = %code, username = %username, "Subscriber disconnected");
                    break;
                }
            },
        }
    }
}

async fn send_view(
    outbound: &mut SplitSink<WebSocket, Message>,
    view: &GameStateView,
) -> Result<(), axum::Error> {
    match serde_json::to_string(view) {
        Ok(payload) => outbound.send(Message::Text(payload)).await,
        Err(_) => Ok(()),
    }
}
