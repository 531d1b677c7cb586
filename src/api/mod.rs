pub mod handlers;
pub mod subscribe;

use axum::routing::{get, post};
use axum::Router;

use crate::shared::AppState;

/// The HTTP/WebSocket surface. Handlers stay thin: deserialize, call the
/// service, let `AppError` shape the response.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rooms", post(handlers::create_room))
        .route("/rooms/:code/join", post(handlers::join_room))
        .route("/rooms/:code/start", post(handlers::start_game))
        .route("/rooms/:code/play", post(handlers::play_cards))
        .route("/rooms/:code/pass", post(handlers::pass_turn))
        .route("/rooms/:code/restart", post(handlers::restart_round))
        .route("/rooms/:code/exchange", post(handlers::submit_exchange))
        .route("/rooms/:code/state", get(handlers::game_state))
        .route("/rooms/:code/subscribe", get(subscribe::subscribe))
        .with_state(state)
}
