use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::event::EventBus;
use crate::game::{GameError, GameService};
use crate::room::RoomRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub room_repository: Arc<dyn RoomRepository>,
    pub game_service: Arc<GameService>,
    pub event_bus: EventBus,
}

impl AppState {
    pub fn new(room_repository: Arc<dyn RoomRepository>, event_bus: EventBus) -> Self {
        let game_service = Arc::new(GameService::new(room_repository.clone(), event_bus.clone()));
        Self {
            room_repository,
            game_service,
            event_bus,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Game(err) => {
                let status = match &err {
                    GameError::NotFound(_) => StatusCode::NOT_FOUND,
                    GameError::Unauthorized(_) => StatusCode::FORBIDDEN,
                    GameError::InvalidSelection(_) | GameError::IllegalPlay(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    GameError::WrongPhase(_)
                    | GameError::NotYourTurn
                    | GameError::PreconditionFailed(_) => StatusCode::CONFLICT,
                };
                (status, err.to_string())
            }
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                GameError::NotFound("room".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                GameError::Unauthorized("nope".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (GameError::NotYourTurn, StatusCode::CONFLICT),
            (
                GameError::WrongPhase("exchange".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                GameError::InvalidSelection("empty".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                GameError::IllegalPlay("too weak".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                GameError::PreconditionFailed("not ended".to_string()),
                StatusCode::CONFLICT,
            ),
        ];
        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
