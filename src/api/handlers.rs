use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::game::{GameError, GameStateView};
use crate::room::{JoinRoomResult, RoomModel};
use crate::shared::{AppError, AppState};

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinRoomRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub username: String,
    pub deck_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub username: String,
    pub cards: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ActorRequest {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRequest {
    pub username: String,
    pub cards: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub code: String,
    pub host: String,
    pub players: Vec<String>,
}

impl From<&RoomModel> for RoomResponse {
    fn from(room: &RoomModel) -> Self {
        Self {
            code: room.code.clone(),
            host: room.host.clone(),
            players: room.members.iter().map(|m| m.username.clone()).collect(),
        }
    }
}

pub async fn create_room(
    State(state): State<AppState>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<RoomResponse>, AppError> {
    let room = RoomModel::new(&req.username);
    state.room_repository.create_room(&room).await?;
    Ok(Json(RoomResponse::from(&room)))
}

pub async fn join_room(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<JoinRoomRequest>,
) -> Result<Json<RoomResponse>, AppError> {
    match state
        .room_repository
        .try_join_room(&code, &req.username)
        .await?
    {
        JoinRoomResult::Success(room, _) => Ok(Json(RoomResponse::from(&room))),
        JoinRoomResult::RoomNotFound => {
            Err(GameError::NotFound(format!("room {code} does not exist")).into())
        }
        JoinRoomResult::RoomFull => {
            Err(GameError::PreconditionFailed(format!("room {code} is full")).into())
        }
    }
}

pub async fn start_game(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<StartGameRequest>,
) -> Result<Json<GameStateView>, AppError> {
    let view = state
        .game_service
        .start_game(&code, &req.username, req.deck_count)
        .await?;
    Ok(Json(view))
}

pub async fn play_cards(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<PlayRequest>,
) -> Result<Json<GameStateView>, AppError> {
    let view = state
        .game_service
        .play_cards(&code, &req.username, &req.cards)
        .await?;
    Ok(Json(view))
}

pub async fn pass_turn(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<ActorRequest>,
) -> Result<Json<GameStateView>, AppError> {
    let view = state.game_service.pass(&code, &req.username).await?;
    Ok(Json(view))
}

pub async fn restart_round(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<ActorRequest>,
) -> Result<Json<GameStateView>, AppError> {
    let view = state
        .game_service
        .restart_round(&code, &req.username)
        .await?;
    Ok(Json(view))
}

pub async fn submit_exchange(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(req): Json<ExchangeRequest>,
) -> Result<Json<GameStateView>, AppError> {
    let view = state
        .game_service
        .submit_exchange_selection(&code, &req.username, &req.cards)
        .await?;
    Ok(Json(view))
}

pub async fn game_state(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(viewer): Query<ViewerQuery>,
) -> Result<Json<GameStateView>, AppError> {
    let view = state.game_service.get_view(&code, &viewer.username).await?;
    Ok(Json(view))
}
