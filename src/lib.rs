// Library crate for the Presidents game server
// This file exposes the public API for integration tests

pub mod api;
pub mod event;
pub mod game;
pub mod room;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use event::{EventBus, GameEvent};
pub use game::{Card, GameError, GameService, GameStateView, Rank, Round, Seat, Suit};
pub use room::{models::RoomModel, repository::RoomRepository};
pub use shared::{AppError, AppState};
