pub mod models;
pub mod repository;

pub use models::{RoomMember, RoomModel};
pub use repository::{InMemoryRoomRepository, JoinRoomResult, RoomRepository};
