use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{RoomMember, RoomModel};
use crate::game::GameError;

/// Result of attempting to join a room
#[derive(Debug, Clone)]
pub enum JoinRoomResult {
    /// Joined (or already a member), with the updated room and the member
    /// record identifying the caller
    Success(RoomModel, RoomMember),
    /// Room is at capacity
    RoomFull,
    /// Room does not exist
    RoomNotFound,
}

/// Indexed lookup and atomic membership mutation for lobby records. The game
/// core only consumes lookups; joining is the transport layer's concern.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create_room(&self, room: &RoomModel) -> Result<(), GameError>;
    async fn get_room(&self, code: &str) -> Result<Option<RoomModel>, GameError>;

    /// Atomically checks capacity and records the member, so concurrent joins
    /// cannot overfill a room. Joining twice with the same username returns
    /// the existing member record.
    async fn try_join_room(&self, code: &str, username: &str)
        -> Result<JoinRoomResult, GameError>;
}

/// In-memory implementation backing development and tests
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<String, RoomModel>>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self, room))]
    async fn create_room(&self, room: &RoomModel) -> Result<(), GameError> {
        let mut rooms = self.rooms.lock().unwrap();
        if rooms.contains_key(&room.code) {
            warn!(room_code = %room.code, "Room code collision");
            return Err(GameError::PreconditionFailed(format!(
                "room {} already exists",
                room.code
            )));
        }
        rooms.insert(room.code.clone(), room.clone());
        debug!(room_code = %room.code, host = %room.host, "Room created");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_room(&self, code: &str) -> Result<Option<RoomModel>, GameError> {
        let rooms = self.rooms.lock().unwrap();
        Ok(rooms.get(code).cloned())
    }

    #[instrument(skip(self))]
    async fn try_join_room(
        &self,
        code: &str,
        username: &str,
    ) -> Result<JoinRoomResult, GameError> {
        let mut rooms = self.rooms.lock().unwrap();
        let room = match rooms.get_mut(code) {
            Some(room) => room,
            None => {
                debug!(room_code = %code, "Room not found");
                return Ok(JoinRoomResult::RoomNotFound);
            }
        };

        if let Some(existing) = room.member(username) {
            debug!(room_code = %code, username = %username, "Already a member");
            return Ok(JoinRoomResult::Success(room.clone(), existing.clone()));
        }
        if room.is_full() {
            debug!(room_code = %code, "Room is full");
            return Ok(JoinRoomResult::RoomFull);
        }

        let member = room.add_member(username);
        debug!(
            room_code = %code,
            username = %username,
            member_count = room.members.len(),
            "Member joined"
        );
        Ok(JoinRoomResult::Success(room.clone(), member))
    }
}
