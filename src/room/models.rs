use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Most seats a table supports. The ruleset itself only needs two players.
pub const MAX_PLAYERS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMember {
    pub username: String,
    pub uuid: String,
}

/// A lobby record: who is in the room, in join order, and which member
/// administers it. Join order becomes seat order when the game starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomModel {
    pub code: String,
    pub host: String,
    pub members: Vec<RoomMember>,
}

impl RoomModel {
    /// Creates a room with a generated human-readable code; the host is the
    /// first member.
    pub fn new(host_username: &str) -> Self {
        let code = petname::Petnames::default().generate_one(2, "-");
        Self {
            code,
            host: host_username.to_string(),
            members: vec![RoomMember {
                username: host_username.to_string(),
                uuid: Uuid::new_v4().to_string(),
            }],
        }
    }

    pub fn member(&self, username: &str) -> Option<&RoomMember> {
        self.members.iter().find(|m| m.username == username)
    }

    pub fn is_host(&self, username: &str) -> bool {
        self.host == username
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_PLAYERS
    }

    pub fn add_member(&mut self, username: &str) -> RoomMember {
        if let Some(existing) = self.member(username) {
            return existing.clone();
        }
        let member = RoomMember {
            username: username.to_string(),
            uuid: Uuid::new_v4().to_string(),
        };
        self.members.push(member.clone());
        member
    }
}
