use serde::{Deserialize, Serialize};

use crate::game::Card;

/// Facts about accepted mutations, broadcast to a room's subscribers so they
/// can refresh their per-viewer snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round has been dealt and play has begun
    GameStarted {
        room_id: String,
        players: Vec<String>,
    },

    /// A seat played cards
    CardsPlayed {
        room_id: String,
        player: String,
        cards: Vec<Card>,
    },

    /// A seat passed
    PlayerPassed { room_id: String, player: String },

    /// A play left exactly one seat holding cards
    RoundEnded {
        room_id: String,
        first_finisher: String,
        loser: String,
    },

    /// The administrator restarted the round
    RoundRestarted {
        room_id: String,
        exchange_pending: bool,
    },

    /// A giver recorded (or replaced) an exchange selection
    ExchangeSubmitted { room_id: String, player: String },

    /// All obligations were satisfied and the swap was committed
    ExchangeCompleted { room_id: String },
}

impl GameEvent {
    /// All events are room-scoped
    pub fn room_id(&self) -> &str {
        match self {
            GameEvent::GameStarted { room_id, .. } => room_id,
            GameEvent::CardsPlayed { room_id, .. } => room_id,
            GameEvent::PlayerPassed { room_id, .. } => room_id,
            GameEvent::RoundEnded { room_id, .. } => room_id,
            GameEvent::RoundRestarted { room_id, .. } => room_id,
            GameEvent::ExchangeSubmitted { room_id, .. } => room_id,
            GameEvent::ExchangeCompleted { room_id } => room_id,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::CardsPlayed { .. } => "cards_played",
            GameEvent::PlayerPassed { .. } => "player_passed",
            GameEvent::RoundEnded { .. } => "round_ended",
            GameEvent::RoundRestarted { .. } => "round_restarted",
            GameEvent::ExchangeSubmitted { .. } => "exchange_submitted",
            GameEvent::ExchangeCompleted { .. } => "exchange_completed",
        }
    }
}
