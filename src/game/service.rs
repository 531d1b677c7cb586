use std::sync::Arc;
use tracing::{info, instrument};

use super::cards::Card;
use super::error::GameError;
use super::repository::GameRepository;
use super::round::{PhaseState, Round, Seat};
use super::views::GameStateView;
use crate::event::{EventBus, GameEvent};
use crate::room::{RoomMember, RoomModel, RoomRepository};

/// The intents API. Each method resolves the caller from a room code and
/// username, executes the state transition atomically against the stored
/// round, and notifies the room's subscribers on success. The returned view
/// is projected for the caller.
pub struct GameService {
    rounds: GameRepository,
    rooms: Arc<dyn RoomRepository>,
    events: EventBus,
}

impl GameService {
    pub fn new(rooms: Arc<dyn RoomRepository>, events: EventBus) -> Self {
        Self {
            rounds: GameRepository::new(),
            rooms,
            events,
        }
    }

    /// Deals the first round for a room's lobby. Host only; join order
    /// becomes seat order.
    #[instrument(skip(self))]
    pub async fn start_game(
        &self,
        room_code: &str,
        username: &str,
        deck_count: Option<usize>,
    ) -> Result<GameStateView, GameError> {
        let (room, member) = self.resolve_member(room_code, username).await?;
        if !room.is_host(username) {
            return Err(GameError::Unauthorized(format!(
                "only {} may start the game",
                room.host
            )));
        }

        let players: Vec<(String, String)> = room
            .members
            .iter()
            .map(|m| (m.username.clone(), m.uuid.clone()))
            .collect();
        let names: Vec<String> = room.members.iter().map(|m| m.username.clone()).collect();

        let round = Round::deal(room.code.clone(), players, deck_count.unwrap_or(1))?;
        let view = GameStateView::for_viewer(&round, &member.uuid);
        self.rounds.insert_new(&room.code, round).await?;

        info!(room_id = %room.code, players = names.len(), "Game started");
        self.events
            .emit(
                &room.code,
                GameEvent::GameStarted {
                    room_id: room.code.clone(),
                    players: names,
                },
            )
            .await;
        Ok(view)
    }

    /// Deals a round with predetermined hands, in the given seat order. Host
    /// only; every listed player must be a room member.
    pub async fn start_game_with_hands(
        &self,
        room_code: &str,
        username: &str,
        hands: Vec<(String, Vec<Card>)>,
        deck_count: usize,
    ) -> Result<GameStateView, GameError> {
        let (room, member) = self.resolve_member(room_code, username).await?;
        if !room.is_host(username) {
            return Err(GameError::Unauthorized(format!(
                "only {} may start the game",
                room.host
            )));
        }

        let mut seats = Vec::with_capacity(hands.len());
        for (player, cards) in hands {
            let m = room.member(&player).ok_or_else(|| {
                GameError::NotFound(format!("{player} is not a member of room {room_code}"))
            })?;
            seats.push(Seat {
                name: m.username.clone(),
                uuid: m.uuid.clone(),
                cards,
            });
        }
        if seats.len() < 2 {
            return Err(GameError::PreconditionFailed(
                "a round needs at least two players".to_string(),
            ));
        }

        let round = Round::with_hands(room.code.clone(), seats, deck_count);
        let view = GameStateView::for_viewer(&round, &member.uuid);
        self.rounds.insert_new(&room.code, round).await?;
        Ok(view)
    }

    /// The play intent: moves the selected cards from the caller's hand to
    /// the discard pile and advances the turn.
    #[instrument(skip(self))]
    pub async fn play_cards(
        &self,
        room_code: &str,
        username: &str,
        card_ids: &[String],
    ) -> Result<GameStateView, GameError> {
        let (room, member) = self.resolve_member(room_code, username).await?;
        let cards = parse_cards(card_ids)?;

        let (view, ended) = self
            .rounds
            .with_round(&room.code, |round| {
                let seat = seat_of(round, &member)?;
                round.play_cards(seat, &cards)?;
                let ended = match round.phase() {
                    PhaseState::RoundEnded { finish_order, loser } => {
                        let name = |s: usize| round.seats()[s].name.clone();
                        Some((
                            finish_order.first().copied().map(name).unwrap_or_default(),
                            round.seats()[*loser].name.clone(),
                        ))
                    }
                    _ => None,
                };
                Ok((GameStateView::for_viewer(round, &member.uuid), ended))
            })
            .await?;

        self.events
            .emit(
                &room.code,
                GameEvent::CardsPlayed {
                    room_id: room.code.clone(),
                    player: username.to_string(),
                    cards,
                },
            )
            .await;
        if let Some((first_finisher, loser)) = ended {
            info!(room_id = %room.code, loser = %loser, "Round ended");
            self.events
                .emit(
                    &room.code,
                    GameEvent::RoundEnded {
                        room_id: room.code.clone(),
                        first_finisher,
                        loser,
                    },
                )
                .await;
        }
        Ok(view)
    }

    /// The pass intent.
    #[instrument(skip(self))]
    pub async fn pass(&self, room_code: &str, username: &str) -> Result<GameStateView, GameError> {
        let (room, member) = self.resolve_member(room_code, username).await?;

        let view = self
            .rounds
            .with_round(&room.code, |round| {
                let seat = seat_of(round, &member)?;
                round.pass(seat)?;
                Ok(GameStateView::for_viewer(round, &member.uuid))
            })
            .await?;

        self.events
            .emit(
                &room.code,
                GameEvent::PlayerPassed {
                    room_id: room.code.clone(),
                    player: username.to_string(),
                },
            )
            .await;
        Ok(view)
    }

    /// The restart intent. Administrator only; valid only once the round has
    /// ended.
    #[instrument(skip(self))]
    pub async fn restart_round(
        &self,
        room_code: &str,
        username: &str,
    ) -> Result<GameStateView, GameError> {
        let (room, member) = self.resolve_member(room_code, username).await?;
        if !room.is_host(username) {
            return Err(GameError::Unauthorized(format!(
                "only {} may restart the round",
                room.host
            )));
        }

        let (view, exchange_pending) = self
            .rounds
            .with_round(&room.code, |round| {
                round.restart()?;
                let pending = matches!(round.phase(), PhaseState::Exchange { .. });
                Ok((GameStateView::for_viewer(round, &member.uuid), pending))
            })
            .await?;

        info!(room_id = %room.code, exchange_pending, "Round restarted");
        self.events
            .emit(
                &room.code,
                GameEvent::RoundRestarted {
                    room_id: room.code.clone(),
                    exchange_pending,
                },
            )
            .await;
        Ok(view)
    }

    /// The exchange intent: records the caller's selection for their
    /// obligation, committing the full swap once the last obligation is met.
    #[instrument(skip(self))]
    pub async fn submit_exchange_selection(
        &self,
        room_code: &str,
        username: &str,
        card_ids: &[String],
    ) -> Result<GameStateView, GameError> {
        let (room, member) = self.resolve_member(room_code, username).await?;
        let cards = parse_cards(card_ids)?;

        let (view, complete) = self
            .rounds
            .with_round(&room.code, |round| {
                let seat = seat_of(round, &member)?;
                let complete = round.submit_exchange(seat, &cards)?;
                Ok((GameStateView::for_viewer(round, &member.uuid), complete))
            })
            .await?;

        self.events
            .emit(
                &room.code,
                GameEvent::ExchangeSubmitted {
                    room_id: room.code.clone(),
                    player: username.to_string(),
                },
            )
            .await;
        if complete {
            info!(room_id = %room.code, "Exchange completed");
            self.events
                .emit(
                    &room.code,
                    GameEvent::ExchangeCompleted {
                        room_id: room.code.clone(),
                    },
                )
                .await;
        }
        Ok(view)
    }

    /// Read-only snapshot for reload and resubscription.
    pub async fn get_view(
        &self,
        room_code: &str,
        username: &str,
    ) -> Result<GameStateView, GameError> {
        let (room, member) = self.resolve_member(room_code, username).await?;
        let round = self.rounds.get(&room.code).await.ok_or_else(|| {
            GameError::NotFound(format!("no active round for room {room_code}"))
        })?;
        Ok(GameStateView::for_viewer(&round, &member.uuid))
    }

    /// The raw round record, for tests and diagnostics.
    pub async fn round(&self, room_code: &str) -> Option<Round> {
        self.rounds.get(room_code).await
    }

    async fn resolve_member(
        &self,
        room_code: &str,
        username: &str,
    ) -> Result<(RoomModel, RoomMember), GameError> {
        let room = self
            .rooms
            .get_room(room_code)
            .await?
            .ok_or_else(|| GameError::NotFound(format!("room {room_code} does not exist")))?;
        let member = room.member(username).cloned().ok_or_else(|| {
            GameError::NotFound(format!("{username} is not a member of room {room_code}"))
        })?;
        Ok((room, member))
    }
}

fn seat_of(round: &Round, member: &RoomMember) -> Result<usize, GameError> {
    round.seat_of(&member.uuid).ok_or_else(|| {
        GameError::NotFound(format!("{} has no seat in this round", member.username))
    })
}

fn parse_cards(card_ids: &[String]) -> Result<Vec<Card>, GameError> {
    card_ids
        .iter()
        .map(|id| {
            Card::try_from(id.as_str())
                .map_err(|bad| GameError::InvalidSelection(format!("unrecognized card id: {bad}")))
        })
        .collect()
}
