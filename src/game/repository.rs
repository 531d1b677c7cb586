use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::GameError;
use super::round::Round;

/// In-memory store of active rounds, keyed by room id.
///
/// `with_round` runs the caller's validate-and-apply closure while holding
/// the write lock, so the read-check-write sequence of one request is
/// serialized against every other request touching the same record. The
/// closure works on a staged copy that is committed only on `Ok`; a rejection
/// leaves the stored record byte-for-byte unchanged.
pub struct GameRepository {
    rounds: Arc<RwLock<HashMap<String, Round>>>,
}

impl Default for GameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository {
    pub fn new() -> Self {
        Self {
            rounds: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, room_id: &str, round: Round) {
        let mut rounds = self.rounds.write().await;
        rounds.insert(room_id.to_string(), round);
    }

    /// Inserts only when no round is active for the room, so two concurrent
    /// start requests cannot both deal.
    pub async fn insert_new(&self, room_id: &str, round: Round) -> Result<(), GameError> {
        let mut rounds = self.rounds.write().await;
        if rounds.contains_key(room_id) {
            return Err(GameError::PreconditionFailed(format!(
                "a round is already active for room {room_id}"
            )));
        }
        rounds.insert(room_id.to_string(), round);
        Ok(())
    }

    pub async fn get(&self, room_id: &str) -> Option<Round> {
        let rounds = self.rounds.read().await;
        rounds.get(room_id).cloned()
    }

    pub async fn contains(&self, room_id: &str) -> bool {
        let rounds = self.rounds.read().await;
        rounds.contains_key(room_id)
    }

    pub async fn remove(&self, room_id: &str) -> Option<Round> {
        let mut rounds = self.rounds.write().await;
        rounds.remove(room_id)
    }

    pub async fn with_round<T>(
        &self,
        room_id: &str,
        f: impl FnOnce(&mut Round) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let mut rounds = self.rounds.write().await;
        let round = rounds
            .get_mut(room_id)
            .ok_or_else(|| GameError::NotFound(format!("no active round for room {room_id}")))?;
        let mut staged = round.clone();
        let out = f(&mut staged)?;
        *round = staged;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::round::Seat;
    use crate::game::Card;

    fn two_seat_round() -> Round {
        Round::with_hands(
            "table".to_string(),
            vec![
                Seat {
                    name: "alice".to_string(),
                    uuid: "alice-uuid".to_string(),
                    cards: vec![Card::try_from("5C").unwrap()],
                },
                Seat {
                    name: "bob".to_string(),
                    uuid: "bob-uuid".to_string(),
                    cards: vec![Card::try_from("6C").unwrap()],
                },
            ],
            1,
        )
    }

    #[tokio::test]
    async fn test_with_round_commits_on_ok() {
        let repo = GameRepository::new();
        repo.insert("table", two_seat_round()).await;

        let played = vec![Card::try_from("5C").unwrap()];
        repo.with_round("table", |round| round.play_cards(0, &played))
            .await
            .unwrap();

        let stored = repo.get("table").await.unwrap();
        assert_eq!(stored.turn_count(), 1);
        assert!(stored.seats()[0].cards.is_empty());
    }

    #[tokio::test]
    async fn test_with_round_discards_staged_state_on_error() {
        let repo = GameRepository::new();
        repo.insert("table", two_seat_round()).await;

        let err = repo
            .with_round("table", |round| {
                // Mutate, then fail: the mutation must not be visible.
                let card = round.seats()[0].cards[0];
                round.play_cards(0, &[card])?;
                Err::<(), _>(GameError::NotYourTurn)
            })
            .await
            .unwrap_err();
        assert_eq!(err, GameError::NotYourTurn);

        let stored = repo.get("table").await.unwrap();
        assert_eq!(stored.turn_count(), 0);
        assert_eq!(stored.seats()[0].cards.len(), 1);
    }

    #[tokio::test]
    async fn test_with_round_unknown_room() {
        let repo = GameRepository::new();
        let err = repo
            .with_round("nowhere", |_| Ok(()))
            .await
            .unwrap_err();
        assert!(matches!(err, GameError::NotFound(_)));
    }
}
