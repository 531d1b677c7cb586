use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cards::{deck, Card, PlayedSet, Rank};
use super::error::GameError;

/// One player's seat at the table. Seat order is the turn rotation and is
/// reassigned at every round restart from the previous round's finish order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub uuid: String,
    pub cards: Vec<Card>,
}

impl Seat {
    pub fn holds_cards(&self) -> bool {
        !self.cards.is_empty()
    }
}

/// The most recent accepted play still on the table. Absent when the current
/// seat is required to lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingPlay {
    pub count: usize,
    pub rank: Rank,
    pub author: usize,
}

/// A directed card transfer owed by one seat to another before play resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeObligation {
    pub giver: usize,
    pub receiver: usize,
    pub count: usize,
}

/// Round-scoped state keyed by phase. Fields that are meaningless in a given
/// phase are structurally absent rather than nullable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PhaseState {
    Play {
        standing: Option<StandingPlay>,
        /// Seats that have passed since the table was last cleared.
        passed: HashSet<usize>,
        /// Seats whose hands reached zero, in the order they did so.
        finished: Vec<usize>,
    },
    RoundEnded {
        finish_order: Vec<usize>,
        loser: usize,
    },
    Exchange {
        obligations: Vec<ExchangeObligation>,
        /// Latest valid selection per giver; resubmission overwrites.
        submissions: HashMap<usize, Vec<Card>>,
    },
}

impl PhaseState {
    pub fn name(&self) -> &'static str {
        match self {
            PhaseState::Play { .. } => "play",
            PhaseState::RoundEnded { .. } => "round_ended",
            PhaseState::Exchange { .. } => "exchange",
        }
    }

    pub(crate) fn fresh_play() -> Self {
        PhaseState::Play {
            standing: None,
            passed: HashSet::new(),
            finished: Vec::new(),
        }
    }
}

/// The authoritative state of one active game's round.
///
/// All mutations are synchronous state transitions: a request either fully
/// applies and commits, or is rejected with no state change. The store is
/// responsible for serializing the read-check-write sequence per round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    id: String,
    deck_count: usize,
    seats: Vec<Seat>,
    current_turn: usize,
    turn_count: u64,
    turn_started_at: DateTime<Utc>,
    discard: Vec<Card>,
    phase: PhaseState,
}

impl Round {
    /// Deals a fresh round: one shuffled pool of `deck_count` decks split
    /// evenly across the players in the given (join) order.
    pub fn deal(
        id: String,
        players: Vec<(String, String)>,
        deck_count: usize,
    ) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::PreconditionFailed(
                "a round needs at least two players".to_string(),
            ));
        }
        if deck_count == 0 {
            return Err(GameError::PreconditionFailed(
                "at least one deck is required".to_string(),
            ));
        }

        let pool = deck::shuffle(&deck::build_deck(deck_count));
        let hands = deck::distribute_evenly(&pool, players.len());
        let seats = players
            .into_iter()
            .zip(hands)
            .map(|((name, uuid), mut cards)| {
                cards.sort();
                Seat { name, uuid, cards }
            })
            .collect();

        Ok(Self {
            id,
            deck_count,
            seats,
            current_turn: 0,
            turn_count: 0,
            turn_started_at: Utc::now(),
            discard: Vec::new(),
            phase: PhaseState::fresh_play(),
        })
    }

    /// Builds a round with predetermined hands. Seat 0 leads.
    pub fn with_hands(id: String, seats: Vec<Seat>, deck_count: usize) -> Self {
        Self {
            id,
            deck_count,
            seats,
            current_turn: 0,
            turn_count: 0,
            turn_started_at: Utc::now(),
            discard: Vec::new(),
            phase: PhaseState::fresh_play(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn deck_count(&self) -> usize {
        self.deck_count
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat_of(&self, uuid: &str) -> Option<usize> {
        self.seats.iter().position(|seat| seat.uuid == uuid)
    }

    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    pub fn turn_started_at(&self) -> DateTime<Utc> {
        self.turn_started_at
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn phase(&self) -> &PhaseState {
        &self.phase
    }

    /// Plays `cards` for `seat`. On success the cards move to the discard
    /// pile, the standing play and turn ownership are updated, and round end
    /// is detected when exactly one seat is left holding cards.
    pub fn play_cards(&mut self, seat: usize, cards: &[Card]) -> Result<(), GameError> {
        let standing = match &self.phase {
            PhaseState::Play { standing, .. } => *standing,
            other => {
                return Err(GameError::WrongPhase(format!(
                    "cards cannot be played during the {} phase",
                    other.name()
                )))
            }
        };
        if seat != self.current_turn {
            return Err(GameError::NotYourTurn);
        }

        let set = PlayedSet::from_cards(cards)?;
        self.ensure_owned(seat, cards)?;
        if let Some(standing) = standing {
            if set.count() < standing.count {
                return Err(GameError::IllegalPlay(format!(
                    "must play at least {} cards",
                    standing.count
                )));
            }
            if set.rank() < standing.rank {
                return Err(GameError::IllegalPlay(format!(
                    "rank {} does not beat {}",
                    set.rank(),
                    standing.rank
                )));
            }
        }

        // No rejection below this point.
        remove_from_hand(&mut self.seats[seat].cards, cards);
        self.discard.extend_from_slice(cards);
        let went_out = !self.seats[seat].holds_cards();

        if went_out {
            if let PhaseState::Play { finished, .. } = &mut self.phase {
                if !finished.contains(&seat) {
                    finished.push(seat);
                }
            }
        }

        // The round is over once a single seat is left holding cards.
        let holding: Vec<usize> = (0..self.seats.len())
            .filter(|&s| self.seats[s].holds_cards())
            .collect();
        if holding.len() == 1 {
            let loser = holding[0];
            let mut finish_order = match &mut self.phase {
                PhaseState::Play { finished, .. } => std::mem::take(finished),
                _ => Vec::new(),
            };
            finish_order.push(loser);
            self.phase = PhaseState::RoundEnded { finish_order, loser };
            self.advance_turn_clock();
            return Ok(());
        }

        if went_out {
            // Going out clears the table; the next seat still holding cards
            // leads fresh.
            let next = self.next_holding(seat).unwrap_or(seat);
            if let PhaseState::Play { standing, passed, .. } = &mut self.phase {
                *standing = None;
                passed.clear();
            }
            self.current_turn = next;
        } else {
            let next = match &self.phase {
                PhaseState::Play { passed, .. } => self.next_eligible(seat, passed),
                _ => None,
            };
            match next {
                Some(next) => {
                    if let PhaseState::Play { standing, .. } = &mut self.phase {
                        *standing = Some(StandingPlay {
                            count: set.count(),
                            rank: set.rank(),
                            author: seat,
                        });
                    }
                    self.current_turn = next;
                }
                None => {
                    // Everyone else is out or has passed: the table clears and
                    // the same seat leads again.
                    if let PhaseState::Play { standing, passed, .. } = &mut self.phase {
                        *standing = None;
                        passed.clear();
                    }
                    self.current_turn = seat;
                }
            }
        }

        self.advance_turn_clock();
        Ok(())
    }

    /// Passes for `seat`. Passing while required to lead is rejected. Once the
    /// rotation would return to the standing play's author after a full
    /// pass-around, the table clears and the author leads again.
    pub fn pass(&mut self, seat: usize) -> Result<(), GameError> {
        let (standing, mut passed) = match &self.phase {
            PhaseState::Play {
                standing, passed, ..
            } => (*standing, passed.clone()),
            other => {
                return Err(GameError::WrongPhase(format!(
                    "passing is not possible during the {} phase",
                    other.name()
                )))
            }
        };
        if seat != self.current_turn {
            return Err(GameError::NotYourTurn);
        }
        let Some(standing) = standing else {
            return Err(GameError::PreconditionFailed(
                "cannot pass when required to lead".to_string(),
            ));
        };

        passed.insert(seat);
        let next = self.next_eligible(seat, &passed);
        match next {
            Some(next)
                if !(next == standing.author && passed.len() >= self.seats.len() - 1) =>
            {
                // Rotation continues; the passed set survives until the table
                // clears, so a seat cannot pass twice in the same lead cycle.
                if let PhaseState::Play { passed, .. } = &mut self.phase {
                    passed.insert(seat);
                }
                self.current_turn = next;
            }
            _ => {
                // A full pass-around: the table clears and the author leads.
                if let PhaseState::Play { standing, passed, .. } = &mut self.phase {
                    *standing = None;
                    passed.clear();
                }
                self.current_turn = standing.author;
            }
        }

        self.advance_turn_clock();
        Ok(())
    }

    /// Rotation search from `from`: the next seat that has not passed since
    /// the last table clear and still holds cards. `from` itself is excluded.
    fn next_eligible(&self, from: usize, passed: &HashSet<usize>) -> Option<usize> {
        let n = self.seats.len();
        (1..n)
            .map(|step| (from + step) % n)
            .find(|seat| !passed.contains(seat) && self.seats[*seat].holds_cards())
    }

    /// Rotation search from `from` ignoring the passed set, used when the
    /// table has just cleared.
    fn next_holding(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..n)
            .map(|step| (from + step) % n)
            .find(|seat| self.seats[*seat].holds_cards())
    }

    /// Multiset containment check of `cards` against the seat's hand.
    pub(crate) fn ensure_owned(&self, seat: usize, cards: &[Card]) -> Result<(), GameError> {
        let mut hand = self.seats[seat].cards.clone();
        for card in cards {
            match hand.iter().position(|c| c == card) {
                Some(at) => {
                    hand.swap_remove(at);
                }
                None => {
                    return Err(GameError::InvalidSelection(format!(
                        "card {card} is not in hand"
                    )))
                }
            }
        }
        Ok(())
    }

    pub(crate) fn seats_mut(&mut self) -> &mut Vec<Seat> {
        &mut self.seats
    }

    pub(crate) fn discard_mut(&mut self) -> &mut Vec<Card> {
        &mut self.discard
    }

    pub(crate) fn set_phase(&mut self, phase: PhaseState) {
        self.phase = phase;
    }

    pub(crate) fn phase_mut(&mut self) -> &mut PhaseState {
        &mut self.phase
    }

    pub(crate) fn set_current_turn(&mut self, seat: usize) {
        self.current_turn = seat;
    }

    /// Bookkeeping for every accepted action: bumps the monotonic turn counter
    /// and stamps the turn start for future time-limit enforcement.
    pub(crate) fn advance_turn_clock(&mut self) {
        self.turn_count += 1;
        self.turn_started_at = Utc::now();
    }
}

pub(crate) fn remove_from_hand(hand: &mut Vec<Card>, cards: &[Card]) {
    for card in cards {
        if let Some(at) = hand.iter().position(|c| c == card) {
            hand.remove(at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ids: &[&str]) -> Vec<Card> {
        ids.iter().map(|id| Card::try_from(*id).unwrap()).collect()
    }

    fn seat(name: &str, ids: &[&str]) -> Seat {
        Seat {
            name: name.to_string(),
            uuid: format!("{name}-uuid"),
            cards: cards(ids),
        }
    }

    fn scripted(seats: Vec<Seat>) -> Round {
        Round::with_hands("table".to_string(), seats, 1)
    }

    fn assert_play_state(
        round: &Round,
        expected_standing: Option<(usize, Rank, usize)>,
        expected_passed: &[usize],
    ) {
        match round.phase() {
            PhaseState::Play {
                standing, passed, ..
            } => {
                assert_eq!(
                    *standing,
                    expected_standing.map(|(count, rank, author)| StandingPlay {
                        count,
                        rank,
                        author
                    })
                );
                let mut got: Vec<usize> = passed.iter().copied().collect();
                got.sort();
                assert_eq!(got, expected_passed);
            }
            other => panic!("expected play phase, got {}", other.name()),
        }
    }

    #[test]
    fn test_deal_splits_pool_evenly_in_seat_order() {
        let players = vec![
            ("alice".to_string(), "a".to_string()),
            ("bob".to_string(), "b".to_string()),
            ("carol".to_string(), "c".to_string()),
        ];
        let round = Round::deal("table".to_string(), players, 1).unwrap();

        let sizes: Vec<usize> = round.seats().iter().map(|s| s.cards.len()).collect();
        assert_eq!(sizes, vec![18, 17, 17]);
        assert_eq!(round.current_turn(), 0);
        assert_eq!(round.turn_count(), 0);
        assert!(round.discard().is_empty());
        assert_eq!(round.phase().name(), "play");

        let mut dealt: Vec<Card> = round
            .seats()
            .iter()
            .flat_map(|s| s.cards.clone())
            .collect();
        dealt.sort();
        let mut full = deck::build_deck(1);
        full.sort();
        assert_eq!(dealt, full);
    }

    #[test]
    fn test_deal_rejects_degenerate_tables() {
        let one = vec![("alice".to_string(), "a".to_string())];
        assert!(matches!(
            Round::deal("table".to_string(), one, 1),
            Err(GameError::PreconditionFailed(_))
        ));

        let two = vec![
            ("alice".to_string(), "a".to_string()),
            ("bob".to_string(), "b".to_string()),
        ];
        assert!(matches!(
            Round::deal("table".to_string(), two, 0),
            Err(GameError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn test_play_rejects_wrong_actor() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H"]),
            seat("bob", &["6C", "8H"]),
        ]);
        let err = round.play_cards(1, &cards(&["6C"])).unwrap_err();
        assert_eq!(err, GameError::NotYourTurn);
    }

    #[test]
    fn test_play_rejects_card_not_in_hand() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H"]),
            seat("bob", &["6C", "8H"]),
        ]);
        let err = round.play_cards(0, &cards(&["AC"])).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection(_)));
        assert_eq!(round.seats()[0].cards.len(), 2);
        assert_eq!(round.turn_count(), 0);
    }

    #[test]
    fn test_play_rejects_duplicate_beyond_multiplicity() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H"]),
            seat("bob", &["6C", "8H"]),
        ]);
        // Only one 5C in hand; asking for two must fail.
        let err = round.play_cards(0, &cards(&["5C", "5C"])).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection(_)));
    }

    #[test]
    fn test_lead_records_standing_play_and_advances() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "5D", "7H"]),
            seat("bob", &["6C", "8H"]),
            seat("carol", &["9C", "9D"]),
        ]);
        round.play_cards(0, &cards(&["5C", "5D"])).unwrap();

        assert_play_state(&round, Some((2, Rank::Five, 0)), &[]);
        assert_eq!(round.current_turn(), 1);
        assert_eq!(round.turn_count(), 1);
        assert_eq!(round.discard(), cards(&["5C", "5D"]).as_slice());
        assert_eq!(round.seats()[0].cards, cards(&["7H"]));
    }

    #[test]
    fn test_follow_must_meet_count_and_rank() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "5D", "7H"]),
            seat("bob", &["4C", "4D", "6C", "6D"]),
            seat("carol", &["9C", "9D"]),
        ]);
        round.play_cards(0, &cards(&["5C", "5D"])).unwrap();

        // Too small.
        let err = round.play_cards(1, &cards(&["6C"])).unwrap_err();
        assert!(matches!(err, GameError::IllegalPlay(_)));
        // Too weak.
        let err = round.play_cards(1, &cards(&["4C", "4D"])).unwrap_err();
        assert!(matches!(err, GameError::IllegalPlay(_)));
        // A pair of sixes beats a pair of fives.
        round.play_cards(1, &cards(&["6C", "6D"])).unwrap();
        assert_play_state(&round, Some((2, Rank::Six, 1)), &[]);
        assert_eq!(round.current_turn(), 2);
    }

    #[test]
    fn test_equal_rank_follows() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H"]),
            seat("bob", &["5D", "8H"]),
        ]);
        round.play_cards(0, &cards(&["5C"])).unwrap();
        // Same rank is "same or stronger".
        round.play_cards(1, &cards(&["5D"])).unwrap();
        assert_play_state(&round, Some((1, Rank::Five, 1)), &[]);
    }

    #[test]
    fn test_wildcards_ride_along() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "5D", "9H"]),
            seat("bob", &["2S", "2H", "7C", "3D"]),
        ]);
        round.play_cards(0, &cards(&["5C", "5D"])).unwrap();
        round.play_cards(1, &cards(&["2S", "2H", "7C"])).unwrap();
        assert_play_state(&round, Some((3, Rank::Seven, 1)), &[]);
    }

    #[test]
    fn test_pass_rejected_when_leading() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H"]),
            seat("bob", &["6C", "8H"]),
        ]);
        let err = round.pass(0).unwrap_err();
        assert!(matches!(err, GameError::PreconditionFailed(_)));
    }

    #[test]
    fn test_two_player_pass_clears_table_and_returns_lead() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "5D", "7H"]),
            seat("bob", &["6C", "8H"]),
        ]);
        round.play_cards(0, &cards(&["5C", "5D"])).unwrap();
        round.pass(1).unwrap();

        // Table cleared, alice leads again with an empty standing play.
        assert_play_state(&round, None, &[]);
        assert_eq!(round.current_turn(), 0);
    }

    #[test]
    fn test_passed_seat_is_skipped_until_table_clears() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H", "7D"]),
            seat("bob", &["6C", "8H"]),
            seat("carol", &["9C", "9D"]),
            seat("dave", &["TC", "TD"]),
        ]);
        round.play_cards(0, &cards(&["5C"])).unwrap();
        round.pass(1).unwrap();
        assert_eq!(round.current_turn(), 2);
        round.play_cards(2, &cards(&["9C"])).unwrap();
        assert_eq!(round.current_turn(), 3);
        round.play_cards(3, &cards(&["TC"])).unwrap();

        // Bob passed since the last clear, so the rotation skips him.
        assert_eq!(round.current_turn(), 0);
        assert_play_state(&round, Some((1, Rank::Ten, 3)), &[1]);
    }

    #[test]
    fn test_full_pass_around_returns_to_author() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H"]),
            seat("bob", &["6C", "8H"]),
            seat("carol", &["9C", "9D"]),
        ]);
        round.play_cards(0, &cards(&["5C"])).unwrap();
        round.pass(1).unwrap();
        assert_eq!(round.current_turn(), 2);
        round.pass(2).unwrap();

        assert_play_state(&round, None, &[]);
        assert_eq!(round.current_turn(), 0);
    }

    #[test]
    fn test_going_out_clears_table_and_next_seat_leads() {
        let mut round = scripted(vec![
            seat("alice", &["5C"]),
            seat("bob", &["6C", "8H"]),
            seat("carol", &["9C", "9D"]),
        ]);
        round.play_cards(0, &cards(&["5C"])).unwrap();

        // Alice went out; bob leads a cleared table; round continues with two
        // seats still holding cards.
        assert_play_state(&round, None, &[]);
        assert_eq!(round.current_turn(), 1);
        match round.phase() {
            PhaseState::Play { finished, .. } => assert_eq!(finished, &vec![0]),
            other => panic!("expected play phase, got {}", other.name()),
        }
    }

    #[test]
    fn test_round_ends_when_one_seat_left_holding() {
        let mut round = scripted(vec![
            seat("alice", &["5C"]),
            seat("bob", &["6C", "8H"]),
        ]);
        round.play_cards(0, &cards(&["5C"])).unwrap();

        match round.phase() {
            PhaseState::RoundEnded { finish_order, loser } => {
                assert_eq!(finish_order, &vec![0, 1]);
                assert_eq!(*loser, 1);
            }
            other => panic!("expected round_ended, got {}", other.name()),
        }

        // Frozen: nobody can act until the round is restarted.
        let err = round.play_cards(1, &cards(&["6C"])).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase(_)));
        let err = round.pass(1).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase(_)));
    }

    #[test]
    fn test_finish_order_accumulates_across_the_round() {
        let mut round = scripted(vec![
            seat("alice", &["5C"]),
            seat("bob", &["6C"]),
            seat("carol", &["9C", "9D"]),
        ]);
        round.play_cards(0, &cards(&["5C"])).unwrap();
        assert_eq!(round.current_turn(), 1);
        round.play_cards(1, &cards(&["6C"])).unwrap();

        match round.phase() {
            PhaseState::RoundEnded { finish_order, loser } => {
                assert_eq!(finish_order, &vec![0, 1, 2]);
                assert_eq!(*loser, 2);
            }
            other => panic!("expected round_ended, got {}", other.name()),
        }
    }

    #[test]
    fn test_table_clear_wipes_passed_flags() {
        // Bob passes, then carol goes out: the clear wipes bob's passed flag
        // before alice's next lead.
        let mut round = scripted(vec![
            seat("alice", &["5C", "5D", "7H"]),
            seat("bob", &["6C", "8H"]),
            seat("carol", &["9C"]),
        ]);
        round.play_cards(0, &cards(&["5C"])).unwrap();
        round.pass(1).unwrap();
        round.play_cards(2, &cards(&["9C"])).unwrap();
        // Carol went out; table cleared; alice (next holding) leads.
        assert_eq!(round.current_turn(), 0);
        round.play_cards(0, &cards(&["5D"])).unwrap();

        // Bob's pass was wiped by the clear, so he is eligible again.
        assert_eq!(round.current_turn(), 1);
        assert_play_state(&round, Some((1, Rank::Five, 0)), &[]);
    }

    #[test]
    fn test_deck_conservation_across_plays() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "5D", "7H"]),
            seat("bob", &["6C", "8H", "2S"]),
        ]);
        let total = |round: &Round| {
            round
                .seats()
                .iter()
                .map(|s| s.cards.len())
                .sum::<usize>()
                + round.discard().len()
        };
        assert_eq!(total(&round), 6);
        round.play_cards(0, &cards(&["5C", "5D"])).unwrap();
        assert_eq!(total(&round), 6);
        round.play_cards(1, &cards(&["2S", "8H"])).unwrap();
        assert_eq!(total(&round), 6);
        round.pass(0).unwrap();
        assert_eq!(total(&round), 6);
    }

    #[test]
    fn test_turn_clock_advances_only_on_accepted_actions() {
        let mut round = scripted(vec![
            seat("alice", &["5C", "7H"]),
            seat("bob", &["6C", "8H"]),
        ]);
        let _ = round.play_cards(0, &cards(&["AC"]));
        assert_eq!(round.turn_count(), 0);
        round.play_cards(0, &cards(&["5C"])).unwrap();
        assert_eq!(round.turn_count(), 1);
        round.pass(1).unwrap();
        assert_eq!(round.turn_count(), 2);
    }

    #[test]
    fn test_seat_lookup_by_uuid() {
        let round = scripted(vec![
            seat("alice", &["5C"]),
            seat("bob", &["6C"]),
        ]);
        assert_eq!(round.seat_of("bob-uuid"), Some(1));
        assert_eq!(round.seat_of("nobody"), None);
        assert_eq!(round.seats()[0].name, "alice");
    }
}
