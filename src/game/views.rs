use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cards::Card;
use super::round::{PhaseState, Round};

/// One seat as visible to a particular viewer: everyone sees the count, only
/// the viewer sees their own cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: usize,
    pub name: String,
    pub card_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingPlayView {
    pub count: usize,
    pub rank: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummaryView {
    pub first_finisher: String,
    pub loser: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeStatusView {
    pub giver: String,
    pub receiver: String,
    pub count: usize,
    pub submitted: bool,
}

/// The externally visible snapshot of a round, projected for one viewer.
/// Hand confidentiality lives here: the store pushes one such view per
/// subscriber, never the raw round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateView {
    pub room_id: String,
    pub phase: String,
    pub seats: Vec<SeatView>,
    pub current_turn: String,
    pub turn_count: u64,
    pub turn_started_at: DateTime<Utc>,
    pub standing_play: Option<StandingPlayView>,
    pub discard: Vec<Card>,
    pub passed: Vec<String>,
    pub finish_order: Vec<String>,
    pub round_summary: Option<RoundSummaryView>,
    pub exchange: Option<Vec<ExchangeStatusView>>,
}

impl GameStateView {
    pub fn for_viewer(round: &Round, viewer_uuid: &str) -> Self {
        let name_of = |seat: usize| round.seats()[seat].name.clone();

        let seats = round
            .seats()
            .iter()
            .enumerate()
            .map(|(seat, occupant)| SeatView {
                seat,
                name: occupant.name.clone(),
                card_count: occupant.cards.len(),
                cards: (occupant.uuid == viewer_uuid).then(|| occupant.cards.clone()),
            })
            .collect();

        let mut standing_play = None;
        let mut passed = Vec::new();
        let mut finish_order = Vec::new();
        let mut round_summary = None;
        let mut exchange = None;

        match round.phase() {
            PhaseState::Play {
                standing,
                passed: passed_seats,
                finished,
            } => {
                standing_play = standing.map(|s| StandingPlayView {
                    count: s.count,
                    rank: s.rank.to_string(),
                    author: name_of(s.author),
                });
                passed = (0..round.seats().len())
                    .filter(|seat| passed_seats.contains(seat))
                    .map(name_of)
                    .collect();
                finish_order = finished.iter().copied().map(name_of).collect();
            }
            PhaseState::RoundEnded {
                finish_order: order,
                loser,
            } => {
                finish_order = order.iter().copied().map(name_of).collect();
                round_summary = Some(RoundSummaryView {
                    first_finisher: order.first().copied().map(name_of).unwrap_or_default(),
                    loser: name_of(*loser),
                });
            }
            PhaseState::Exchange { .. } => {
                exchange = round.exchange_status().map(|status| {
                    status
                        .into_iter()
                        .map(|(o, submitted)| ExchangeStatusView {
                            giver: name_of(o.giver),
                            receiver: name_of(o.receiver),
                            count: o.count,
                            submitted,
                        })
                        .collect()
                });
            }
        }

        Self {
            room_id: round.id().to_string(),
            phase: round.phase().name().to_string(),
            seats,
            current_turn: name_of(round.current_turn()),
            turn_count: round.turn_count(),
            turn_started_at: round.turn_started_at(),
            standing_play,
            discard: round.discard().to_vec(),
            passed,
            finish_order,
            round_summary,
            exchange,
        }
    }
}
