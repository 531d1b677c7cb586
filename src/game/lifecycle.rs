use std::collections::HashMap;

use super::cards::deck;
use super::error::GameError;
use super::round::{ExchangeObligation, PhaseState, Round};

impl Round {
    /// Restarts an ended round: the full pool (all hands plus the discard
    /// pile) is reshuffled and redealt across the seats reseated by the
    /// previous finish order, winner first. When exchange obligations apply
    /// for the player count, the round enters the exchange phase; otherwise
    /// play resumes immediately with the winner leading.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let finish_order = match self.phase() {
            PhaseState::RoundEnded { finish_order, .. } => finish_order.clone(),
            other => {
                return Err(GameError::PreconditionFailed(format!(
                    "cannot restart during the {} phase",
                    other.name()
                )))
            }
        };

        // Reassemble and reshuffle the full deck pool.
        let mut pool: Vec<_> = self.discard_mut().drain(..).collect();
        for seat in self.seats_mut().iter_mut() {
            pool.append(&mut seat.cards);
        }
        let pool = deck::shuffle(&pool);

        // Seat index becomes finish-order rank: seat 0 is the previous
        // winner. An incomplete finish order keeps the prior seating.
        let n = self.seats().len();
        let complete = finish_order.len() == n;
        if complete {
            let reseated: Vec<_> = finish_order
                .iter()
                .map(|&old| self.seats()[old].clone())
                .collect();
            *self.seats_mut() = reseated;
        }

        let hands = deck::distribute_evenly(&pool, n);
        for (seat, mut hand) in self.seats_mut().iter_mut().zip(hands) {
            hand.sort();
            seat.cards = hand;
        }

        let obligations = if complete {
            exchange_obligations(n)
        } else {
            Vec::new()
        };
        let leader = if complete {
            0
        } else {
            finish_order.first().copied().unwrap_or(0)
        };
        self.set_current_turn(leader);
        if obligations.is_empty() {
            self.set_phase(PhaseState::fresh_play());
        } else {
            self.set_phase(PhaseState::Exchange {
                obligations,
                submissions: HashMap::new(),
            });
        }
        self.advance_turn_clock();
        Ok(())
    }
}

/// Exchange sizing by player count, on post-reseat indices (seat 0 = winner,
/// seat n-1 = loser). Two or three players trade one card between winner and
/// loser; four or more add a second pair trading one card between the runner-up
/// ranks, with the winner/loser pair trading two.
pub(crate) fn exchange_obligations(n: usize) -> Vec<ExchangeObligation> {
    if n >= 4 {
        vec![
            ExchangeObligation { giver: 0, receiver: n - 1, count: 2 },
            ExchangeObligation { giver: n - 1, receiver: 0, count: 2 },
            ExchangeObligation { giver: 1, receiver: n - 2, count: 1 },
            ExchangeObligation { giver: n - 2, receiver: 1, count: 1 },
        ]
    } else {
        vec![
            ExchangeObligation { giver: n - 1, receiver: 0, count: 1 },
            ExchangeObligation { giver: 0, receiver: n - 1, count: 1 },
        ]
    }
}
