use super::cards::Card;
use super::error::GameError;
use super::round::{remove_from_hand, ExchangeObligation, PhaseState, Round};

impl Round {
    /// Records `seat`'s selection for its exchange obligation. Resubmitting
    /// before the exchange completes overwrites the earlier selection.
    ///
    /// Returns `true` when this submission satisfied the last open obligation
    /// and the multi-party swap was committed: all selected cards leave their
    /// givers' hands and join the matching receivers' hands in one step, the
    /// exchange state is cleared, and play resumes with the winner leading.
    pub fn submit_exchange(&mut self, seat: usize, cards: &[Card]) -> Result<bool, GameError> {
        let obligation = match self.phase() {
            PhaseState::Exchange { obligations, .. } => {
                obligations.iter().copied().find(|o| o.giver == seat)
            }
            other => {
                return Err(GameError::WrongPhase(format!(
                    "no exchange is in progress during the {} phase",
                    other.name()
                )))
            }
        };
        let Some(obligation) = obligation else {
            return Err(GameError::PreconditionFailed(
                "this seat owes no exchange cards".to_string(),
            ));
        };
        if cards.len() != obligation.count {
            return Err(GameError::InvalidSelection(format!(
                "exchange requires exactly {} cards, got {}",
                obligation.count,
                cards.len()
            )));
        }
        self.ensure_owned(seat, cards)?;

        let complete = match self.phase_mut() {
            PhaseState::Exchange {
                obligations,
                submissions,
            } => {
                submissions.insert(seat, cards.to_vec());
                obligations
                    .iter()
                    .all(|o| submissions.contains_key(&o.giver))
            }
            _ => false,
        };

        if complete {
            self.commit_exchange();
        }
        self.advance_turn_clock();
        Ok(complete)
    }

    /// The atomic multi-party swap: never partially applied. Hands only
    /// change here, after every obligation has a validated selection.
    fn commit_exchange(&mut self) {
        let phase = std::mem::replace(self.phase_mut(), PhaseState::fresh_play());
        let PhaseState::Exchange {
            obligations,
            submissions,
        } = phase
        else {
            return;
        };

        for o in &obligations {
            remove_from_hand(&mut self.seats_mut()[o.giver].cards, &submissions[&o.giver]);
        }
        for o in &obligations {
            let incoming = submissions[&o.giver].clone();
            let receiver = &mut self.seats_mut()[o.receiver];
            receiver.cards.extend(incoming);
            receiver.cards.sort();
        }

        // The winner (seat 0 after reseating) leads the new round.
        self.set_current_turn(0);
    }

    /// The open obligations and which of them already have a selection.
    pub fn exchange_status(&self) -> Option<Vec<(ExchangeObligation, bool)>> {
        match self.phase() {
            PhaseState::Exchange {
                obligations,
                submissions,
            } => Some(
                obligations
                    .iter()
                    .map(|o| (*o, submissions.contains_key(&o.giver)))
                    .collect(),
            ),
            _ => None,
        }
    }
}
