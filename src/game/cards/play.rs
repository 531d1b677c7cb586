use serde::{Deserialize, Serialize};

use super::basic::{Card, Rank};
use crate::game::error::GameError;

/// A validated selection of cards: the cards as submitted plus the effective
/// rank the table compares against once wildcards are stripped.
///
/// A selection is well formed when, after removing `2`s, exactly one distinct
/// rank remains. Wildcards may pad out a play of any natural rank, but a play
/// consisting solely of wildcards is illegal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedSet {
    cards: Vec<Card>,
    rank: Rank,
}

impl PlayedSet {
    pub fn from_cards(cards: &[Card]) -> Result<Self, GameError> {
        if cards.is_empty() {
            return Err(GameError::InvalidSelection("empty selection".to_string()));
        }

        let mut natural: Option<Rank> = None;
        for card in cards {
            if card.rank.is_wild() {
                continue;
            }
            match natural {
                None => natural = Some(card.rank),
                Some(rank) if rank == card.rank => {}
                Some(rank) => {
                    return Err(GameError::InvalidSelection(format!(
                        "selection mixes ranks {} and {}",
                        rank, card.rank
                    )))
                }
            }
        }

        let rank = natural.ok_or_else(|| {
            GameError::InvalidSelection("wildcards cannot be played alone".to_string())
        })?;

        Ok(Self {
            cards: cards.to_vec(),
            rank,
        })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The effective rank: the unique natural rank of the selection.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::basic::Suit;

    fn cards(ids: &[&str]) -> Vec<Card> {
        ids.iter().map(|id| Card::try_from(*id).unwrap()).collect()
    }

    #[test]
    fn test_empty_selection_rejected() {
        let err = PlayedSet::from_cards(&[]).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection(_)));
    }

    #[test]
    fn test_lone_wildcard_rejected() {
        let err = PlayedSet::from_cards(&cards(&["2S"])).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection(_)));
    }

    #[test]
    fn test_all_wildcards_rejected() {
        let err = PlayedSet::from_cards(&cards(&["2S", "2H", "2D"])).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection(_)));
    }

    #[test]
    fn test_wildcards_plus_one_rank_take_the_natural_rank() {
        let set = PlayedSet::from_cards(&cards(&["2S", "2H", "5C"])).unwrap();
        assert_eq!(set.rank(), Rank::Five);
        assert_eq!(set.count(), 3);
    }

    #[test]
    fn test_mixed_natural_ranks_rejected() {
        let err = PlayedSet::from_cards(&cards(&["5C", "6C"])).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection(_)));

        let err = PlayedSet::from_cards(&cards(&["2S", "5C", "6C"])).unwrap_err();
        assert!(matches!(err, GameError::InvalidSelection(_)));
    }

    #[test]
    fn test_plain_sets() {
        let single = PlayedSet::from_cards(&[Card::new(Rank::King, Suit::Hearts)]).unwrap();
        assert_eq!(single.rank(), Rank::King);
        assert_eq!(single.count(), 1);

        let triple = PlayedSet::from_cards(&cards(&["9C", "9D", "9S"])).unwrap();
        assert_eq!(triple.rank(), Rank::Nine);
        assert_eq!(triple.count(), 3);
    }
}
