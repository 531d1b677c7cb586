use rand::seq::SliceRandom;

use super::basic::Card;

/// Assembles `deck_count` concatenated standard 52-card sets. Deterministic,
/// no shuffling.
pub fn build_deck(deck_count: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_count * 52);
    for _ in 0..deck_count {
        cards.extend(Card::all());
    }
    cards
}

/// Uniform random permutation of `cards`. The input is left untouched.
pub fn shuffle(cards: &[Card]) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(&mut rand::rng());
    shuffled
}

/// Splits `cards` into `n` contiguous slices of `floor(len / n)` cards, the
/// first `len % n` slices receiving one extra. Slice `i` goes to seat `i`, so
/// which seats receive the extra cards is reproducible.
pub fn distribute_evenly(cards: &[Card], n: usize) -> Vec<Vec<Card>> {
    let base = cards.len() / n;
    let extra = cards.len() % n;
    let mut slices = Vec::with_capacity(n);
    let mut start = 0;
    for seat in 0..n {
        let take = base + usize::from(seat < extra);
        slices.push(cards[start..start + take].to_vec());
        start += take;
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn test_build_deck_multiplicity(#[case] deck_count: usize) {
        let deck = build_deck(deck_count);
        assert_eq!(deck.len(), deck_count * 52);

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in &deck {
            *counts.entry(*card).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&count| count == deck_count));
    }

    #[test]
    fn test_shuffle_is_a_permutation_and_does_not_mutate() {
        let deck = build_deck(1);
        let before = deck.clone();
        let shuffled = shuffle(&deck);

        assert_eq!(deck, before);
        let mut a = shuffled;
        let mut b = deck;
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[rstest]
    #[case(52, 3, vec![18, 17, 17])]
    #[case(52, 4, vec![13, 13, 13, 13])]
    #[case(52, 5, vec![11, 11, 10, 10, 10])]
    #[case(104, 6, vec![18, 18, 17, 17, 17, 17])]
    fn test_distribute_evenly_sizes(
        #[case] len: usize,
        #[case] n: usize,
        #[case] expected: Vec<usize>,
    ) {
        let deck = build_deck(2);
        let slices = distribute_evenly(&deck[..len], n);
        let sizes: Vec<usize> = slices.iter().map(|s| s.len()).collect();
        assert_eq!(sizes, expected);
    }

    #[test]
    fn test_distribute_evenly_is_contiguous_in_seat_order() {
        let deck = build_deck(1);
        let slices = distribute_evenly(&deck, 3);
        let rejoined: Vec<Card> = slices.into_iter().flatten().collect();
        assert_eq!(rejoined, deck);
    }
}
