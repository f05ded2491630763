//! Player hand representation.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// A player's hand.
///
/// Cards are kept sorted by rank (then suit) so the hand renders the same way
/// every time. The order carries no gameplay meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self {
            cards: cards.into_iter().collect(),
        };
        hand.sort();
        hand
    }

    /// Adds a card to the hand.
    ///
    /// A card already in the hand is ignored.
    pub fn add_card(&mut self, card: Card) {
        if let Err(pos) = self.cards.binary_search(&card) {
            self.cards.insert(pos, card);
        }
    }

    /// Adds several cards to the hand.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.add_card(card);
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards of `rank` in the hand.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    /// Returns whether the hand holds at least one card of `rank`.
    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|card| card.rank == rank)
    }

    /// Removes and returns every card of `rank`.
    pub fn take_rank(&mut self, rank: Rank) -> Vec<Card> {
        let (taken, kept) = core::mem::take(&mut self.cards)
            .into_iter()
            .partition(|card| card.rank == rank);
        self.cards = kept;
        taken
    }

    /// Counts the cards of each rank present in the hand.
    #[must_use]
    pub fn rank_counts(&self) -> BTreeMap<Rank, usize> {
        let mut counts = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the distinct ranks in the hand, in display order.
    #[must_use]
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|card| card.rank).collect();
        ranks.dedup();
        ranks
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn sort(&mut self) {
        self.cards.sort_unstable();
        self.cards.dedup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn cards_stay_sorted_and_unique() {
        let mut hand = Hand::from_cards([
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
        ]);
        hand.add_card(Card::new(Rank::Seven, Suit::Clubs));
        hand.add_card(Card::new(Rank::Two, Suit::Hearts));

        let ranks: Vec<Rank> = hand.cards().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, [Rank::Two, Rank::Seven, Rank::King]);
    }

    #[test]
    fn take_rank_leaves_the_rest() {
        let mut hand = Hand::from_cards([
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Four, Suit::Hearts),
        ]);

        let taken = hand.take_rank(Rank::King);
        assert_eq!(taken.len(), 2);
        assert_eq!(hand.len(), 1);
        assert!(!hand.has_rank(Rank::King));
        assert!(hand.take_rank(Rank::Ace).is_empty());
    }
}
