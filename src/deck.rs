//! Deck construction, shuffling and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::Hand;

/// The draw pile. The front of the sequence is the next card drawn.
///
/// A deck only ever shrinks; it is never replenished during a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, stored back to front so drawing is a `pop`.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck, rank-major.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self::from_cards(cards)
    }

    /// Creates a deck whose draw order is `cards` from first to last.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place (Fisher–Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Returns the next card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Draws the front card into `hand`.
    ///
    /// Returns `None` and leaves both untouched when the deck is empty.
    pub fn draw_card(&mut self, hand: &mut Hand) -> Option<Card> {
        let card = self.cards.pop()?;
        hand.add_card(card);
        Some(card)
    }

    /// Takes up to `n` cards from the front.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut dealt = self.cards.split_off(keep);
        dealt.reverse();
        dealt
    }

    /// Returns the remaining cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Creates a freshly shuffled 52-card deck.
///
/// # Example
///
/// ```
/// use gofish::{DECK_SIZE, create_deck};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let deck = create_deck(&mut rng);
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[must_use]
pub fn create_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let mut deck = Deck::standard();
    deck.shuffle(rng);
    deck
}
