//! Book detection.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{BOOK_SIZE, Rank};
use crate::hand::Hand;

/// Removes every completed book from `hand`.
///
/// Returns the trimmed hand and the ranks that formed books, in rank order.
/// Only a count of exactly four completes a book.
///
/// # Example
///
/// ```
/// use gofish::{Card, Hand, Rank, Suit, check_for_books};
///
/// let hand = Hand::from_cards([
///     Card::new(Rank::Queen, Suit::Hearts),
///     Card::new(Rank::Queen, Suit::Diamonds),
///     Card::new(Rank::Queen, Suit::Spades),
///     Card::new(Rank::Queen, Suit::Clubs),
///     Card::new(Rank::Two, Suit::Clubs),
/// ]);
/// let (hand, books) = check_for_books(hand);
/// assert_eq!(books, [Rank::Queen]);
/// assert_eq!(hand.len(), 1);
/// ```
#[must_use]
pub fn check_for_books(hand: Hand) -> (Hand, Vec<Rank>) {
    let books: Vec<Rank> = hand
        .rank_counts()
        .into_iter()
        .filter(|&(_, count)| count == BOOK_SIZE)
        .map(|(rank, _)| rank)
        .collect();

    if books.is_empty() {
        return (hand, books);
    }

    let mut hand = hand;
    for &rank in &books {
        hand.take_rank(rank);
    }
    (hand, books)
}
