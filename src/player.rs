//! Player identities and per-player state.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{BOOK_SIZE, Rank};
use crate::hand::Hand;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerId {
    /// The human player.
    #[default]
    Human,
    /// The computer opponent.
    Computer,
}

impl PlayerId {
    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// Returns the display name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Computer => "Computer",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's hand and completed books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Which seat this is.
    pub id: PlayerId,
    /// Cards held.
    pub hand: Hand,
    /// Completed books, in completion order.
    pub books: Vec<Rank>,
}

impl PlayerState {
    /// Creates a player with an empty hand and no books.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
            books: Vec::new(),
        }
    }

    /// Creates a player holding `hand`.
    #[must_use]
    pub const fn with_hand(id: PlayerId, hand: Hand) -> Self {
        Self {
            id,
            hand,
            books: Vec::new(),
        }
    }

    /// Number of cards this player accounts for, books included.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + BOOK_SIZE * self.books.len()
    }
}
