//! Game state types.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::string::String;

use crate::card::Rank;
use crate::deck::Deck;
use crate::player::{PlayerId, PlayerState};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// No game has been started yet.
    #[default]
    Lobby,
    /// Turns are being played.
    InProgress,
    /// The game has ended; the state is read-only.
    Finished,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The human has more books.
    Human,
    /// The computer has more books.
    Computer,
    /// Both players have the same number of books.
    Tie,
}

/// Ranks the computer associates with the human's hand.
///
/// A rank is added when the human asks for it, not when it is proven to be
/// held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownRanks(BTreeSet<Rank>);

impl KnownRanks {
    /// Creates an empty memory.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Remembers `rank`. Returns `false` if it was already known.
    pub fn insert(&mut self, rank: Rank) -> bool {
        self.0.insert(rank)
    }

    /// Forgets `rank`.
    pub fn remove(&mut self, rank: Rank) -> bool {
        self.0.remove(&rank)
    }

    /// Returns whether `rank` is remembered.
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.0.contains(&rank)
    }

    /// Iterates over remembered ranks in rank order.
    pub fn iter(&self) -> impl Iterator<Item = Rank> + '_ {
        self.0.iter().copied()
    }

    /// Returns the number of remembered ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether nothing is remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Rank> for KnownRanks {
    fn from_iter<I: IntoIterator<Item = Rank>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A snapshot of the whole game.
///
/// Transitions never mutate a snapshot in place; they return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The draw pile.
    pub deck: Deck,
    /// The human player.
    pub human: PlayerState,
    /// The computer player.
    pub computer: PlayerState,
    /// Whose turn it is.
    pub turn: PlayerId,
    /// Lifecycle status.
    pub status: GameStatus,
    /// Human-readable description of the last thing that happened.
    pub message: String,
    /// Result once the game is finished.
    pub winner: Option<Winner>,
    /// The computer's memory of the human's ranks.
    pub known_ranks: KnownRanks,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            deck: Deck::default(),
            human: PlayerState::new(PlayerId::Human),
            computer: PlayerState::new(PlayerId::Computer),
            turn: PlayerId::Human,
            status: GameStatus::Lobby,
            message: String::from("Welcome to Go Fish!"),
            winner: None,
            known_ranks: KnownRanks::new(),
        }
    }
}

impl GameState {
    /// Returns the state of `id`.
    #[must_use]
    pub const fn player(&self, id: PlayerId) -> &PlayerState {
        match id {
            PlayerId::Human => &self.human,
            PlayerId::Computer => &self.computer,
        }
    }

    /// Returns the mutable state of `id`.
    pub const fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        match id {
            PlayerId::Human => &mut self.human,
            PlayerId::Computer => &mut self.computer,
        }
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Counts every card in the deck, both hands and all books.
    ///
    /// Equals [`DECK_SIZE`](crate::DECK_SIZE) for every state reachable from a dealt game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.human.card_count() + self.computer.card_count()
    }

    /// Returns whether the end condition holds: the deck or either hand is
    /// empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.is_empty() || self.human.hand.is_empty() || self.computer.hand.is_empty()
    }

    /// Compares book counts.
    #[must_use]
    pub fn leader(&self) -> Winner {
        match self.human.books.len().cmp(&self.computer.books.len()) {
            core::cmp::Ordering::Greater => Winner::Human,
            core::cmp::Ordering::Less => Winner::Computer,
            core::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    /// Finishes an in-progress game whose end condition holds.
    ///
    /// Any other state is returned unchanged.
    #[must_use]
    pub fn check_game_over(self) -> Self {
        if self.status != GameStatus::InProgress || !self.is_over() {
            return self;
        }

        let winner = self.leader();
        Self {
            status: GameStatus::Finished,
            winner: Some(winner),
            ..self
        }
    }
}
