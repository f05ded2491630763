//! A Go Fish rules engine and turn orchestrator with optional `no_std` support.
//!
//! The pure half of the crate turns one [`GameState`] into the next:
//! [`start_game`] deals, [`execute_turn`] resolves an ask, [`check_for_books`]
//! removes completed books and [`choose_move`] picks the computer's ask.
//!
//! The [`Game`] type owns the authoritative state, sequences each turn
//! through its phases, plays the computer's turns and reports what happened
//! to an [`EventSink`].
//!
//! # Example
//!
//! ```
//! use gofish::{Game, GameOptions, GameStatus, Pacing};
//!
//! let options = GameOptions::default().with_pacing(Pacing::instant());
//! let game = Game::new(options, 42);
//! let state = game.start();
//! assert_eq!(state.status, GameStatus::InProgress);
//!
//! if let Some(card) = state.human.hand.cards().first() {
//!     let _ = game.ask(card.rank);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod book;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod pacing;
pub mod player;
pub mod rules;
pub mod strategy;
mod sync;

// Re-export main types
pub use book::check_for_books;
pub use card::{BOOK_SIZE, Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, create_deck};
pub use error::{AskError, StrategyError, TurnError};
pub use event::{EventSink, GameEvent, NullSink};
pub use game::{Game, GameState, GameStatus, KnownRanks, TurnReport, Winner};
pub use hand::Hand;
pub use options::{GameOptions, Pacing};
#[cfg(feature = "std")]
pub use pacing::ThreadPacer;
pub use pacing::{NoPacing, Pacer, Phase};
pub use player::{PlayerId, PlayerState};
pub use rules::{
    AskResult, INITIAL_HAND_SIZE, Resolution, TurnOutcome, deal_game, execute_turn, resolve_turn,
    start_game,
};
pub use strategy::{
    ComputerMove, HANDOFF_LINES, LUCKY_LINE, choose_move, handoff_line, reply_line,
};
