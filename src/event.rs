//! Notifications emitted by the orchestrator.
//!
//! Sinks are fire-and-forget observers (sound, speech, animation). They
//! receive events after the state they describe has been committed and
//! cannot influence the game.

extern crate alloc;

use alloc::string::String;

use crate::card::{Card, Rank};
use crate::game::Winner;
use crate::player::PlayerId;

/// Something observable happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game was dealt.
    GameStarted,
    /// A player asked for a rank.
    AskIssued {
        /// Who asked.
        asker: PlayerId,
        /// The rank asked for.
        rank: Rank,
        /// What the computer said while asking.
        chat: Option<String>,
    },
    /// The defender holds the rank.
    MatchFound {
        /// Who asked.
        asker: PlayerId,
        /// The rank asked for.
        rank: Rank,
        /// How many cards the defender holds.
        count: usize,
        /// The computer's answer, when the human asked.
        chat: Option<String>,
    },
    /// The defender holds none of the rank.
    GoFish {
        /// Who asked.
        asker: PlayerId,
        /// The rank asked for.
        rank: Rank,
        /// The computer's answer, when the human asked.
        chat: Option<String>,
    },
    /// The asker drew the rank they asked for.
    LuckyFind {
        /// Who drew.
        player: PlayerId,
        /// The card drawn.
        card: Card,
        /// What the computer said, when it was the one drawing.
        chat: Option<String>,
    },
    /// A player completed a book.
    BookCompleted {
        /// Who completed it.
        player: PlayerId,
        /// The rank of the book.
        rank: Rank,
    },
    /// The turn passed to the other player.
    TurnChanged {
        /// Who is up now.
        to: PlayerId,
        /// What the computer said, when handing the turn back to the human.
        chat: Option<String>,
    },
    /// The game ended.
    GameOver {
        /// The result.
        winner: Winner,
    },
}

/// Receives [`GameEvent`]s.
pub trait EventSink: Send + Sync {
    /// Called once per event, in order.
    fn notify(&self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: Fn(&GameEvent) + Send + Sync,
{
    fn notify(&self, event: &GameEvent) {
        self(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&self, _event: &GameEvent) {}
}
