//! Game orchestrator and state management.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::AskError;
use crate::event::{EventSink, GameEvent, NullSink};
use crate::options::GameOptions;
use crate::pacing::{Pacer, Phase};
use crate::player::PlayerId;
use crate::rules::{TurnOutcome, start_game};
use crate::sync::{Mutex, TurnGuard, TurnLock};

pub mod state;
mod turn;

pub use state::{GameState, GameStatus, KnownRanks, Winner};

/// Summary of one orchestrated turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// What the rules engine resolved.
    pub outcome: TurnOutcome,
    /// What the computer said while asking, for computer turns.
    pub chat: Option<String>,
    /// Whether this turn ended the game.
    pub finished: bool,
}

/// A Go Fish game between a human and the computer.
///
/// The game owns the authoritative [`GameState`] and serializes turns: only
/// one ask may be in flight at a time. Callers read the state through
/// [`Game::snapshot`] and act through [`Game::ask`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Random number generator for shuffling and the computer's choices.
    rng: Mutex<ChaCha8Rng>,
    /// At most one turn in flight.
    turn_lock: TurnLock,
    /// Receives notifications.
    sink: Box<dyn EventSink>,
    /// Waits out the pauses between phases.
    pacer: Box<dyn Pacer>,
}

impl Game {
    /// Creates a new game in the lobby with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gofish::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game.start();
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::default()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            turn_lock: TurnLock::new(),
            sink: Box::new(NullSink),
            pacer: default_pacer(),
        }
    }

    /// Replaces the notification sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the pacer used for the pauses between phases.
    #[must_use]
    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Deals a new game and returns its initial state.
    ///
    /// Works from any status. A turn still in flight from the previous game is
    /// abandoned: its result is discarded and it no longer blocks new asks.
    pub fn start(&self) -> GameState {
        let fresh = {
            let mut rng = self.rng.lock();
            start_game(&mut *rng)
        }
        .check_game_over();

        {
            let mut state = self.state.lock();
            self.turn_lock.reset();
            *state = fresh.clone();
        }

        info!(
            human_books = fresh.human.books.len(),
            computer_books = fresh.computer.books.len(),
            cards_remaining = fresh.cards_remaining(),
            "game started"
        );
        self.emit(&GameEvent::GameStarted);
        if let Some(winner) = fresh.winner {
            self.emit(&GameEvent::GameOver { winner });
        }
        fresh
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.state.lock().status
    }

    /// Returns whose turn it is.
    pub fn turn(&self) -> PlayerId {
        self.state.lock().turn
    }

    /// Returns whether a turn is currently being played out.
    pub fn is_turn_in_flight(&self) -> bool {
        self.turn_lock.is_held()
    }

    fn emit(&self, event: &GameEvent) {
        self.sink.notify(event);
    }

    fn pause(&self, phase: Phase, duration: Duration) {
        if !duration.is_zero() {
            self.pacer.pause(phase, duration);
        }
    }

    /// Applies `f` to the state unless `guard` was orphaned by a restart.
    fn update<T>(
        &self,
        guard: &TurnGuard<'_>,
        f: impl FnOnce(&mut GameState) -> T,
    ) -> Result<T, AskError> {
        let mut state = self.state.lock();
        if !guard.is_current() {
            return Err(AskError::Abandoned);
        }
        Ok(f(&mut *state))
    }
}

#[cfg(feature = "std")]
fn default_pacer() -> Box<dyn Pacer> {
    Box::new(crate::pacing::ThreadPacer)
}

#[cfg(not(feature = "std"))]
fn default_pacer() -> Box<dyn Pacer> {
    Box::new(crate::pacing::NoPacing)
}
