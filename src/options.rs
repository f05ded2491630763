//! Game configuration options.
//!
//! The rules themselves are fixed; only presentation pacing and turn
//! scheduling are configurable.

use core::time::Duration;

/// Pauses after each phase of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pacing {
    /// Before the computer picks a rank.
    pub think: Duration,
    /// After the human's ask is announced.
    pub human_ask: Duration,
    /// After the computer's ask is announced.
    pub computer_ask: Duration,
    /// After the defender's answer is revealed.
    pub reveal: Duration,
    /// After the ask is resolved, before the next turn may start.
    pub settle: Duration,
}

impl Pacing {
    /// No pauses at all.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            think: Duration::ZERO,
            human_ask: Duration::ZERO,
            computer_ask: Duration::ZERO,
            reveal: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            think: Duration::from_millis(1_500),
            human_ask: Duration::from_millis(1_500),
            computer_ask: Duration::from_millis(2_000),
            reveal: Duration::from_millis(2_000),
            settle: Duration::from_millis(2_000),
        }
    }
}

/// Configuration options for a Go Fish game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use gofish::{GameOptions, Pacing};
///
/// let options = GameOptions::default()
///     .with_pacing(Pacing::instant())
///     .with_auto_computer_turns(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Pauses between turn phases.
    pub pacing: Pacing,
    /// Whether a human ask also plays out the computer turns that follow it.
    pub auto_computer_turns: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            pacing: Pacing::default(),
            auto_computer_turns: true,
        }
    }
}

impl GameOptions {
    /// Sets all phase pauses.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::{GameOptions, Pacing};
    ///
    /// let options = GameOptions::default().with_pacing(Pacing::instant());
    /// assert_eq!(options.pacing, Pacing::instant());
    /// ```
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Sets the computer's thinking pause.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_think_delay(Duration::from_millis(300));
    /// assert_eq!(options.pacing.think, Duration::from_millis(300));
    /// ```
    #[must_use]
    pub const fn with_think_delay(mut self, delay: Duration) -> Self {
        self.pacing.think = delay;
        self
    }

    /// Sets the pause after an ask is announced, for both players.
    #[must_use]
    pub const fn with_ask_delay(mut self, delay: Duration) -> Self {
        self.pacing.human_ask = delay;
        self.pacing.computer_ask = delay;
        self
    }

    /// Sets the pause after the defender's answer.
    #[must_use]
    pub const fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.pacing.reveal = delay;
        self
    }

    /// Sets the pause after a turn resolves.
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.pacing.settle = delay;
        self
    }

    /// Sets whether computer turns run automatically after a human ask.
    ///
    /// # Example
    ///
    /// ```
    /// use gofish::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_computer_turns(false);
    /// assert!(!options.auto_computer_turns);
    /// ```
    #[must_use]
    pub const fn with_auto_computer_turns(mut self, auto: bool) -> Self {
        self.auto_computer_turns = auto;
        self
    }
}
