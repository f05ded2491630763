extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Rank;
use crate::error::AskError;
use crate::event::GameEvent;
use crate::pacing::Phase;
use crate::player::PlayerId;
use crate::rules::{AskResult, resolve_turn};
use crate::strategy::{LUCKY_LINE, choose_move, handoff_line, reply_line};
use crate::sync::TurnGuard;

use super::{Game, GameStatus, TurnReport};

impl Game {
    /// The human asks the computer for `rank`.
    ///
    /// Plays the whole turn: announce, reveal, resolve, settle. When
    /// [`auto_computer_turns`](crate::GameOptions::auto_computer_turns) is set,
    /// any computer turns that follow are played before returning; their
    /// reports go to the event sink only.
    ///
    /// # Errors
    ///
    /// Returns an error if another turn is in flight, the game is not in
    /// progress, it is the computer's turn, the human holds no card of `rank`,
    /// or the game was restarted during the turn. Rejected asks leave the
    /// state untouched.
    pub fn ask(&self, rank: Rank) -> Result<TurnReport, AskError> {
        let guard = self.turn_lock.try_acquire().ok_or(AskError::TurnInFlight)?;

        if let Err(err) = self.check_human_ask(rank) {
            debug!(rank = %rank, error = %err, "ask rejected");
            return Err(err);
        }

        let report = self.play_turn(&guard, PlayerId::Human, rank, None)?;
        drop(guard);

        if self.options.auto_computer_turns {
            self.run_computer_turns();
        }
        Ok(report)
    }

    fn check_human_ask(&self, rank: Rank) -> Result<(), AskError> {
        let state = self.state.lock();
        if state.status != GameStatus::InProgress {
            return Err(AskError::NotInProgress);
        }
        if state.turn != PlayerId::Human {
            return Err(AskError::NotYourTurn);
        }
        if !state.human.hand.has_rank(rank) {
            return Err(AskError::RankNotHeld);
        }
        Ok(())
    }

    /// Plays one computer turn if one is due.
    ///
    /// Does nothing and returns `None` unless the game is in progress, it is
    /// the computer's turn and no other turn is in flight. Calling it again
    /// while a turn runs is a no-op.
    pub fn run_computer_turn(&self) -> Option<TurnReport> {
        let guard = self.turn_lock.try_acquire()?;
        {
            let state = self.state.lock();
            if state.status != GameStatus::InProgress || state.turn != PlayerId::Computer {
                return None;
            }
        }

        self.pause(Phase::Think, self.options.pacing.think);

        let (hand, known) = self
            .update(&guard, |state| {
                (state.computer.hand.clone(), state.known_ranks.clone())
            })
            .ok()?;
        let chosen = {
            let mut rng = self.rng.lock();
            choose_move(&hand, &known, &mut *rng)
        };
        let chosen = match chosen {
            Ok(chosen) => chosen,
            Err(err) => {
                debug!(error = %err, "computer has no move");
                return None;
            }
        };

        match self.play_turn(&guard, PlayerId::Computer, chosen.rank, Some(chosen.chat)) {
            Ok(report) => Some(report),
            Err(err) => {
                debug!(error = %err, "computer turn dropped");
                None
            }
        }
    }

    /// Plays computer turns until the human is up or the game ends.
    pub fn run_computer_turns(&self) -> Vec<TurnReport> {
        let mut reports = Vec::new();
        while let Some(report) = self.run_computer_turn() {
            reports.push(report);
        }
        reports
    }

    fn play_turn(
        &self,
        guard: &TurnGuard<'_>,
        asker: PlayerId,
        rank: Rank,
        chat: Option<String>,
    ) -> Result<TurnReport, AskError> {
        let pacing = self.options.pacing;

        self.update(guard, |state| {
            if asker == PlayerId::Human {
                state.known_ranks.insert(rank);
            }
            state.message = match asker {
                PlayerId::Human => alloc::format!("You ask: \"Do you have any {rank}s?\""),
                PlayerId::Computer => {
                    alloc::format!("Computer asks: \"Do you have any {rank}s?\"")
                }
            };
        })?;
        self.emit(&GameEvent::AskIssued {
            asker,
            rank,
            chat: chat.clone(),
        });
        let ask_delay = match asker {
            PlayerId::Human => pacing.human_ask,
            PlayerId::Computer => pacing.computer_ask,
        };
        self.pause(Phase::Ask, ask_delay);

        let held = self.update(guard, |state| {
            let held = state.player(asker.opponent()).hand.count_rank(rank);
            state.message = String::from(match (asker, held > 0) {
                (PlayerId::Human, true) => "Computer says: \"Yes, here you go!\"",
                (PlayerId::Human, false) => "Computer says: \"Go Fish!\"",
                (PlayerId::Computer, true) => "You say: \"Yes, I do.\"",
                (PlayerId::Computer, false) => "You say: \"Go Fish!\"",
            });
            held
        })?;
        let reply = (asker == PlayerId::Human).then(|| String::from(reply_line(held > 0)));
        if held > 0 {
            self.emit(&GameEvent::MatchFound {
                asker,
                rank,
                count: held,
                chat: reply,
            });
        } else {
            self.emit(&GameEvent::GoFish {
                asker,
                rank,
                chat: reply,
            });
        }
        self.pause(Phase::Reveal, pacing.reveal);

        let (outcome, next_turn, winner) = self.update(guard, |state| {
            let resolution = resolve_turn(state, asker, rank)?;
            let next = resolution.state.check_game_over();
            let committed = (resolution.outcome, next.turn, next.winner);
            *state = next;
            Ok::<_, AskError>(committed)
        })??;

        if let AskResult::LuckyFind { card } = outcome.result {
            self.emit(&GameEvent::LuckyFind {
                player: asker,
                card,
                chat: (asker == PlayerId::Computer).then(|| String::from(LUCKY_LINE)),
            });
        }
        for &book in &outcome.books {
            self.emit(&GameEvent::BookCompleted {
                player: asker,
                rank: book,
            });
        }
        if let Some(winner) = winner {
            info!(winner = ?winner, "game over");
            self.emit(&GameEvent::GameOver { winner });
        } else if next_turn != asker {
            let chat = (next_turn == PlayerId::Human).then(|| {
                let mut rng = self.rng.lock();
                String::from(handoff_line(&mut *rng))
            });
            self.emit(&GameEvent::TurnChanged {
                to: next_turn,
                chat,
            });
        }

        self.pause(Phase::Settle, pacing.settle);

        Ok(TurnReport {
            outcome,
            chat,
            finished: winner.is_some(),
        })
    }
}
