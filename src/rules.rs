//! Pure game transitions: dealing and resolving an ask.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::book::check_for_books;
use crate::card::{Card, Rank};
use crate::deck::{Deck, create_deck};
use crate::error::TurnError;
use crate::game::{GameState, GameStatus, KnownRanks};
use crate::hand::Hand;
use crate::player::{PlayerId, PlayerState};

/// Cards dealt to each player at the start of a game.
pub const INITIAL_HAND_SIZE: usize = 5;

/// What an ask produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskResult {
    /// The defender handed over `count` cards.
    Match {
        /// Number of cards transferred.
        count: usize,
    },
    /// The defender had none, and the asker drew the requested rank.
    LuckyFind {
        /// The card drawn.
        card: Card,
    },
    /// The defender had none, and the draw did not help.
    Fished {
        /// The card drawn, if the deck had any.
        drawn: Option<Card>,
    },
}

/// Description of a resolved ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Who asked.
    pub asker: PlayerId,
    /// The rank asked for.
    pub rank: Rank,
    /// What happened.
    pub result: AskResult,
    /// Books the asker completed.
    pub books: Vec<Rank>,
    /// Whether the asker keeps the turn.
    pub go_again: bool,
}

/// A new state together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The state after the ask.
    pub state: GameState,
    /// What happened.
    pub outcome: TurnOutcome,
}

/// Deals a new game.
///
/// Shuffles a fresh deck, deals [`INITIAL_HAND_SIZE`] cards to each player,
/// removes any books from the opening hands and gives the human the first
/// turn. The end-of-game check is left to the caller.
#[must_use]
pub fn start_game<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    deal_game(create_deck(rng))
}

/// Deals a new game from `deck` as it stands, human first.
///
/// This is [`start_game`] without the shuffle.
#[must_use]
pub fn deal_game(mut deck: Deck) -> GameState {
    let human = deal_player(PlayerId::Human, deck.deal(INITIAL_HAND_SIZE));
    let computer = deal_player(PlayerId::Computer, deck.deal(INITIAL_HAND_SIZE));

    GameState {
        deck,
        human,
        computer,
        turn: PlayerId::Human,
        status: GameStatus::InProgress,
        message: String::from("Game Started! Tap a card to ask."),
        winner: None,
        known_ranks: KnownRanks::new(),
    }
}

fn deal_player(id: PlayerId, cards: Vec<Card>) -> PlayerState {
    let (hand, books) = check_for_books(Hand::from_cards(cards));
    PlayerState { id, hand, books }
}

/// Resolves `asker` asking the opponent for `rank`.
///
/// Returns the new state only. See [`resolve_turn`] for the outcome details.
///
/// # Errors
///
/// Returns an error if the game is not in progress or `asker` does not hold
/// the turn.
pub fn execute_turn(
    state: &GameState,
    asker: PlayerId,
    rank: Rank,
) -> Result<GameState, TurnError> {
    resolve_turn(state, asker, rank).map(|resolution| resolution.state)
}

/// Resolves `asker` asking the opponent for `rank`, describing the outcome.
///
/// The asker need not hold `rank`. Matching cards move to the asker, who goes
/// again. Otherwise the asker draws one card and goes again only if it is of
/// the requested rank. Books are then removed from the asker's hand and
/// forgotten from the computer's memory. Emptied hands are not treated
/// specially here.
///
/// # Errors
///
/// Returns an error if the game is not in progress or `asker` does not hold
/// the turn. `state` is never modified.
pub fn resolve_turn(
    state: &GameState,
    asker: PlayerId,
    rank: Rank,
) -> Result<Resolution, TurnError> {
    if state.status != GameStatus::InProgress {
        return Err(TurnError::NotInProgress);
    }
    if state.turn != asker {
        return Err(TurnError::NotYourTurn);
    }

    let defender = asker.opponent();
    let mut next = state.clone();
    let mut asker_hand = next.player(asker).hand.clone();
    let mut defender_hand = next.player(defender).hand.clone();

    let matching = defender_hand.take_rank(rank);
    let result = if matching.is_empty() {
        match next.deck.draw_card(&mut asker_hand) {
            Some(card) if card.rank == rank => AskResult::LuckyFind { card },
            drawn => AskResult::Fished { drawn },
        }
    } else {
        let count = matching.len();
        asker_hand.extend(matching);
        if asker == PlayerId::Computer {
            next.known_ranks.remove(rank);
        }
        AskResult::Match { count }
    };
    let go_again = !matches!(result, AskResult::Fished { .. });

    let (asker_hand, books) = check_for_books(asker_hand);
    for &book in &books {
        next.known_ranks.remove(book);
    }

    let message = describe(asker, rank, result, &books);

    let asker_state = next.player_mut(asker);
    asker_state.hand = asker_hand;
    asker_state.books.extend_from_slice(&books);
    next.player_mut(defender).hand = defender_hand;
    next.turn = if go_again { asker } else { defender };
    next.message = message;

    debug!(
        asker = ?asker,
        rank = %rank,
        result = ?result,
        books = books.len(),
        go_again,
        "resolved ask"
    );

    Ok(Resolution {
        state: next,
        outcome: TurnOutcome {
            asker,
            rank,
            result,
            books,
            go_again,
        },
    })
}

fn describe(asker: PlayerId, rank: Rank, result: AskResult, books: &[Rank]) -> String {
    let human = asker == PlayerId::Human;
    let mut message = match result {
        AskResult::Match { count } if human => alloc::format!("You got {count} {rank}s!"),
        AskResult::Match { .. } => alloc::format!("Computer took your {rank}s."),
        AskResult::LuckyFind { card } => {
            alloc::format!("{} fished... and found the {}! Go again!", asker.name(), card.rank)
        }
        AskResult::Fished { drawn } => {
            let mut message = alloc::format!("{} fished...", asker.name());
            match drawn {
                Some(card) if human => {
                    message.push_str(&alloc::format!(" You drew a {}.", card.rank));
                }
                Some(_) => message.push_str(" It drew a card."),
                None => message.push_str(" Deck is empty."),
            }
            message
        }
    };

    if !books.is_empty() {
        let ranks: Vec<String> = books.iter().map(ToString::to_string).collect();
        message.push_str(&alloc::format!(
            " {} made a book of {}s!",
            asker.name(),
            ranks.join(", ")
        ));
    }
    message
}
