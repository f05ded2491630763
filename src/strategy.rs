//! Move selection for the computer opponent.

extern crate alloc;

use alloc::string::String;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::card::Rank;
use crate::error::StrategyError;
use crate::game::KnownRanks;
use crate::hand::Hand;

/// Points per card of a rank already held.
///
/// Scores are kept in hundredths so the jitter can stay an integer.
pub const COUNT_WEIGHT: u32 = 1_000;

/// Bonus for a rank the human is believed to hold.
pub const MEMORY_BONUS: u32 = 10_000;

/// Upper bound (exclusive) of the random tie-break added to every score.
///
/// Kept below [`COUNT_WEIGHT`] so it only reorders equally scored ranks.
pub const JITTER: u32 = 500;

/// The computer's chosen ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerMove {
    /// Rank to ask for.
    pub rank: Rank,
    /// Flavour text spoken while asking.
    pub chat: String,
}

/// Deterministic part of a rank's score, before jitter.
#[must_use]
pub const fn base_score(count: usize, remembered: bool) -> u32 {
    let bonus = if remembered { MEMORY_BONUS } else { 0 };
    count as u32 * COUNT_WEIGHT + bonus
}

/// Chooses which rank the computer asks for.
///
/// Every distinct rank in `hand` is scored by how many copies are held, plus a
/// large bonus if it is in `known`, plus a small random jitter. The highest
/// score wins.
///
/// # Errors
///
/// Returns [`StrategyError::EmptyHand`] if `hand` holds no cards.
///
/// # Example
///
/// ```
/// use gofish::{Card, Hand, KnownRanks, Rank, Suit, choose_move};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let hand = Hand::from_cards([
///     Card::new(Rank::Two, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ]);
/// let known: KnownRanks = [Rank::Nine].into_iter().collect();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let chosen = choose_move(&hand, &known, &mut rng).unwrap();
/// assert_eq!(chosen.rank, Rank::Nine);
/// ```
pub fn choose_move<R: Rng + ?Sized>(
    hand: &Hand,
    known: &KnownRanks,
    rng: &mut R,
) -> Result<ComputerMove, StrategyError> {
    let mut best: Option<(Rank, u32)> = None;
    for (rank, count) in hand.rank_counts() {
        let score = base_score(count, known.contains(rank)) + rng.random_range(0..JITTER);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((rank, score));
        }
    }

    let (rank, _) = best.ok_or(StrategyError::EmptyHand)?;
    let chat = chat_line(rank, known.contains(rank), rng);
    Ok(ComputerMove { rank, chat })
}

const PLAIN_LINES: [&str; 6] = [
    "Do you have any {}s?",
    "I need some {}s, please!",
    "I'm fishing for {}s!",
    "Got any {}s for me?",
    "Are there any {}s in your hand?",
    "Hmm... do you have a {}?",
];

const KNOWING_LINES: [&str; 4] = [
    "I know you have a {}! Hand it over!",
    "I remember you asking for a {}...",
    "You can't hide that {} from me!",
    "I think you have a {} for me.",
];

fn chat_line<R: Rng + ?Sized>(rank: Rank, remembered: bool, rng: &mut R) -> String {
    let lines: &[&str] = if remembered {
        &KNOWING_LINES
    } else {
        &PLAIN_LINES
    };
    let template = lines.choose(rng).copied().unwrap_or(PLAIN_LINES[0]);
    template.replacen("{}", rank.label(), 1)
}

/// What the computer says when it draws the rank it asked for.
pub const LUCKY_LINE: &str = "Lucky! I found it!";

/// What the computer may say when the turn comes back to the human.
pub const HANDOFF_LINES: [&str; 5] = [
    "Ok, your turn!",
    "Over to you!",
    "Your turn now!",
    "Oh well, your turn!",
    "You're up!",
];

/// What the computer answers when the human asks it for a rank.
#[must_use]
pub const fn reply_line(has_rank: bool) -> &'static str {
    if has_rank {
        "Yes! I have that card."
    } else {
        "Nope! Go Fish!"
    }
}

/// Picks one of the [`HANDOFF_LINES`].
pub fn handoff_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    HANDOFF_LINES.choose(rng).copied().unwrap_or(HANDOFF_LINES[0])
}
