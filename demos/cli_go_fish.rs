//! CLI Go Fish example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use gofish::{
    Card, Game, GameEvent, GameOptions, GameState, GameStatus, Hand, PlayerId, Rank, Winner,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Go Fish CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed).with_sink(print_event);

    loop {
        game.start();

        while game.status() == GameStatus::InProgress {
            let state = game.snapshot();
            print_table(&state);

            let input = prompt_line("Ask for a rank: ");
            if input == "q" || input == "quit" {
                return;
            }
            let Some(rank) = Rank::from_label(&input) else {
                println!("Unknown rank. Try one of: {}", format_ranks(&state.human.hand));
                continue;
            };

            if let Err(err) = game.ask(rank) {
                println!("Ask error: {err}");
            }
        }

        print_table(&game.snapshot());
        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

fn print_event(event: &GameEvent) {
    let line = match event {
        GameEvent::GameStarted => "Good luck! You go first.".to_string(),
        GameEvent::AskIssued {
            asker: PlayerId::Computer,
            chat: Some(chat),
            ..
        } => format!("Computer: {chat}"),
        GameEvent::AskIssued { asker, rank, .. } => format!("{asker} ask for {rank}s."),
        GameEvent::MatchFound {
            chat: Some(chat), ..
        }
        | GameEvent::GoFish {
            chat: Some(chat), ..
        } => format!("Computer: {chat}"),
        GameEvent::MatchFound { count, .. } => {
            colorize(&format!("You hand over {count}."), "32")
        }
        GameEvent::GoFish { .. } => colorize("Go Fish!", "34"),
        GameEvent::LuckyFind { player, card, chat } => {
            let line = format!("{player} fished up the {}!", format_card(card));
            match chat {
                Some(chat) => format!("{line} Computer: {chat}"),
                None => line,
            }
        }
        GameEvent::BookCompleted { player, rank } => {
            colorize(&format!("{player} completed a book of {rank}s!"), "33")
        }
        GameEvent::TurnChanged {
            chat: Some(chat), ..
        } => format!("Computer: {chat}"),
        GameEvent::TurnChanged {
            to: PlayerId::Human,
            ..
        } => "Your turn.".to_string(),
        GameEvent::TurnChanged { .. } => "Computer's turn.".to_string(),
        GameEvent::GameOver { winner } => match winner {
            Winner::Human => "Wow! You are really good!".to_string(),
            Winner::Computer => "I won this time! Good game!".to_string(),
            Winner::Tie => "It's a tie! We both did great!".to_string(),
        },
    };
    println!("{line}");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!("\n{}", state.message);
    println!("Deck: {} cards remaining", state.cards_remaining());
    println!(
        "Computer: {} cards | books {}",
        state.computer.hand.len(),
        format_books(&state.computer.books)
    );
    println!(
        "You: {} | books {}",
        format_hand(&state.human.hand),
        format_books(&state.human.books)
    );
    println!();
}

fn format_ranks(hand: &Hand) -> String {
    hand.ranks()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_books(books: &[Rank]) -> String {
    if books.is_empty() {
        return "(none)".to_string();
    }
    books
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
