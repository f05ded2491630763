//! Game orchestrator integration tests.

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gofish::{
    AskError, Card, DECK_SIZE, Deck, Game, GameEvent, GameOptions, GameState, GameStatus,
    HANDOFF_LINES, Hand, LUCKY_LINE, Pacer, Pacing, Phase, PlayerId, PlayerState, Rank, Suit,
    Winner,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn instant() -> GameOptions {
    GameOptions::default()
        .with_pacing(Pacing::instant())
        .with_auto_computer_turns(false)
}

fn recording_game(options: GameOptions, seed: u64) -> (Game, Arc<Mutex<Vec<GameEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let game = Game::new(options, seed)
        .with_sink(move |event: &GameEvent| sink.lock().unwrap().push(event.clone()));
    (game, events)
}

fn set_table(game: &Game, human: &[Card], computer: &[Card], deck: &[Card], turn: PlayerId) {
    *game.state.lock() = GameState {
        deck: Deck::from_cards(deck.to_vec()),
        human: PlayerState::with_hand(PlayerId::Human, Hand::from_cards(human.iter().copied())),
        computer: PlayerState::with_hand(
            PlayerId::Computer,
            Hand::from_cards(computer.iter().copied()),
        ),
        turn,
        status: GameStatus::InProgress,
        ..GameState::default()
    };
}

/// Plays the human by always asking for the first rank in hand.
fn play_out(game: &Game) {
    let mut steps = 0;
    while game.status() == GameStatus::InProgress {
        assert!(steps < 500, "game did not terminate");
        steps += 1;
        if game.turn() == PlayerId::Computer {
            game.run_computer_turns();
        } else {
            let rank = game.snapshot().human.hand.cards()[0].rank;
            game.ask(rank).unwrap();
        }
        assert_eq!(game.snapshot().total_cards(), DECK_SIZE);
    }
}

/// Blocks every `Ask` pause until the test releases it.
struct Gate {
    entered: SyncSender<()>,
    release: Mutex<Receiver<()>>,
}

impl Pacer for Gate {
    fn pause(&self, phase: Phase, _duration: Duration) {
        if phase == Phase::Ask {
            self.entered.send(()).unwrap();
            self.release.lock().unwrap().recv().unwrap();
        }
    }
}

fn gated_game(seed: u64) -> (Game, Receiver<()>, SyncSender<()>) {
    let (entered_tx, entered_rx) = sync_channel(1);
    let (release_tx, release_rx) = sync_channel(1);
    let game = Game::new(instant().with_ask_delay(Duration::from_millis(1)), seed).with_pacer(Gate {
        entered: entered_tx,
        release: Mutex::new(release_rx),
    });
    (game, entered_rx, release_tx)
}

#[test]
fn start_deals_and_announces() {
    let (game, events) = recording_game(instant(), 7);
    assert_eq!(game.status(), GameStatus::Lobby);

    let state = game.start();
    assert_eq!(state.status, GameStatus::InProgress);
    assert_eq!(state.turn, PlayerId::Human);
    assert_eq!(state.total_cards(), DECK_SIZE);
    assert_eq!(state.cards_remaining(), DECK_SIZE - 10);
    assert_eq!(game.snapshot(), state);
    assert_eq!(events.lock().unwrap().first(), Some(&GameEvent::GameStarted));
}

#[test]
fn ask_before_start_is_rejected() {
    let game = Game::new(instant(), 1);
    assert_eq!(game.ask(Rank::Ace).unwrap_err(), AskError::NotInProgress);
    assert_eq!(game.run_computer_turn(), None);
}

#[test]
fn ask_rejections_leave_state_intact() {
    let game = Game::new(instant(), 1);
    set_table(
        &game,
        &[card(Rank::Two, Suit::Hearts)],
        &[card(Rank::Three, Suit::Hearts)],
        &[card(Rank::Four, Suit::Hearts)],
        PlayerId::Human,
    );
    let before = game.snapshot();

    assert_eq!(game.ask(Rank::Ace).unwrap_err(), AskError::RankNotHeld);
    assert_eq!(game.snapshot(), before);

    game.state.lock().turn = PlayerId::Computer;
    assert_eq!(game.ask(Rank::Two).unwrap_err(), AskError::NotYourTurn);
    assert!(!game.is_turn_in_flight());
}

#[test]
fn human_ask_is_remembered_and_events_follow_phases() {
    let (game, events) = recording_game(instant(), 1);
    set_table(
        &game,
        &[card(Rank::Two, Suit::Hearts), card(Rank::Five, Suit::Hearts)],
        &[card(Rank::Three, Suit::Hearts)],
        &[card(Rank::Nine, Suit::Clubs), card(Rank::Ten, Suit::Clubs)],
        PlayerId::Human,
    );

    let report = game.ask(Rank::Two).unwrap();
    assert!(!report.outcome.go_again);
    assert!(!report.finished);
    assert_eq!(report.chat, None);

    let state = game.snapshot();
    assert!(state.known_ranks.contains(Rank::Two));
    assert_eq!(state.turn, PlayerId::Computer);
    assert_eq!(state.message, "You fished... You drew a 9.");

    assert_eq!(
        *events.lock().unwrap(),
        [
            GameEvent::AskIssued {
                asker: PlayerId::Human,
                rank: Rank::Two,
                chat: None,
            },
            GameEvent::GoFish {
                asker: PlayerId::Human,
                rank: Rank::Two,
                chat: Some("Nope! Go Fish!".to_string()),
            },
            GameEvent::TurnChanged {
                to: PlayerId::Computer,
                chat: None,
            },
        ]
    );
}

#[test]
fn computer_turn_uses_memory() {
    let (game, events) = recording_game(instant(), 3);
    set_table(
        &game,
        &[card(Rank::Jack, Suit::Hearts), card(Rank::Four, Suit::Hearts)],
        &[
            card(Rank::Jack, Suit::Clubs),
            card(Rank::Eight, Suit::Clubs),
            card(Rank::Eight, Suit::Spades),
        ],
        &[card(Rank::Two, Suit::Clubs), card(Rank::Three, Suit::Clubs)],
        PlayerId::Computer,
    );
    game.state.lock().known_ranks.insert(Rank::Jack);

    let report = game.run_computer_turn().unwrap();
    assert_eq!(report.outcome.rank, Rank::Jack);
    assert!(report.outcome.go_again);
    assert!(report.chat.is_some());

    let state = game.snapshot();
    assert!(!state.known_ranks.contains(Rank::Jack));
    assert_eq!(state.computer.hand.count_rank(Rank::Jack), 2);
    assert_eq!(state.turn, PlayerId::Computer);

    let events = events.lock().unwrap();
    assert!(matches!(
        events[0],
        GameEvent::AskIssued {
            asker: PlayerId::Computer,
            rank: Rank::Jack,
            chat: Some(_),
        }
    ));
    assert_eq!(
        events[1],
        GameEvent::MatchFound {
            asker: PlayerId::Computer,
            rank: Rank::Jack,
            count: 1,
            chat: None,
        }
    );
}

#[test]
fn computer_answers_and_hands_back_the_turn() {
    let (game, events) = recording_game(instant(), 8);
    set_table(
        &game,
        &[card(Rank::Four, Suit::Hearts), card(Rank::Six, Suit::Hearts)],
        &[
            card(Rank::Four, Suit::Clubs),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Nine, Suit::Spades),
        ],
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Jack, Suit::Diamonds),
        ],
        PlayerId::Human,
    );

    game.ask(Rank::Four).unwrap();
    assert!(events.lock().unwrap().contains(&GameEvent::MatchFound {
        asker: PlayerId::Human,
        rank: Rank::Four,
        count: 1,
        chat: Some("Yes! I have that card.".to_string()),
    }));

    // Nines are all the computer has left.
    game.ask(Rank::Six).unwrap();
    let report = game.run_computer_turn().unwrap();
    assert_eq!(report.outcome.rank, Rank::Nine);
    assert!(!report.outcome.go_again);

    let events = events.lock().unwrap();
    assert!(events.contains(&GameEvent::GoFish {
        asker: PlayerId::Computer,
        rank: Rank::Nine,
        chat: None,
    }));
    match events.last() {
        Some(GameEvent::TurnChanged {
            to: PlayerId::Human,
            chat: Some(line),
        }) => assert!(HANDOFF_LINES.contains(&line.as_str())),
        other => panic!("unexpected last event {other:?}"),
    }
}

#[test]
fn computer_cheers_a_lucky_find() {
    let (game, events) = recording_game(instant(), 2);
    set_table(
        &game,
        &[card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Hearts)],
        &[
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
        ],
        &[card(Rank::Ace, Suit::Hearts), card(Rank::Ten, Suit::Clubs)],
        PlayerId::Computer,
    );

    let report = game.run_computer_turn().unwrap();
    assert_eq!(report.outcome.rank, Rank::Ace);
    assert!(report.outcome.go_again);
    assert!(events.lock().unwrap().contains(&GameEvent::LuckyFind {
        player: PlayerId::Computer,
        card: card(Rank::Ace, Suit::Hearts),
        chat: Some(LUCKY_LINE.to_string()),
    }));
}

#[test]
fn computer_trigger_is_a_no_op_on_human_turn() {
    let game = Game::new(instant(), 5);
    let before = game.start();
    assert_eq!(game.run_computer_turn(), None);
    assert!(game.run_computer_turns().is_empty());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn game_over_overrides_go_again() {
    let (game, events) = recording_game(instant(), 1);
    set_table(
        &game,
        &[
            card(Rank::Queen, Suit::Hearts),
            card(Rank::Queen, Suit::Diamonds),
            card(Rank::Queen, Suit::Spades),
        ],
        &[card(Rank::Queen, Suit::Clubs)],
        &[card(Rank::Two, Suit::Clubs)],
        PlayerId::Human,
    );

    let report = game.ask(Rank::Queen).unwrap();
    assert!(report.outcome.go_again);
    assert!(report.finished);

    let state = game.snapshot();
    assert_eq!(state.status, GameStatus::Finished);
    assert_eq!(state.winner, Some(Winner::Human));
    assert!(!state.known_ranks.contains(Rank::Queen));
    assert_eq!(game.ask(Rank::Queen).unwrap_err(), AskError::NotInProgress);

    let events = events.lock().unwrap();
    assert!(events.contains(&GameEvent::BookCompleted {
        player: PlayerId::Human,
        rank: Rank::Queen,
    }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            winner: Winner::Human
        })
    );
}

#[test]
fn auto_computer_turns_hand_the_turn_back() {
    let game = Game::new(GameOptions::default().with_pacing(Pacing::instant()), 11);
    game.start();
    let rank = game.snapshot().human.hand.cards()[0].rank;

    game.ask(rank).unwrap();
    let state = game.snapshot();
    assert!(state.status == GameStatus::Finished || state.turn == PlayerId::Human);
    assert!(!game.is_turn_in_flight());
}

#[test]
fn full_games_terminate_with_consistent_winner() {
    for seed in 0..20 {
        let game = Game::new(instant(), seed);
        game.start();
        play_out(&game);

        let state = game.snapshot();
        assert_eq!(state.status, GameStatus::Finished);
        assert_eq!(state.total_cards(), DECK_SIZE);
        assert!(state.is_over());
        assert_eq!(state.winner, Some(state.leader()));
    }
}

#[test]
fn same_seed_same_game() {
    let a = Game::new(instant(), 99);
    let b = Game::new(instant(), 99);
    a.start();
    b.start();
    play_out(&a);
    play_out(&b);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn concurrent_ask_is_rejected_while_in_flight() {
    let (game, entered, release) = gated_game(21);
    game.start();
    let rank = game.snapshot().human.hand.cards()[0].rank;

    std::thread::scope(|s| {
        let first = s.spawn(|| game.ask(rank));
        entered.recv().unwrap();

        assert!(game.is_turn_in_flight());
        assert_eq!(game.ask(rank).unwrap_err(), AskError::TurnInFlight);
        assert_eq!(game.run_computer_turn(), None);

        release.send(()).unwrap();
        assert!(first.join().unwrap().is_ok());
    });
    assert!(!game.is_turn_in_flight());
}

#[test]
fn restart_abandons_in_flight_turn() {
    let (game, entered, release) = gated_game(4);
    game.start();
    let rank = game.snapshot().human.hand.cards()[0].rank;

    std::thread::scope(|s| {
        let first = s.spawn(|| game.ask(rank));
        entered.recv().unwrap();

        let fresh = game.start();
        assert!(!game.is_turn_in_flight());

        release.send(()).unwrap();
        assert_eq!(first.join().unwrap().unwrap_err(), AskError::Abandoned);
        assert_eq!(game.snapshot(), fresh);
    });
}
