//! Full arcade flows: login, play, results recorded once.

use kids_arcade::account::{AccountSettings, JsonFileStore, MemoryStore};
use kids_arcade::core::{GameRng, ManualClock, Millis};
use kids_arcade::memory::{MemoryEvent, MemorySettings};
use kids_arcade::paint::{PaintEvent, PaletteColor};
use kids_arcade::quiz::{MathEvent, QuizOutcome, ShapeEvent};
use kids_arcade::rules::ActivityKind;
use kids_arcade::session::{Arcade, Screen, Session, SessionEvent, SessionOutcome};
use kids_arcade::{ArcadeConfig, UserStore};

fn config() -> ArcadeConfig {
    ArcadeConfig::default()
        .with_memory(MemorySettings::default().with_pairs(3).with_mismatch_delay(500))
        .with_accounts(AccountSettings::default().with_fast_hashing())
}

fn arcade() -> Arcade<MemoryStore, ManualClock> {
    Arcade::new(config(), MemoryStore::new(), ManualClock::new(Millis(0)), GameRng::new(2024)).unwrap()
}

fn login<S: UserStore>(arcade: &mut Arcade<S, ManualClock>, name: &str) -> Session {
    arcade.register(name, "secret").unwrap();
    arcade.login(name, "secret").unwrap()
}

/// Pairs of indices on the open memory board.
fn board_pairs(session: &Session) -> Vec<(usize, usize)> {
    let Screen::Memory(game) = session.screen() else {
        panic!("memory game not open");
    };
    let mut pairs = Vec::new();
    let mut seen = vec![false; game.len()];
    for i in 0..game.len() {
        if seen[i] {
            continue;
        }
        let j = (i + 1..game.len())
            .find(|&j| game.board()[j] == game.board()[i])
            .unwrap();
        seen[i] = true;
        seen[j] = true;
        pairs.push((i, j));
    }
    pairs
}

// =============================================================================
// Memory Match
// =============================================================================

#[test]
fn test_memory_game_recorded_once() {
    let mut arcade = arcade();
    let mut session = login(&mut arcade, "mia");

    arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Memory)).unwrap();
    let pairs = board_pairs(&session);

    // A mismatch first, shown until the clock passes the delay.
    let (a, _) = pairs[0];
    let (b, _) = pairs[1];
    arcade.dispatch(&mut session, SessionEvent::Memory(MemoryEvent::Select(a))).unwrap();
    arcade.dispatch(&mut session, SessionEvent::Memory(MemoryEvent::Select(b))).unwrap();
    arcade.clock().advance(600);
    let step = arcade.dispatch(&mut session, SessionEvent::Tick).unwrap();
    assert_eq!(step.outcome, SessionOutcome::Ticked { changed: true });

    let mut recorded = 0;
    for (i, j) in pairs {
        arcade.clock().advance(1_000);
        arcade.dispatch(&mut session, SessionEvent::Memory(MemoryEvent::Select(i))).unwrap();
        let step = arcade
            .dispatch(&mut session, SessionEvent::Memory(MemoryEvent::Select(j)))
            .unwrap();
        recorded += usize::from(step.result.is_some());
    }
    assert_eq!(recorded, 1);

    // Clicking a finished board and leaving add nothing.
    let step = arcade
        .dispatch(&mut session, SessionEvent::Memory(MemoryEvent::Select(0)))
        .unwrap();
    assert_eq!(step.result, None);
    let record = arcade.logout(session).unwrap().unwrap();

    let stats = record.stats.memory;
    assert_eq!(stats.games_completed, 1);
    assert_eq!(stats.best_moves, Some(4));
    assert_eq!(stats.best_time_ms, Some(3_600));
}

#[test]
fn test_abandoned_memory_game_not_recorded() {
    let mut arcade = arcade();
    let mut session = login(&mut arcade, "leo");

    arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Memory)).unwrap();
    let (i, j) = board_pairs(&session)[0];
    arcade.dispatch(&mut session, SessionEvent::Memory(MemoryEvent::Select(i))).unwrap();
    arcade.dispatch(&mut session, SessionEvent::Memory(MemoryEvent::Select(j))).unwrap();

    let record = arcade.logout(session).unwrap().unwrap();
    assert_eq!(record.stats.memory.games_completed, 0);
    assert!(record.last_played.is_none());
}

// =============================================================================
// Quizzes
// =============================================================================

#[test]
fn test_math_levels_up_and_records_on_leave() {
    let mut arcade = arcade();
    let mut session = login(&mut arcade, "ava");
    arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Math)).unwrap();

    let mut level_ups = Vec::new();
    for _ in 0..5 {
        let Screen::Math(quiz) = session.screen() else {
            panic!("math quiz not open");
        };
        let answer = quiz.question().answer;
        let step = arcade
            .dispatch(&mut session, SessionEvent::Math(MathEvent::Answer(answer)))
            .unwrap();
        if let SessionOutcome::Math(QuizOutcome::Correct { level_up: Some(level) }) = step.outcome {
            level_ups.push(level);
        }
    }
    assert_eq!(level_ups, vec![2]);

    let step = arcade.dispatch(&mut session, SessionEvent::Math(MathEvent::Skip)).unwrap();
    assert_eq!(step.outcome, SessionOutcome::Math(QuizOutcome::Skipped));

    arcade.dispatch(&mut session, SessionEvent::BackToMenu).unwrap();
    let record = arcade.accounts().get("ava").unwrap();
    assert_eq!(record.stats.math.sessions, 1);
    assert_eq!(record.stats.math.questions_answered, 5);
    assert_eq!(record.stats.math.best_score, 5);
    assert_eq!(record.stats.math.best_streak, 5);
    assert_eq!(record.stats.math.best_level, 2);
}

#[test]
fn test_shape_quiz_restart_and_leave_record_separately() {
    let mut arcade = arcade();
    let mut session = login(&mut arcade, "kim");
    arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Shapes)).unwrap();

    arcade.dispatch(&mut session, SessionEvent::Shapes(ShapeEvent::Choose(0))).unwrap();
    arcade.dispatch(&mut session, SessionEvent::Shapes(ShapeEvent::Restart)).unwrap();
    arcade.dispatch(&mut session, SessionEvent::Shapes(ShapeEvent::Choose(1))).unwrap();
    arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Paint)).unwrap();

    let record = arcade.accounts().get("kim").unwrap();
    assert_eq!(record.stats.shapes.sessions, 2);
    assert_eq!(record.stats.shapes.questions_answered, 2);
}

// =============================================================================
// Paint
// =============================================================================

#[test]
fn test_saved_artworks_counted() {
    let mut arcade = arcade();
    let mut session = login(&mut arcade, "zoe");
    arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Paint)).unwrap();

    let events = [
        PaintEvent::SetColor(PaletteColor::Green),
        PaintEvent::SetBrush(2),
        PaintEvent::Paint { row: 0, col: 0 },
        PaintEvent::Save { name: "Grass".into() },
        PaintEvent::Save { name: "  ".into() },
        PaintEvent::Randomize,
        PaintEvent::Save { name: "Confetti".into() },
    ];
    for event in events {
        arcade.dispatch(&mut session, SessionEvent::Paint(event)).unwrap();
    }

    let record = arcade.logout(session).unwrap().unwrap();
    assert_eq!(record.stats.artworks_saved, 2);
    assert_eq!(record.stats.artworks, vec!["Grass".to_string(), "Confetti".to_string()]);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_stats_persist_through_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arcade-users.json");

    {
        let store = JsonFileStore::open(&path).unwrap();
        let mut arcade = Arcade::new(config(), store, ManualClock::new(Millis(0)), GameRng::new(1)).unwrap();
        let mut session = login(&mut arcade, "mia");
        arcade.dispatch(&mut session, SessionEvent::Open(ActivityKind::Paint)).unwrap();
        arcade
            .dispatch(&mut session, SessionEvent::Paint(PaintEvent::Save { name: "Sun".into() }))
            .unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let mut arcade = Arcade::new(config(), store, ManualClock::new(Millis(0)), GameRng::new(1)).unwrap();
    let session = arcade.login("mia", "secret").unwrap();
    let record = arcade.logout(session).unwrap().unwrap();
    assert_eq!(record.stats.artworks_saved, 1);
}
