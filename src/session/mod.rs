//! A logged-in player moving between the menu and the activities.
//!
//! [`Session`] routes [`SessionEvent`]s to whichever activity is on screen
//! and decides when a result is worth recording:
//!
//! - a memory game reports once, when the last pair is found
//! - a quiz reports when the player leaves it, or restarts it after
//!   answering at least one question
//! - a saved artwork reports immediately
//!
//! Sessions never touch storage. [`Arcade`] applies events through the
//! session and records whatever results come back.

mod arcade;

pub use arcade::{Arcade, ArcadeError};

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::config::ArcadeConfig;
use crate::core::{GameRng, Millis, Result};
use crate::memory::{MemoryEvent, MemoryGame, MemoryOutcome};
use crate::paint::{Artwork, PaintEvent, PaintOutcome, PaintStudio};
use crate::quiz::{MathEvent, MathQuiz, QuizOutcome, Shape, ShapeEvent, ShapeQuiz};
use crate::rules::{Activity, ActivityKind, ActivityResult, Context};

/// What is on screen, with the activity's state.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Menu,
    Memory(MemoryGame),
    Math(MathQuiz),
    Shapes(ShapeQuiz),
    Paint(PaintStudio),
}

impl Screen {
    /// The activity on screen, `None` on the menu.
    #[must_use]
    pub fn kind(&self) -> Option<ActivityKind> {
        match self {
            Screen::Menu => None,
            Screen::Memory(_) => Some(ActivityKind::Memory),
            Screen::Math(_) => Some(ActivityKind::Math),
            Screen::Shapes(_) => Some(ActivityKind::Shapes),
            Screen::Paint(_) => Some(ActivityKind::Paint),
        }
    }

    /// Result owed when the player walks away from this screen.
    fn close(&self) -> Option<ActivityResult> {
        match self {
            Screen::Menu => None,
            Screen::Memory(game) => game.close(),
            Screen::Math(quiz) => quiz.close(),
            Screen::Shapes(quiz) => quiz.close(),
            Screen::Paint(studio) => studio.close(),
        }
    }
}

/// Player input at the session level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Start an activity, leaving the current one.
    Open(ActivityKind),
    BackToMenu,
    /// Time passed; lets a shown mismatch flip back.
    Tick,
    Memory(MemoryEvent),
    Math(MathEvent),
    Shapes(ShapeEvent),
    Paint(PaintEvent),
}

/// What a session event did.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    Opened(ActivityKind),
    ReturnedToMenu,
    Ticked { changed: bool },
    Memory(MemoryOutcome),
    Math(QuizOutcome<i64>),
    Shapes(QuizOutcome<Shape>),
    Paint(PaintOutcome),
    /// Event for an activity that is not on screen.
    Ignored,
}

/// Outcome of one dispatched event plus anything to record.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub outcome: SessionOutcome,
    pub result: Option<ActivityResult>,
}

impl Step {
    fn new(outcome: SessionOutcome) -> Self {
        Self { outcome, result: None }
    }

    fn with_result(mut self, result: Option<ActivityResult>) -> Self {
        self.result = result;
        self
    }
}

/// One player's time in the arcade.
#[derive(Clone, Debug)]
pub struct Session {
    username: String,
    config: ArcadeConfig,
    rng: GameRng,
    screen: Screen,
    /// Artworks saved this session; kept while the studio is closed.
    gallery: Vector<Artwork>,
}

impl Session {
    /// Start on the menu.
    pub fn new(username: impl Into<String>, config: ArcadeConfig, rng: GameRng) -> Self {
        Self {
            username: username.into(),
            config,
            rng,
            screen: Screen::Menu,
            gallery: Vector::new(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// Artworks saved this session, including any in an open studio.
    #[must_use]
    pub fn gallery(&self) -> &Vector<Artwork> {
        match &self.screen {
            Screen::Paint(studio) => studio.gallery_items(),
            _ => &self.gallery,
        }
    }

    /// Apply an event.
    ///
    /// Only opening a memory game can fail, when the configured board
    /// cannot be dealt.
    pub fn dispatch(&mut self, event: SessionEvent, now: Millis) -> Result<Step> {
        match event {
            SessionEvent::Open(kind) => self.open(kind, now),
            SessionEvent::BackToMenu => Ok(self.back_to_menu()),
            SessionEvent::Tick => Ok(self.tick(now)),
            event => Ok(self.route(event, now)),
        }
    }

    fn open(&mut self, kind: ActivityKind, now: Millis) -> Result<Step> {
        // Each activity gets its own stream so one's draws never shift another's.
        let mut rng = self.rng.fork();
        let screen = match kind {
            ActivityKind::Memory => Screen::Memory(MemoryGame::new(self.config.memory.clone(), &mut rng, now)?),
            ActivityKind::Math => Screen::Math(MathQuiz::new(self.config.quiz.clone(), &mut rng)),
            ActivityKind::Shapes => Screen::Shapes(ShapeQuiz::new(self.config.quiz.clone(), &mut rng)),
            ActivityKind::Paint => Screen::Paint(
                PaintStudio::new(self.config.paint.clone(), self.username.clone())
                    .with_gallery(self.gallery().clone()),
            ),
        };

        let owed = self.switch_to(screen);
        log::debug!("{} opened {}", self.username, kind);
        Ok(Step::new(SessionOutcome::Opened(kind)).with_result(owed))
    }

    fn back_to_menu(&mut self) -> Step {
        if matches!(self.screen, Screen::Menu) {
            return Step::new(SessionOutcome::Ignored);
        }
        let owed = self.switch_to(Screen::Menu);
        Step::new(SessionOutcome::ReturnedToMenu).with_result(owed)
    }

    /// Replace the screen, keeping the studio's gallery, and return the
    /// result the old screen owes.
    fn switch_to(&mut self, next: Screen) -> Option<ActivityResult> {
        let left = std::mem::replace(&mut self.screen, next);
        let owed = left.close();
        if let Screen::Paint(studio) = left {
            self.gallery = studio.into_gallery();
        }
        if matches!(self.screen, Screen::Paint(_)) {
            // The open studio holds the gallery now.
            self.gallery = Vector::new();
        }
        owed
    }

    fn tick(&mut self, now: Millis) -> Step {
        let changed = match &mut self.screen {
            Screen::Memory(game) => Activity::tick(game, now),
            Screen::Math(quiz) => Activity::tick(quiz, now),
            Screen::Shapes(quiz) => Activity::tick(quiz, now),
            Screen::Paint(studio) => Activity::tick(studio, now),
            Screen::Menu => false,
        };
        Step::new(SessionOutcome::Ticked { changed })
    }

    fn route(&mut self, event: SessionEvent, now: Millis) -> Step {
        let mut ctx = Context::new(now, &mut self.rng);
        match (&mut self.screen, event) {
            (Screen::Memory(game), SessionEvent::Memory(event)) => {
                let (outcome, result) = apply(game, event, &mut ctx);
                Step::new(SessionOutcome::Memory(outcome)).with_result(result)
            }
            (Screen::Math(quiz), SessionEvent::Math(event)) => {
                let (outcome, result) = apply(quiz, event, &mut ctx);
                Step::new(SessionOutcome::Math(outcome)).with_result(result)
            }
            (Screen::Shapes(quiz), SessionEvent::Shapes(event)) => {
                let (outcome, result) = apply(quiz, event, &mut ctx);
                Step::new(SessionOutcome::Shapes(outcome)).with_result(result)
            }
            (Screen::Paint(studio), SessionEvent::Paint(event)) => {
                let (outcome, result) = apply(studio, event, &mut ctx);
                Step::new(SessionOutcome::Paint(outcome)).with_result(result)
            }
            _ => Step::new(SessionOutcome::Ignored),
        }
    }
}

fn apply<A: Activity>(
    activity: &mut A,
    event: A::Event,
    ctx: &mut Context<'_>,
) -> (A::Outcome, Option<ActivityResult>) {
    let outcome = activity.apply(event, ctx);
    let result = activity.report(&outcome);
    (outcome, result)
}
