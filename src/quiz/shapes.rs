//! Shape Safari: pick the name of the shape on screen.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::QuizSettings;
use super::tally::QuizTally;
use super::QuizOutcome;
use crate::core::GameRng;
use crate::rules::{Activity, ActivityKind, ActivityResult, Context};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Rectangle,
    Star,
    Heart,
    Diamond,
    Oval,
    Pentagon,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 10] = [
        Shape::Circle,
        Shape::Square,
        Shape::Triangle,
        Shape::Rectangle,
        Shape::Star,
        Shape::Heart,
        Shape::Diamond,
        Shape::Oval,
        Shape::Pentagon,
        Shape::Hexagon,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
            Shape::Rectangle => "Rectangle",
            Shape::Star => "Star",
            Shape::Heart => "Heart",
            Shape::Diamond => "Diamond",
            Shape::Oval => "Oval",
            Shape::Pentagon => "Pentagon",
            Shape::Hexagon => "Hexagon",
        }
    }

    /// Glyph a renderer can show in place of a drawing.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Shape::Circle => "⚪",
            Shape::Square => "🟥",
            Shape::Triangle => "🔺",
            Shape::Rectangle => "▬",
            Shape::Star => "⭐",
            Shape::Heart => "❤️",
            Shape::Diamond => "🔷",
            Shape::Oval => "⬭",
            Shape::Pentagon => "⬟",
            Shape::Hexagon => "⬢",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape to identify and the names to choose from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeQuestion {
    pub target: Shape,
    /// Distinct shapes, one of which is `target`.
    pub options: SmallVec<[Shape; 6]>,
}

impl ShapeQuestion {
    /// Build a question with `option_count` choices (clamped to 2..=10).
    pub fn generate(option_count: usize, rng: &mut GameRng) -> Self {
        let option_count = option_count.clamp(2, Shape::ALL.len());
        let target = Shape::ALL[rng.gen_range(0..Shape::ALL.len())];

        let others: Vec<Shape> = Shape::ALL.iter().copied().filter(|&s| s != target).collect();
        let mut options: SmallVec<[Shape; 6]> =
            rng.choose_multiple(&others, option_count - 1).into_iter().collect();
        options.push(target);
        rng.shuffle(&mut options);

        Self { target, options }
    }

    /// Position of the right answer among the options.
    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.options
            .iter()
            .position(|&s| s == self.target)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeEvent {
    /// Pick the option at this position.
    Choose(usize),
    Skip,
    Restart,
}

/// A Shape Safari run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeQuiz {
    settings: QuizSettings,
    tally: QuizTally,
    question: ShapeQuestion,
}

impl ShapeQuiz {
    pub fn new(settings: QuizSettings, rng: &mut GameRng) -> Self {
        let tally = QuizTally::new();
        let question = ShapeQuestion::generate(settings.shape_options_for(tally.level()), rng);
        Self {
            settings,
            tally,
            question,
        }
    }

    #[must_use]
    pub fn question(&self) -> &ShapeQuestion {
        &self.question
    }

    #[must_use]
    pub fn tally(&self) -> &QuizTally {
        &self.tally
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.tally.level()
    }

    /// Pick an option. Positions past the end are absorbed.
    pub fn choose(&mut self, choice: usize, rng: &mut GameRng) -> QuizOutcome<Shape> {
        let Some(&picked) = self.question.options.get(choice) else {
            return QuizOutcome::Ignored;
        };

        let expected = self.question.target;
        let outcome = if picked == expected {
            let level_up = self.tally.record_correct(self.settings.level_up_every);
            if let Some(level) = level_up {
                log::debug!("Shape level up to {}", level);
            }
            QuizOutcome::Correct { level_up }
        } else {
            self.tally.record_incorrect();
            QuizOutcome::Incorrect { expected }
        };
        self.next_question(rng);
        outcome
    }

    pub fn skip(&mut self, rng: &mut GameRng) -> QuizOutcome<Shape> {
        self.tally.record_skip();
        self.next_question(rng);
        QuizOutcome::Skipped
    }

    pub fn restart(&mut self, rng: &mut GameRng) -> QuizOutcome<Shape> {
        let previous = self.tally.result();
        *self = Self::new(self.settings.clone(), rng);
        QuizOutcome::Restarted { previous }
    }

    fn next_question(&mut self, rng: &mut GameRng) {
        let count = self.settings.shape_options_for(self.tally.level());
        self.question = ShapeQuestion::generate(count, rng);
    }
}

impl Activity for ShapeQuiz {
    type Event = ShapeEvent;
    type Outcome = QuizOutcome<Shape>;

    fn kind(&self) -> ActivityKind {
        ActivityKind::Shapes
    }

    fn apply(&mut self, event: ShapeEvent, ctx: &mut Context<'_>) -> QuizOutcome<Shape> {
        match event {
            ShapeEvent::Choose(choice) => self.choose(choice, ctx.rng),
            ShapeEvent::Skip => self.skip(ctx.rng),
            ShapeEvent::Restart => self.restart(ctx.rng),
        }
    }

    fn report(&self, outcome: &QuizOutcome<Shape>) -> Option<ActivityResult> {
        outcome.previous_run().map(ActivityResult::Shapes)
    }

    fn close(&self) -> Option<ActivityResult> {
        self.tally.result().map(ActivityResult::Shapes)
    }
}
