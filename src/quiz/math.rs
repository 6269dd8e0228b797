//! Math Adventure: arithmetic questions that get harder with each level.
//!
//! Levels 1-2 ask addition and subtraction with operands up to `10 × level`
//! (never a negative answer). From level 3 on the quiz asks multiplication
//! and exact division with factors up to `min(12, level + 5)`.

use serde::{Deserialize, Serialize};

use super::config::QuizSettings;
use super::tally::QuizTally;
use super::QuizOutcome;
use crate::core::GameRng;
use crate::rules::{Activity, ActivityKind, ActivityResult, Context};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }
}

/// One arithmetic question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathQuestion {
    pub left: i64,
    pub right: i64,
    pub op: Operation,
    pub answer: i64,
}

impl MathQuestion {
    /// Build a question appropriate for `level`.
    pub fn generate(level: u32, rng: &mut GameRng) -> Self {
        let level = i64::from(level.max(1));

        if level <= 2 {
            let max = 10 * level;
            let a = rng.gen_range_inclusive(1..=max);
            let b = rng.gen_range_inclusive(1..=max);
            if rng.gen_bool(0.5) {
                Self {
                    left: a,
                    right: b,
                    op: Operation::Add,
                    answer: a + b,
                }
            } else {
                // Keep the result non-negative
                let (left, right) = if a < b { (b, a) } else { (a, b) };
                Self {
                    left,
                    right,
                    op: Operation::Subtract,
                    answer: left - right,
                }
            }
        } else {
            let max = (level + 5).min(12);
            let a = rng.gen_range_inclusive(1..=max);
            let b = rng.gen_range_inclusive(1..=max);
            if rng.gen_bool(0.5) {
                Self {
                    left: a,
                    right: b,
                    op: Operation::Multiply,
                    answer: a * b,
                }
            } else {
                Self {
                    left: a * b,
                    right: a,
                    op: Operation::Divide,
                    answer: b,
                }
            }
        }
    }

    /// Whether `answer` solves this question.
    #[must_use]
    pub fn check(&self, answer: i64) -> bool {
        answer == self.answer
    }
}

impl std::fmt::Display for MathQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.op.symbol(), self.right)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathEvent {
    /// Submit an answer to the current question.
    Answer(i64),
    /// Move on without answering (breaks the streak).
    Skip,
    /// Start over at level 1.
    Restart,
}

/// A Math Adventure run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MathQuiz {
    settings: QuizSettings,
    tally: QuizTally,
    question: MathQuestion,
}

impl MathQuiz {
    pub fn new(settings: QuizSettings, rng: &mut GameRng) -> Self {
        let tally = QuizTally::new();
        let question = MathQuestion::generate(tally.level(), rng);
        Self {
            settings,
            tally,
            question,
        }
    }

    #[must_use]
    pub fn question(&self) -> &MathQuestion {
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

    pub fn answer(&mut self, answer: i64, rng: &mut GameRng) -> QuizOutcome<i64> {
        let expected = self.question.answer;
        let outcome = if self.question.check(answer) {
            let level_up = self.tally.record_correct(self.settings.level_up_every);
            if let Some(level) = level_up {
                log::debug!("Math level up to {}", level);
            }
            QuizOutcome::Correct { level_up }
        } else {
            self.tally.record_incorrect();
            QuizOutcome::Incorrect { expected }
        };
        self.question = MathQuestion::generate(self.tally.level(), rng);
        outcome
    }

    pub fn skip(&mut self, rng: &mut GameRng) -> QuizOutcome<i64> {
        self.tally.record_skip();
        self.question = MathQuestion::generate(self.tally.level(), rng);
        QuizOutcome::Skipped
    }

    pub fn restart(&mut self, rng: &mut GameRng) -> QuizOutcome<i64> {
        let previous = self.tally.result();
        *self = Self::new(self.settings.clone(), rng);
        QuizOutcome::Restarted { previous }
    }
}

impl Activity for MathQuiz {
    type Event = MathEvent;
    type Outcome = QuizOutcome<i64>;

    fn kind(&self) -> ActivityKind {
        ActivityKind::Math
    }

    fn apply(&mut self, event: MathEvent, ctx: &mut Context<'_>) -> QuizOutcome<i64> {
        match event {
            MathEvent::Answer(answer) => self.answer(answer, ctx.rng),
            MathEvent::Skip => self.skip(ctx.rng),
            MathEvent::Restart => self.restart(ctx.rng),
        }
    }

    fn report(&self, outcome: &QuizOutcome<i64>) -> Option<ActivityResult> {
        outcome.previous_run().map(ActivityResult::Math)
    }

    fn close(&self) -> Option<ActivityResult> {
        self.tally.result().map(ActivityResult::Math)
    }
}
