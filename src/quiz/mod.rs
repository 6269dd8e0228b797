//! Quiz activities: Math Adventure and Shape Safari.
//!
//! Both quizzes share the same bookkeeping ([`QuizTally`]): a correct
//! answer adds to the score and streak, a wrong one resets the streak,
//! skipping resets the streak without counting, and every
//! `level_up_every` correct answers earn a level.

mod config;
mod math;
mod shapes;
mod tally;

pub use config::QuizSettings;
pub use math::{MathEvent, MathQuestion, MathQuiz, Operation};
pub use shapes::{Shape, ShapeEvent, ShapeQuestion, ShapeQuiz};
pub use tally::{Encouragement, QuizTally};

use crate::rules::QuizResult;

/// What a quiz event did. `A` is the answer type (a number or a shape).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome<A> {
    /// Right answer; carries the new level when one was earned.
    Correct { level_up: Option<u32> },
    /// Wrong answer; carries the right one.
    Incorrect { expected: A },
    Skipped,
    /// Counters reset; carries the run that just ended if anything was
    /// answered.
    Restarted { previous: Option<QuizResult> },
    Ignored,
}

impl<A> QuizOutcome<A> {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizOutcome::Correct { .. })
    }

    /// The finished run carried by a restart.
    #[must_use]
    pub fn previous_run(&self) -> Option<QuizResult> {
        match self {
            QuizOutcome::Restarted { previous } => *previous,
            _ => None,
        }
    }
}
