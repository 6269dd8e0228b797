//! Score and streak bookkeeping shared by the quizzes.

use serde::{Deserialize, Serialize};

use crate::rules::QuizResult;

/// Words of encouragement earned by a streak.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encouragement {
    /// Three in a row.
    GreatJob,
    /// Five in a row.
    OnFire,
}

impl Encouragement {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Encouragement::GreatJob => "Great job! Keep it up!",
            Encouragement::OnFire => "You're on fire! Amazing streak!",
        }
    }
}

/// Running totals for one quiz run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizTally {
    score: u32,
    answered: u32,
    streak: u32,
    best_streak: u32,
    level: u32,
}

impl Default for QuizTally {
    fn default() -> Self {
        Self {
            score: 0,
            answered: 0,
            streak: 0,
            best_streak: 0,
            level: 1,
        }
    }
}

impl QuizTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a correct answer. Returns the new level if one was earned.
    pub fn record_correct(&mut self, level_up_every: u32) -> Option<u32> {
        self.answered += 1;
        self.score += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);

        if level_up_every > 0 && self.score % level_up_every == 0 {
            self.level += 1;
            Some(self.level)
        } else {
            None
        }
    }

    /// Count a wrong answer.
    pub fn record_incorrect(&mut self) {
        self.answered += 1;
        self.streak = 0;
    }

    /// Skipping breaks the streak but is not counted as an answer.
    pub fn record_skip(&mut self) {
        self.streak = 0;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Fraction of answers that were correct, `None` before any answer.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        if self.answered == 0 {
            None
        } else {
            Some(f64::from(self.score) / f64::from(self.answered))
        }
    }

    #[must_use]
    pub fn encouragement(&self) -> Option<Encouragement> {
        match self.streak {
            s if s >= 5 => Some(Encouragement::OnFire),
            s if s >= 3 => Some(Encouragement::GreatJob),
            _ => None,
        }
    }

    /// Summary worth recording, `None` if nothing was answered.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        (self.answered > 0).then(|| QuizResult {
            answered: self.answered,
            correct: self.score,
            best_streak: self.best_streak,
            level: self.level,
        })
    }
}
