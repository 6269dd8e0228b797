//! Quiz configuration parameters.

use serde::{Deserialize, Serialize};

/// Quiz configuration parameters, shared by the math and shape quizzes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Correct answers needed per level (default: 5).
    pub level_up_every: u32,

    /// Choices offered by the shape quiz on level 1.
    pub min_shape_options: usize,

    /// Upper bound on shape choices as levels grow.
    pub max_shape_options: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            level_up_every: 5,
            min_shape_options: 3,
            max_shape_options: 6,
        }
    }
}

impl QuizSettings {
    /// Set how many correct answers earn a level.
    #[must_use]
    pub fn with_level_up_every(mut self, count: u32) -> Self {
        self.level_up_every = count;
        self
    }

    /// Set the range of shape choices.
    #[must_use]
    pub fn with_shape_options(mut self, min: usize, max: usize) -> Self {
        self.min_shape_options = min;
        self.max_shape_options = max;
        self
    }

    /// Shape choices offered on `level` (1-based).
    #[must_use]
    pub fn shape_options_for(&self, level: u32) -> usize {
        let extra = level.saturating_sub(1) as usize;
        self.min_shape_options
            .saturating_add(extra)
            .min(self.max_shape_options)
    }
}
