//! Results handed to the statistics layer when an activity produces one.

use serde::{Deserialize, Serialize};

use super::activity::ActivityKind;

/// A finished memory game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryResult {
    /// Pairs on the board.
    pub pairs: usize,
    /// Completed two-card picks.
    pub moves: u32,
    /// Time from deal to last match.
    pub time_ms: u64,
}

/// A quiz run (from start or restart to leaving).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub answered: u32,
    pub correct: u32,
    pub best_streak: u32,
    pub level: u32,
}

/// Something worth recording in a player's statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityResult {
    Memory(MemoryResult),
    Math(QuizResult),
    Shapes(QuizResult),
    Artwork { name: String },
}

impl ActivityResult {
    /// Activity that produced this result.
    #[must_use]
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityResult::Memory(_) => ActivityKind::Memory,
            ActivityResult::Math(_) => ActivityKind::Math,
            ActivityResult::Shapes(_) => ActivityKind::Shapes,
            ActivityResult::Artwork { .. } => ActivityKind::Paint,
        }
    }
}
