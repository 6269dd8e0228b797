//! Persisted user records and per-activity statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::{ActivityResult, MemoryResult, QuizResult};

/// Memory Match statistics. Lower bests are better.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStats {
    pub games_completed: u32,
    pub best_moves: Option<u32>,
    pub best_time_ms: Option<u64>,
}

impl MemoryStats {
    /// Fold in a finished game.
    pub fn record(&mut self, result: &MemoryResult) {
        self.games_completed += 1;
        self.best_moves = Some(keep_lower(self.best_moves, result.moves));
        self.best_time_ms = Some(keep_lower(self.best_time_ms, result.time_ms));
    }
}

/// Quiz statistics. Higher bests are better.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizStats {
    pub sessions: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    /// Most correct answers in one run.
    pub best_score: u32,
    pub best_streak: u32,
    pub best_level: u32,
}

impl QuizStats {
    /// Fold in a finished run.
    pub fn record(&mut self, result: &QuizResult) {
        self.sessions += 1;
        self.questions_answered += result.answered;
        self.correct_answers += result.correct;
        self.best_score = self.best_score.max(result.correct);
        self.best_streak = self.best_streak.max(result.best_streak);
        self.best_level = self.best_level.max(result.level);
    }

    /// Lifetime accuracy, `None` before the first answer.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        (self.questions_answered > 0)
            .then(|| f64::from(self.correct_answers) / f64::from(self.questions_answered))
    }
}

/// Everything tracked for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub memory: MemoryStats,
    pub math: QuizStats,
    pub shapes: QuizStats,
    pub artworks_saved: u32,
    /// Names of saved artworks, oldest first.
    pub artworks: Vec<String>,
}

impl UserStats {
    pub fn record(&mut self, result: &ActivityResult) {
        match result {
            ActivityResult::Memory(r) => self.memory.record(r),
            ActivityResult::Math(r) => self.math.record(r),
            ActivityResult::Shapes(r) => self.shapes.record(r),
            ActivityResult::Artwork { name } => {
                self.artworks_saved += 1;
                self.artworks.push(name.clone());
            }
        }
    }
}

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_played: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stats: UserStats,
}

impl UserRecord {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
            last_played: None,
            stats: UserStats::default(),
        }
    }

    /// Fold a result into the stats and stamp `last_played`.
    pub fn record(&mut self, result: &ActivityResult, at: DateTime<Utc>) {
        self.stats.record(result);
        self.last_played = Some(at);
    }
}

fn keep_lower<T: Ord + Copy>(stored: Option<T>, new: T) -> T {
    match stored {
        Some(best) if best <= new => best,
        _ => new,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(answered: u32, correct: u32, best_streak: u32, level: u32) -> QuizResult {
        QuizResult {
            answered,
            correct,
            best_streak,
            level,
        }
    }

    #[test]
    fn test_memory_keeps_lowest() {
        let mut stats = MemoryStats::default();
        stats.record(&MemoryResult {
            pairs: 8,
            moves: 12,
            time_ms: 40_000,
        });
        stats.record(&MemoryResult {
            pairs: 8,
            moves: 15,
            time_ms: 30_000,
        });

        assert_eq!(stats.games_completed, 2);
        assert_eq!(stats.best_moves, Some(12));
        assert_eq!(stats.best_time_ms, Some(30_000));
    }

    #[test]
    fn test_quiz_keeps_highest() {
        let mut stats = QuizStats::default();
        assert_eq!(stats.accuracy(), None);

        stats.record(&quiz(10, 8, 6, 2));
        stats.record(&quiz(4, 1, 1, 1));

        assert_eq!(stats.sessions, 2);
        assert_eq!(stats.questions_answered, 14);
        assert_eq!(stats.correct_answers, 9);
        assert_eq!(stats.best_score, 8);
        assert_eq!(stats.best_streak, 6);
        assert_eq!(stats.best_level, 2);
        assert!((stats.accuracy().unwrap() - 9.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_routes_by_activity() {
        let mut record = UserRecord::new("mia", "hash");
        let at = Utc::now();

        record.record(&ActivityResult::Shapes(quiz(3, 3, 3, 1)), at);
        record.record(&ActivityResult::Artwork { name: "Sun".into() }, at);

        assert_eq!(record.stats.shapes.sessions, 1);
        assert_eq!(record.stats.math.sessions, 0);
        assert_eq!(record.stats.artworks_saved, 1);
        assert_eq!(record.stats.artworks, vec!["Sun".to_string()]);
        assert_eq!(record.last_played, Some(at));
    }

    #[test]
    fn test_record_json_tolerates_missing_stats() {
        let json = r#"{
            "username": "leo",
            "password_hash": "$argon2id$x",
            "created_at": "2024-01-01T00:00:00Z",
            "last_played": null
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.stats, UserStats::default());
    }
}
