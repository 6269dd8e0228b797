//! Arcade configuration.
//!
//! One TOML document with a table per activity. Every field has a default,
//! so an empty file is a valid configuration:
//!
//! ```toml
//! [memory]
//! pair_count = 6
//! mismatch_delay_ms = 800
//!
//! [quiz]
//! level_up_every = 3
//!
//! [accounts]
//! store_path = "users.json"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::account::AccountSettings;
use crate::core::ConfigError;
use crate::memory::MemorySettings;
use crate::paint::PaintSettings;
use crate::quiz::{QuizSettings, Shape};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub memory: MemorySettings,
    pub quiz: QuizSettings,
    pub paint: PaintSettings,
    pub accounts: AccountSettings,
}

impl ArcadeConfig {
    #[must_use]
    pub fn with_memory(mut self, memory: MemorySettings) -> Self {
        self.memory = memory;
        self
    }

    #[must_use]
    pub fn with_quiz(mut self, quiz: QuizSettings) -> Self {
        self.quiz = quiz;
        self
    }

    #[must_use]
    pub fn with_paint(mut self, paint: PaintSettings) -> Self {
        self.paint = paint;
        self
    }

    #[must_use]
    pub fn with_accounts(mut self, accounts: AccountSettings) -> Self {
        self.accounts = accounts;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded arcade config from {}", path.display());
        Ok(config)
    }

    /// Reject settings no activity could start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let memory = &self.memory;
        if memory.pair_count == 0 {
            return invalid("memory.pair_count must be at least 1");
        }
        let alphabet = memory
            .alphabet()
            .map_err(|err| ConfigError::Invalid(format!("memory.symbols: {err}")))?;
        if memory.pair_count > alphabet.len() {
            return invalid(format!(
                "memory.pair_count is {} but only {} symbols are available",
                memory.pair_count,
                alphabet.len()
            ));
        }
        if let Some(grid) = memory.grid {
            if grid.cells() != memory.pair_count * 2 {
                return invalid(format!(
                    "memory.grid {} does not hold {} cards",
                    grid,
                    memory.pair_count * 2
                ));
            }
        }

        let quiz = &self.quiz;
        if quiz.level_up_every == 0 {
            return invalid("quiz.level_up_every must be at least 1");
        }
        if quiz.min_shape_options < 2
            || quiz.min_shape_options > quiz.max_shape_options
            || quiz.max_shape_options > Shape::ALL.len()
        {
            return invalid(format!(
                "quiz shape options must satisfy 2 <= min <= max <= {}",
                Shape::ALL.len()
            ));
        }

        let paint = &self.paint;
        if paint.width == 0 || paint.height == 0 {
            return invalid("paint canvas must be at least 1x1");
        }
        if paint.max_brush == 0 {
            return invalid("paint.max_brush must be at least 1");
        }

        let accounts = &self.accounts;
        if accounts.hash_iterations == 0 || accounts.hash_parallelism == 0 {
            return invalid("accounts hash iterations and parallelism must be at least 1");
        }
        if accounts.hash_memory_kib < 8 * accounts.hash_parallelism {
            return invalid("accounts.hash_memory_kib must be at least 8 per lane");
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = ArcadeConfig::default();
        config.validate().unwrap();
        assert_eq!(config.memory.pair_count, 8);
        assert_eq!(config.memory.mismatch_delay_ms, 500);
        assert_eq!(config.quiz.level_up_every, 5);
        assert_eq!(config.paint.width, 20);
        assert_eq!(config.accounts.hash_iterations, 2);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(ArcadeConfig::from_toml_str("").unwrap(), ArcadeConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = ArcadeConfig::from_toml_str(
            r#"
            [memory]
            pair_count = 6
            grid = { rows = 3, cols = 4 }

            [paint]
            max_brush = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.memory.pair_count, 6);
        assert_eq!(config.memory.mismatch_delay_ms, 500);
        assert_eq!(config.paint.max_brush, 3);
        assert_eq!(config.paint.width, 20);
    }

    #[test]
    fn test_validation_failures() {
        let cases = [
            ArcadeConfig::default().with_memory(MemorySettings::default().with_pairs(0)),
            ArcadeConfig::default().with_memory(MemorySettings::default().with_pairs(19)),
            ArcadeConfig::default().with_memory(MemorySettings::default().with_grid(3, 3)),
            ArcadeConfig::default().with_memory(MemorySettings::default().with_symbols(["a", "a"])),
            ArcadeConfig::default().with_quiz(QuizSettings::default().with_level_up_every(0)),
            ArcadeConfig::default().with_quiz(QuizSettings::default().with_shape_options(4, 3)),
            ArcadeConfig::default().with_quiz(QuizSettings::default().with_shape_options(3, 11)),
            ArcadeConfig::default().with_paint(PaintSettings::default().with_size(0, 5)),
            ArcadeConfig::default().with_paint(PaintSettings::default().with_max_brush(0)),
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ArcadeConfig::from_toml_str("[memory]\npair_count = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[quiz]\nlevel_up_every = 2").unwrap();

        let config = ArcadeConfig::load(file.path()).unwrap();
        assert_eq!(config.quiz.level_up_every, 2);

        assert!(matches!(
            ArcadeConfig::load(file.path().with_extension("missing")),
            Err(ConfigError::Io(_))
        ));
    }
}
