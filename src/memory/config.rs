//! Memory game configuration parameters.

use serde::{Deserialize, Serialize};

use super::board::GridShape;
use super::symbols::SymbolAlphabet;
use crate::core::Result;

/// Memory game configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySettings {
    /// Distinct symbol pairs on the board (default: 8, a 4x4 grid).
    pub pair_count: usize,

    /// Explicit layout. `None` picks the most square grid.
    pub grid: Option<GridShape>,

    /// How long a mismatched pair stays face up before flipping back
    /// (0 = flip back immediately).
    pub mismatch_delay_ms: u64,

    /// Custom card faces. `None` uses the built-in emoji set.
    pub symbols: Option<Vec<String>>,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            pair_count: 8,
            grid: None,
            mismatch_delay_ms: 500,
            symbols: None,
        }
    }
}

impl MemorySettings {
    /// Set the number of pairs.
    #[must_use]
    pub fn with_pairs(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set an explicit grid layout.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.grid = Some(GridShape::new(rows, cols));
        self
    }

    /// Set the mismatch display delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Use a custom symbol set.
    #[must_use]
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = Some(symbols.into_iter().map(Into::into).collect());
        self
    }

    /// The alphabet boards are dealt from.
    pub fn alphabet(&self) -> Result<SymbolAlphabet> {
        match &self.symbols {
            Some(symbols) => SymbolAlphabet::new(symbols.iter().cloned()),
            None => Ok(SymbolAlphabet::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    #[test]
    fn test_default_settings() {
        let settings = MemorySettings::default();
        assert_eq!(settings.pair_count, 8);
        assert_eq!(settings.mismatch_delay_ms, 500);
        assert!(settings.grid.is_none());
        assert_eq!(settings.alphabet().unwrap().len(), 18);
    }

    #[test]
    fn test_builder_pattern() {
        let settings = MemorySettings::default()
            .with_pairs(2)
            .with_grid(1, 4)
            .with_mismatch_delay(0)
            .with_symbols(["A", "B"]);

        assert_eq!(settings.pair_count, 2);
        assert_eq!(settings.grid, Some(GridShape::new(1, 4)));
        assert_eq!(settings.mismatch_delay_ms, 0);
        assert_eq!(settings.alphabet().unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_custom_symbols() {
        let settings = MemorySettings::default().with_symbols(["A", "A"]);
        assert_eq!(settings.alphabet(), Err(GameError::DuplicateSymbol("A".into())));
    }
}
