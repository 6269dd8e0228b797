//! Symbols and the alphabet boards are dealt from.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, Result};

/// Emoji shown on cards when no custom alphabet is configured.
///
/// Eighteen entries are enough for the largest (6x6) board.
pub const DEFAULT_SYMBOLS: [&str; 18] = [
    "🐶", "🐱", "🐸", "🦋", "🌟", "🎈", "🍎", "🎯", "🐼", "🦊", "🐢", "🐙", "🌈", "🚀", "🍓", "🎵",
    "⚽", "🌻",
];

/// A card face. Two cells match when their symbols are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An ordered set of distinct symbols.
///
/// Backed by an `im::Vector` so every game can keep its own handle for
/// restarts without copying the strings.
///
/// ## Example
///
/// ```
/// use kids_arcade::memory::SymbolAlphabet;
///
/// let alphabet = SymbolAlphabet::new(["A", "B", "C"]).unwrap();
/// assert_eq!(alphabet.len(), 3);
///
/// // Duplicates are rejected
/// assert!(SymbolAlphabet::new(["A", "A"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SymbolAlphabet {
    symbols: Vector<Symbol>,
}

impl SymbolAlphabet {
    /// Build an alphabet, rejecting repeated symbols.
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let mut collected = Vector::new();
        for symbol in symbols {
            let symbol = Symbol::new(symbol);
            if !seen.insert(symbol.clone()) {
                return Err(GameError::DuplicateSymbol(symbol.0));
            }
            collected.push_back(symbol);
        }
        Ok(Self { symbols: collected })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Pick `count` distinct symbols at random.
    ///
    /// Fails with [`GameError::InsufficientSymbols`] when the alphabet is
    /// smaller than `count`.
    pub fn sample(&self, count: usize, rng: &mut GameRng) -> Result<Vec<Symbol>> {
        if count > self.len() {
            return Err(GameError::InsufficientSymbols {
                requested: count,
                available: self.len(),
            });
        }
        let all: Vec<Symbol> = self.symbols.iter().cloned().collect();
        Ok(rng.choose_multiple(&all, count))
    }
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|&s| Symbol::new(s)).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for SymbolAlphabet {
    type Error = GameError;

    fn try_from(value: Vec<String>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SymbolAlphabet> for Vec<String> {
    fn from(value: SymbolAlphabet) -> Self {
        value.symbols.into_iter().map(|s| s.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet_is_distinct() {
        let alphabet = SymbolAlphabet::default();
        assert_eq!(alphabet.len(), DEFAULT_SYMBOLS.len());
        assert!(SymbolAlphabet::new(DEFAULT_SYMBOLS).is_ok());
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let err = SymbolAlphabet::new(["🐶", "🐱", "🐶"]).unwrap_err();
        assert_eq!(err, GameError::DuplicateSymbol("🐶".to_string()));
    }

    #[test]
    fn test_sample_too_many() {
        let alphabet = SymbolAlphabet::new(["A", "B"]).unwrap();
        let mut rng = GameRng::new(1);

        let err = alphabet.sample(3, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientSymbols {
                requested: 3,
                available: 2
            }
        );
    }

    #[test]
    fn test_sample_distinct() {
        let alphabet = SymbolAlphabet::default();
        let mut rng = GameRng::new(9);

        let mut picked = alphabet.sample(8, &mut rng).unwrap();
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 8);
    }

    #[test]
    fn test_serde_rejects_duplicates() {
        let ok: SymbolAlphabet = serde_json::from_str(r#"["A","B"]"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"["A","B"]"#);

        let bad: std::result::Result<SymbolAlphabet, _> = serde_json::from_str(r#"["A","A"]"#);
        assert!(bad.is_err());
    }
}
