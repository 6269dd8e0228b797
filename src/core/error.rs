//! Construction and configuration errors.
//!
//! Gameplay itself never fails: clicks that do not apply are absorbed and
//! reported through `Ignored` outcomes. Errors only arise when building a
//! game or loading configuration.

use thiserror::Error;

/// Errors raised while constructing a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Need {requested} distinct symbols but the alphabet only has {available}")]
    InsufficientSymbols { requested: usize, available: usize },
    #[error("A game needs at least one pair")]
    NoPairs,
    #[error("Symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(String),
    #[error("Board must contain every symbol exactly twice")]
    UnpairedBoard,
    #[error("Grid of {rows}x{cols} does not hold {cells} cells")]
    GridMismatch { rows: usize, cols: usize, cells: usize },
    #[error("Inconsistent game state: {0}")]
    InvalidState(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
