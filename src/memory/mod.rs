//! Memory-match engine.
//!
//! A board of paired symbols is dealt face down. The player turns two
//! cards per move; equal symbols stay face up as a matched pair, different
//! ones are shown briefly and turned back. The game ends when every pair
//! is found.
//!
//! ## Example
//!
//! ```
//! use kids_arcade::core::{GameRng, Millis};
//! use kids_arcade::memory::{Board, MemoryGame, MemoryOutcome};
//!
//! let board = Board::from_symbols(["A", "B", "B", "A"], None).unwrap();
//! let mut game = MemoryGame::from_board(board, 0, Millis(0));
//!
//! game.select(0, Millis(100));
//! assert_eq!(game.select(3, Millis(200)), MemoryOutcome::Matched);
//! game.select(1, Millis(300));
//! assert!(matches!(game.select(2, Millis(400)), MemoryOutcome::Completed(_)));
//! assert_eq!(game.moves(), 2);
//! ```

mod board;
mod config;
mod game;
mod symbols;

pub use board::{Board, GridShape};
pub use config::MemorySettings;
pub use game::{CellState, CellView, MemoryEvent, MemoryGame, MemoryOutcome, MemoryPhase};
pub use symbols::{Symbol, SymbolAlphabet, DEFAULT_SYMBOLS};
