//! # kids-arcade
//!
//! Game engines, accounts and sessions for a children's activity arcade.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every activity is a state machine driven by
//!    events. Time and randomness come in through a `Context`, never from
//!    globals, so any run can be replayed from a seed and a list of events.
//!
//! 2. **Clicks Never Fail**: Stale or out-of-range input is absorbed and
//!    reported as `Ignored`. Only construction and storage return errors.
//!
//! 3. **No Hidden Timers**: A shown mismatch is an explicit phase that a
//!    `tick` (or the next click) resolves. Nothing sleeps.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Boards, canvases and galleries live in
//!   `im` collections so the reducer can clone state cheaply.
//!
//! - **Sessions Over Storage**: A `Session` knows which screen is open and
//!   which results are owed; the `Arcade` facade writes them to a
//!   `UserStore`.
//!
//! ## Modules
//!
//! - `core`: RNG, clock and errors
//! - `rules`: `Activity` trait, reducer and result types
//! - `memory`: Memory Match engine
//! - `quiz`: Math Adventure and Shape Safari
//! - `paint`: Paint Studio
//! - `account`: Users, password hashing and statistics
//! - `session`: Screen routing and the `Arcade` facade
//! - `config`: TOML configuration

pub mod account;
pub mod config;
pub mod core;
pub mod memory;
pub mod paint;
pub mod quiz;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Clock, ConfigError, GameError, GameRng, ManualClock, Millis, SystemClock};

pub use crate::rules::{reduce, Activity, ActivityKind, ActivityResult, Context, MemoryResult, QuizResult};

pub use crate::memory::{Board, GridShape, MemoryEvent, MemoryGame, MemoryOutcome, MemoryPhase, MemorySettings};

pub use crate::quiz::{MathEvent, MathQuiz, QuizOutcome, QuizSettings, Shape, ShapeEvent, ShapeQuiz};

pub use crate::paint::{Artwork, Canvas, PaintEvent, PaintOutcome, PaintSettings, PaintStudio, PaletteColor};

pub use crate::account::{
    AccountSettings, Accounts, AuthError, JsonFileStore, MemoryStore, StoreError, UserRecord, UserStats,
    UserStore,
};

pub use crate::session::{Arcade, ArcadeError, Screen, Session, SessionEvent, SessionOutcome, Step};

pub use crate::config::ArcadeConfig;
