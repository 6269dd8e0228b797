//! Core building blocks shared by every activity: RNG, time and errors.

pub mod clock;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use error::{ConfigError, GameError, Result};
pub use rng::{GameRng, GameRngState};
