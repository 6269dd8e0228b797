//! Time source abstraction.
//!
//! Engines never read the wall clock themselves: every transition receives
//! the current time as a [`Millis`] value. Sessions obtain it from a
//! [`Clock`], which is a [`SystemClock`] in production and a [`ManualClock`]
//! in tests so timed behaviour (mismatch display, elapsed time) can be
//! exercised without real time passing.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Milliseconds since an arbitrary epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Millis(pub u64);

impl Millis {
    /// Create a timestamp from a raw millisecond count.
    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Get the raw millisecond count.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Timestamp `ms` milliseconds later, saturating at the maximum.
    #[must_use]
    pub const fn plus(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier` (zero if `earlier` is later).
    #[must_use]
    pub const fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Source of the current time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Millis;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        let ms = chrono::Utc::now().timestamp_millis();
        Millis(u64::try_from(ms).unwrap_or(0))
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep a handle
/// while a session owns another.
///
/// ```
/// use kids_arcade::core::{Clock, ManualClock, Millis};
///
/// let clock = ManualClock::new(Millis(1_000));
/// let handle = clock.clone();
/// handle.advance(250);
/// assert_eq!(clock.now(), Millis(1_250));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    #[must_use]
    pub fn new(start: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(start.0)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute time.
    pub fn set(&self, at: Millis) {
        self.now.set(at.0);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}
