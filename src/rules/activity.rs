//! Activity trait for the arcade's games.
//!
//! Each activity (memory, math, shapes, paint) implements `Activity` to
//! define how events change its state. Transitions never look at the wall
//! clock or a global RNG: both arrive through [`Context`], so the same
//! event applied to the same state with the same context always produces
//! the same result.

use serde::{Deserialize, Serialize};

use super::result::ActivityResult;
use crate::core::{GameRng, Millis};

/// The activities offered on the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Memory,
    Math,
    Shapes,
    Paint,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [Self::Memory, Self::Math, Self::Shapes, Self::Paint];

    /// Menu title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Memory => "Memory Match",
            Self::Math => "Math Adventure",
            Self::Shapes => "Shape Safari",
            Self::Paint => "Paint Studio",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Inputs a transition may depend on besides the event itself.
#[derive(Debug)]
pub struct Context<'a> {
    /// Time the event happened.
    pub now: Millis,
    /// Randomness for deals and new questions.
    pub rng: &'a mut GameRng,
}

impl<'a> Context<'a> {
    #[must_use]
    pub fn new(now: Millis, rng: &'a mut GameRng) -> Self {
        Self { now, rng }
    }
}

/// Activity trait.
///
/// ## Implementation Notes
///
/// - `apply`: Must absorb events that do not apply (stale clicks, picks
///   while the board is busy) and report them through the outcome rather
///   than failing
/// - `tick`: Advances time-based state; most activities have none
/// - `report`: Result worth recording produced by the given outcome
/// - `close`: Result worth recording when the player leaves mid-activity
pub trait Activity: Clone {
    /// Player input.
    type Event;

    /// What an event did.
    type Outcome: Clone + std::fmt::Debug;

    /// Which activity this is.
    fn kind(&self) -> ActivityKind;

    /// Apply an event in place.
    fn apply(&mut self, event: Self::Event, ctx: &mut Context<'_>) -> Self::Outcome;

    /// Advance timers. Returns `true` if visible state changed.
    fn tick(&mut self, _now: Millis) -> bool {
        false
    }

    /// Whether the activity reached a terminal state.
    fn is_finished(&self) -> bool {
        false
    }

    /// Statistics produced by an outcome of `apply`.
    fn report(&self, outcome: &Self::Outcome) -> Option<ActivityResult>;

    /// Statistics to record when the player walks away.
    fn close(&self) -> Option<ActivityResult> {
        None
    }
}

/// Pure transition: returns the next state and leaves `state` untouched.
///
/// Activities keep their collections in `im` structures, so the clone is
/// cheap regardless of board or canvas size.
///
/// ## Example
///
/// ```
/// use kids_arcade::core::{GameRng, Millis};
/// use kids_arcade::memory::{Board, MemoryEvent, MemoryGame, MemoryOutcome};
/// use kids_arcade::rules::{reduce, Context};
///
/// let board = Board::from_symbols(["A", "B", "A", "B"], None).unwrap();
/// let game = MemoryGame::from_board(board, 0, Millis(0));
///
/// let mut rng = GameRng::new(1);
/// let mut ctx = Context::new(Millis(10), &mut rng);
/// let (next, outcome) = reduce(&game, MemoryEvent::Select(0), &mut ctx);
///
/// assert_eq!(outcome, MemoryOutcome::FirstRevealed);
/// assert_eq!(game.pending().len(), 0);
/// assert_eq!(next.pending().len(), 1);
/// ```
pub fn reduce<A: Activity>(state: &A, event: A::Event, ctx: &mut Context<'_>) -> (A, A::Outcome) {
    let mut next = state.clone();
    let outcome = next.apply(event, ctx);
    (next, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_titles() {
        let titles: Vec<_> = ActivityKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            titles,
            vec!["Memory Match", "Math Adventure", "Shape Safari", "Paint Studio"]
        );
    }
}
