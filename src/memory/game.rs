//! The memory-match state machine.
//!
//! ## Cell lifecycle
//!
//! `Hidden → FaceUp → {Matched | Hidden}`. A matched cell never changes
//! again and always counts as revealed.
//!
//! ## Game phases
//!
//! - `Picking`: accepting picks, zero or one card face up
//! - `MismatchShown`: two different cards face up, waiting for `clear_at`;
//!   picks are absorbed until the pair flips back
//! - `Complete`: every pair found; terminal
//!
//! Clicks that cannot apply (matched or face-up cells, out-of-range
//! indices, a busy board, a finished game) are absorbed and reported as
//! [`MemoryOutcome::Ignored`]. A stale render firing a click is normal UI
//! noise, never an error.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, GridShape};
use super::config::MemorySettings;
use super::symbols::{Symbol, SymbolAlphabet};
use crate::core::{GameError, GameRng, Millis, Result};
use crate::rules::{Activity, ActivityKind, ActivityResult, Context, MemoryResult};

/// Visible state of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Face down.
    Hidden,
    /// Face up, waiting for a match decision.
    FaceUp,
    /// Part of a found pair.
    Matched,
}

impl CellState {
    /// CSS-style class name for renderers.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            CellState::Hidden => "hidden",
            CellState::FaceUp => "pending",
            CellState::Matched => "matched",
        }
    }
}

/// What a renderer needs for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView<'a> {
    pub index: usize,
    pub state: CellState,
    /// The symbol, only when the cell is face up or matched.
    pub symbol: Option<&'a Symbol>,
}

/// Game-level phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPhase {
    Picking,
    MismatchShown { clear_at: Millis },
    Complete,
}

/// Player input for the memory game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryEvent {
    /// Click a cell.
    Select(usize),
    /// Let time pass (flips back an expired mismatch).
    Tick,
    /// Flip back a shown mismatch right away.
    ClearMismatch,
    /// Deal a new board with the same settings.
    Restart,
}

/// What a memory event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOutcome {
    /// Nothing changed.
    Ignored,
    /// First card of a pick turned face up.
    FirstRevealed,
    /// Second card matched the first.
    Matched,
    /// Second card did not match. `cleared` is true when both cards were
    /// already turned back (no display delay).
    Mismatched { cleared: bool },
    /// Last pair found.
    Completed(MemoryResult),
    /// A shown mismatch was turned back.
    Cleared,
    /// A new board was dealt.
    Restarted,
}

impl MemoryOutcome {
    /// Whether this outcome could have changed the game.
    #[must_use]
    pub const fn has_update(self) -> bool {
        !matches!(self, MemoryOutcome::Ignored)
    }
}

/// One playthrough, from deal to completion.
///
/// Saved games are checked on load: a snapshot whose cell flags, pending
/// picks, pair count or phase disagree is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MemoryGameData")]
pub struct MemoryGame {
    settings: MemorySettings,
    alphabet: SymbolAlphabet,
    board: Board,
    revealed: Vector<bool>,
    matched: Vector<bool>,
    /// At most two indices.
    pending: SmallVec<[usize; 2]>,
    phase: MemoryPhase,
    moves: u32,
    pairs_found: usize,
    started_at: Millis,
    finished_at: Option<Millis>,
}

impl MemoryGame {
    /// Start a game with default settings and `pair_count` pairs.
    ///
    /// Fails with `InsufficientSymbols` when the built-in alphabet is too
    /// small, or `NoPairs` for zero.
    pub fn new_game(pair_count: usize, rng: &mut GameRng, now: Millis) -> Result<Self> {
        Self::new(MemorySettings::default().with_pairs(pair_count), rng, now)
    }

    /// Start a game from settings.
    pub fn new(settings: MemorySettings, rng: &mut GameRng, now: Millis) -> Result<Self> {
        let alphabet = settings.alphabet()?;
        Self::with_alphabet(settings, alphabet, rng, now)
    }

    /// Start a game dealing from a specific alphabet.
    ///
    /// `settings.symbols` is ignored in favour of `alphabet`.
    pub fn with_alphabet(
        settings: MemorySettings,
        alphabet: SymbolAlphabet,
        rng: &mut GameRng,
        now: Millis,
    ) -> Result<Self> {
        let board = Board::deal(&alphabet, settings.pair_count, settings.grid, rng)?;
        Ok(Self::assemble(settings, alphabet, board, now))
    }

    /// Start a game on a known board.
    ///
    /// Restarts deal from the board's own symbols.
    #[must_use]
    pub fn from_board(board: Board, mismatch_delay_ms: u64, now: Millis) -> Self {
        let settings = MemorySettings {
            pair_count: board.pair_count(),
            grid: Some(board.grid()),
            mismatch_delay_ms,
            symbols: None,
        };
        let alphabet = board.alphabet();
        Self::assemble(settings, alphabet, board, now)
    }

    fn assemble(settings: MemorySettings, alphabet: SymbolAlphabet, board: Board, now: Millis) -> Self {
        let cells = board.len();
        Self {
            settings,
            alphabet,
            board,
            revealed: Vector::from(vec![false; cells]),
            matched: Vector::from(vec![false; cells]),
            pending: SmallVec::new(),
            phase: MemoryPhase::Picking,
            moves: 0,
            pairs_found: 0,
            started_at: now,
            finished_at: None,
        }
    }

    /// Discard this game and deal a fresh one with the same settings.
    pub fn restart(&mut self, rng: &mut GameRng, now: Millis) -> Result<()> {
        let board = Board::deal(&self.alphabet, self.settings.pair_count, self.settings.grid, rng)?;
        *self = Self::assemble(self.settings.clone(), self.alphabet.clone(), board, now);
        Ok(())
    }

    // === Transitions ===

    /// Click a cell.
    ///
    /// An overdue mismatch is flipped back first, so a late timer never
    /// swallows a click. If the pick itself is then rejected the outcome is
    /// `Cleared`, since the board still changed.
    pub fn select(&mut self, index: usize, now: Millis) -> MemoryOutcome {
        let settled = self.tick(now);

        if !self.accepts(index) {
            log::trace!("Ignoring pick of cell {} in phase {:?}", index, self.phase);
            return if settled {
                MemoryOutcome::Cleared
            } else {
                MemoryOutcome::Ignored
            };
        }

        self.revealed.set(index, true);
        self.pending.push(index);
        if self.pending.len() < 2 {
            return MemoryOutcome::FirstRevealed;
        }

        self.moves += 1;
        let (first, second) = (self.pending[0], self.pending[1]);

        if self.board[first] == self.board[second] {
            self.matched.set(first, true);
            self.matched.set(second, true);
            self.pairs_found += 1;
            self.pending.clear();
            log::debug!("Matched {} at {} and {}", self.board[first], first, second);

            if self.pairs_found == self.board.pair_count() {
                self.phase = MemoryPhase::Complete;
                self.finished_at = Some(now);
                let result = self.summary_at(now);
                log::debug!("Board complete in {} moves, {}ms", result.moves, result.time_ms);
                return MemoryOutcome::Completed(result);
            }
            MemoryOutcome::Matched
        } else if self.settings.mismatch_delay_ms == 0 {
            self.hide_pending();
            MemoryOutcome::Mismatched { cleared: true }
        } else {
            self.phase = MemoryPhase::MismatchShown {
                clear_at: now.plus(self.settings.mismatch_delay_ms),
            };
            MemoryOutcome::Mismatched { cleared: false }
        }
    }

    /// Flip back a shown mismatch whose display time is over.
    ///
    /// Returns `true` if cards were turned back.
    pub fn tick(&mut self, now: Millis) -> bool {
        match self.phase {
            MemoryPhase::MismatchShown { clear_at } if now >= clear_at => self.clear_mismatch(),
            _ => false,
        }
    }

    /// Flip back a shown mismatch regardless of time.
    pub fn clear_mismatch(&mut self) -> bool {
        if !matches!(self.phase, MemoryPhase::MismatchShown { .. }) {
            return false;
        }
        self.hide_pending();
        self.phase = MemoryPhase::Picking;
        true
    }

    fn hide_pending(&mut self) {
        for &index in &self.pending {
            self.revealed.set(index, false);
        }
        self.pending.clear();
    }

    fn accepts(&self, index: usize) -> bool {
        matches!(self.phase, MemoryPhase::Picking)
            && self.pending.len() < 2
            && index < self.board.len()
            && !self.revealed[index]
            && !self.matched[index]
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn settings(&self) -> &MemorySettings {
        &self.settings
    }

    #[must_use]
    pub fn grid(&self) -> GridShape {
        self.board.grid()
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    #[must_use]
    pub fn phase(&self) -> MemoryPhase {
        self.phase
    }

    /// Cells face up and awaiting a decision.
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn cell_state(&self, index: usize) -> Option<CellState> {
        if index >= self.board.len() {
            None
        } else if self.matched[index] {
            Some(CellState::Matched)
        } else if self.revealed[index] {
            Some(CellState::FaceUp)
        } else {
            Some(CellState::Hidden)
        }
    }

    /// The symbol a player can currently see at `index`.
    #[must_use]
    pub fn visible_symbol(&self, index: usize) -> Option<&Symbol> {
        match self.cell_state(index)? {
            CellState::Hidden => None,
            CellState::FaceUp | CellState::Matched => self.board.symbol(index),
        }
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<CellView<'_>> {
        Some(CellView {
            index,
            state: self.cell_state(index)?,
            symbol: self.visible_symbol(index),
        })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView<'_>> + '_ {
        (0..self.board.len()).filter_map(move |index| self.cell(index))
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.board.pair_count()
    }

    #[must_use]
    pub fn pairs_left(&self) -> usize {
        self.board.pair_count() - self.pairs_found
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, MemoryPhase::Complete)
    }

    /// Two mismatched cards are on display.
    #[must_use]
    pub fn is_awaiting_clear(&self) -> bool {
        matches!(self.phase, MemoryPhase::MismatchShown { .. })
    }

    #[must_use]
    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    /// Time played so far, frozen once complete.
    #[must_use]
    pub fn elapsed(&self, now: Millis) -> u64 {
        self.finished_at.unwrap_or(now).since(self.started_at)
    }

    /// Total time, once complete.
    #[must_use]
    pub fn final_time(&self) -> Option<u64> {
        self.finished_at.map(|end| end.since(self.started_at))
    }

    /// Cells a click would currently affect.
    #[must_use]
    pub fn legal_selections(&self) -> Vec<usize> {
        (0..self.board.len()).filter(|&i| self.accepts(i)).collect()
    }

    /// Summary of a finished game.
    #[must_use]
    pub fn result(&self) -> Option<MemoryResult> {
        self.finished_at.map(|end| self.summary_at(end))
    }

    fn summary_at(&self, end: Millis) -> MemoryResult {
        MemoryResult {
            pairs: self.board.pair_count(),
            moves: self.moves,
            time_ms: end.since(self.started_at),
        }
    }
}

/// Unchecked wire form of a [`MemoryGame`].
#[derive(Deserialize)]
struct MemoryGameData {
    settings: MemorySettings,
    alphabet: SymbolAlphabet,
    board: Board,
    revealed: Vector<bool>,
    matched: Vector<bool>,
    pending: SmallVec<[usize; 2]>,
    phase: MemoryPhase,
    moves: u32,
    pairs_found: usize,
    started_at: Millis,
    finished_at: Option<Millis>,
}

impl TryFrom<MemoryGameData> for MemoryGame {
    type Error = GameError;

    fn try_from(data: MemoryGameData) -> Result<Self> {
        let invalid = |msg: &str| Err(GameError::InvalidState(msg.to_string()));
        let cells = data.board.len();

        if data.revealed.len() != cells || data.matched.len() != cells {
            return invalid("cell flags do not cover the board");
        }
        if data.settings.pair_count != data.board.pair_count() {
            return invalid("pair count differs from the board");
        }
        if (0..cells).any(|i| data.matched[i] && !data.revealed[i]) {
            return invalid("matched cell is face down");
        }
        if data.matched.iter().filter(|&&m| m).count() != data.pairs_found * 2 {
            return invalid("matched cells disagree with pairs found");
        }

        let face_up = (0..cells).filter(|&i| data.revealed[i] && !data.matched[i]).count();
        let pending_ok = data.pending.len() <= 2
            && data.pending.len() == face_up
            && data
                .pending
                .iter()
                .all(|&i| i < cells && data.revealed[i] && !data.matched[i])
            && !(data.pending.len() == 2 && data.pending[0] == data.pending[1]);
        if !pending_ok {
            return invalid("pending picks disagree with face-up cells");
        }

        let all_found = data.pairs_found == data.board.pair_count();
        let phase_ok = match data.phase {
            MemoryPhase::Picking => !all_found && data.pending.len() < 2,
            MemoryPhase::MismatchShown { .. } => data.pending.len() == 2,
            MemoryPhase::Complete => all_found && data.finished_at.is_some(),
        };
        if !phase_ok {
            return invalid("phase disagrees with the board");
        }

        Ok(Self {
            settings: data.settings,
            alphabet: data.alphabet,
            board: data.board,
            revealed: data.revealed,
            matched: data.matched,
            pending: data.pending,
            phase: data.phase,
            moves: data.moves,
            pairs_found: data.pairs_found,
            started_at: data.started_at,
            finished_at: data.finished_at,
        })
    }
}

impl Activity for MemoryGame {
    type Event = MemoryEvent;
    type Outcome = MemoryOutcome;

    fn kind(&self) -> ActivityKind {
        ActivityKind::Memory
    }

    fn apply(&mut self, event: MemoryEvent, ctx: &mut Context<'_>) -> MemoryOutcome {
        match event {
            MemoryEvent::Select(index) => self.select(index, ctx.now),
            MemoryEvent::Tick => {
                if self.tick(ctx.now) {
                    MemoryOutcome::Cleared
                } else {
                    MemoryOutcome::Ignored
                }
            }
            MemoryEvent::ClearMismatch => {
                if self.clear_mismatch() {
                    MemoryOutcome::Cleared
                } else {
                    MemoryOutcome::Ignored
                }
            }
            MemoryEvent::Restart => match self.restart(ctx.rng, ctx.now) {
                Ok(()) => MemoryOutcome::Restarted,
                Err(err) => {
                    log::warn!("Could not deal a new board: {}", err);
                    MemoryOutcome::Ignored
                }
            },
        }
    }

    fn tick(&mut self, now: Millis) -> bool {
        MemoryGame::tick(self, now)
    }

    fn is_finished(&self) -> bool {
        self.is_complete()
    }

    fn report(&self, outcome: &MemoryOutcome) -> Option<ActivityResult> {
        match outcome {
            MemoryOutcome::Completed(result) => Some(ActivityResult::Memory(*result)),
            _ => None,
        }
    }
}
