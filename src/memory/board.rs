//! Board layout: the fixed sequence of symbols for one game.

use std::ops::Index;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::symbols::{Symbol, SymbolAlphabet};
use crate::core::{GameError, GameRng, Result};

/// Rows and columns a board is laid out in. Cells are row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// The most square layout for `cells` cells, with `rows <= cols`.
    ///
    /// ```
    /// use kids_arcade::memory::GridShape;
    ///
    /// assert_eq!(GridShape::for_cells(16), GridShape::new(4, 4));
    /// assert_eq!(GridShape::for_cells(12), GridShape::new(3, 4));
    /// assert_eq!(GridShape::for_cells(14), GridShape::new(2, 7));
    /// ```
    #[must_use]
    pub fn for_cells(cells: usize) -> Self {
        let mut rows = 1;
        let mut candidate = 1;
        while candidate * candidate <= cells {
            if cells % candidate == 0 {
                rows = candidate;
            }
            candidate += 1;
        }
        Self {
            rows,
            cols: cells / rows,
        }
    }

    #[must_use]
    pub const fn cells(self) -> usize {
        self.rows * self.cols
    }

    /// `(row, col)` of a cell index.
    #[must_use]
    pub const fn position(self, index: usize) -> Option<(usize, usize)> {
        if self.cols == 0 || index >= self.cells() {
            None
        } else {
            Some((index / self.cols, index % self.cols))
        }
    }

    /// Cell index of `(row, col)`.
    #[must_use]
    pub const fn index(self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Symbols assigned to cells for one game.
///
/// Every symbol appears exactly twice. Order never changes after creation.
/// Deserializing runs the same checks as [`Board::from_symbols`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    symbols: Vector<Symbol>,
    grid: GridShape,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardData {
    symbols: Vector<Symbol>,
    grid: GridShape,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(data: BoardData) -> Result<Self> {
        Self::from_symbols(data.symbols, Some(data.grid))
    }
}

impl Board {
    /// Deal a fresh board of `pair_count` pairs.
    ///
    /// Samples distinct symbols, duplicates them and applies a uniform
    /// shuffle. Uses `grid` when given, otherwise [`GridShape::for_cells`].
    pub fn deal(
        alphabet: &SymbolAlphabet,
        pair_count: usize,
        grid: Option<GridShape>,
        rng: &mut GameRng,
    ) -> Result<Self> {
        if pair_count == 0 {
            return Err(GameError::NoPairs);
        }
        let grid = checked_grid(grid, pair_count * 2)?;

        let picked = alphabet.sample(pair_count, rng)?;
        let mut cells: Vec<Symbol> = picked.iter().chain(picked.iter()).cloned().collect();
        rng.shuffle(&mut cells);

        log::debug!("Dealt {} board with {} pairs", grid, pair_count);
        Ok(Self {
            symbols: cells.into_iter().collect(),
            grid,
        })
    }

    /// Build a board from a known layout.
    ///
    /// Useful for replays and tests. Fails unless every symbol occurs
    /// exactly twice.
    pub fn from_symbols<I, S>(symbols: I, grid: Option<GridShape>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let symbols: Vector<Symbol> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(GameError::NoPairs);
        }

        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for symbol in &symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        if counts.values().any(|&count| count != 2) {
            return Err(GameError::UnpairedBoard);
        }

        let grid = checked_grid(grid, symbols.len())?;
        Ok(Self { symbols, grid })
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len() / 2
    }

    #[must_use]
    pub fn grid(&self) -> GridShape {
        self.grid
    }

    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Indices holding `symbol`.
    #[must_use]
    pub fn positions_of(&self, symbol: &Symbol) -> Vec<usize> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| *s == symbol)
            .map(|(i, _)| i)
            .collect()
    }

    /// Distinct symbols on this board, in first-seen order.
    pub fn alphabet(&self) -> SymbolAlphabet {
        let mut distinct: Vec<String> = Vec::with_capacity(self.pair_count());
        for symbol in &self.symbols {
            if !distinct.iter().any(|s| s == symbol.as_str()) {
                distinct.push(symbol.as_str().to_string());
            }
        }
        // Distinct by construction
        SymbolAlphabet::new(distinct).unwrap_or_default()
    }
}

impl Index<usize> for Board {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

fn checked_grid(grid: Option<GridShape>, cells: usize) -> Result<GridShape> {
    match grid {
        Some(grid) if grid.cells() != cells => Err(GameError::GridMismatch {
            rows: grid.rows,
            cols: grid.cols,
            cells,
        }),
        Some(grid) => Ok(grid),
        None => Ok(GridShape::for_cells(cells)),
    }
}
