//! Per-cell candidate tracking derived from a board.

use derive_more::{Display, Error};

use crate::{Digit, DigitGrid, DigitSet, House, Position, PositionSet};

/// Tracks the candidate digits of every cell.
///
/// A fresh grid has all nine candidates in every cell. Placing a digit
/// narrows its cell to a single candidate and immediately removes that digit
/// from every peer cell (same row, column, and box). Logical techniques work
/// by removing further candidates until every cell is decided.
///
/// # Examples
///
/// ```
/// use gridwright_core::{CandidateGrid, Digit, Position};
///
/// let mut candidates = CandidateGrid::new();
/// candidates.place(Position::new(0, 0), Digit::D5);
///
/// assert!(!candidates.candidates_at(Position::new(8, 0)).contains(Digit::D5));
/// assert!(candidates.candidates_at(Position::new(8, 8)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateGrid {
    cells: [DigitSet; 81],
}

impl CandidateGrid {
    /// Creates a grid with every candidate available in every cell.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Builds a candidate grid from the filled cells of a board.
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        let mut candidates = Self::new();
        for (pos, digit) in grid.iter_filled() {
            candidates.place(pos, digit);
        }
        candidates
    }

    /// Returns the candidate digits at `pos`.
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Places a digit: narrows the cell to a single candidate and removes the
    /// digit from all peers.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = DigitSet::from_elem(digit);
        let peers = Self::peers(pos);
        self.remove_candidate_at_all(peers, digit);
    }

    /// Removes a candidate digit at a position. Returns `true` if it was
    /// present.
    #[inline]
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.cells[pos.index()].remove(digit)
    }

    /// Removes a candidate digit from every position in `positions`.
    /// Returns `true` if any cell changed.
    pub fn remove_candidate_at_all(&mut self, positions: PositionSet, digit: Digit) -> bool {
        let mut changed = false;
        for pos in positions {
            changed |= self.remove_candidate(pos, digit);
        }
        changed
    }

    /// Returns every position where `digit` is still a candidate.
    #[must_use]
    pub fn digit_positions(&self, digit: Digit) -> PositionSet {
        Position::all()
            .filter(|&pos| self.cells[pos.index()].contains(digit))
            .collect()
    }

    /// Returns every position with exactly one candidate.
    #[must_use]
    pub fn decided_cells(&self) -> PositionSet {
        Position::all()
            .filter(|&pos| self.cells[pos.index()].len() == 1)
            .collect()
    }

    /// Returns a board containing the decided cells; undecided cells are
    /// left empty.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::all() {
            if let Some(digit) = self.cells[pos.index()].as_single() {
                grid.set(pos, digit);
            }
        }
        grid
    }

    /// Checks the grid for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::NoCandidates`] if a cell has no candidate
    /// left, or [`ConsistencyError::NoPlaceForDigit`] if a house has no
    /// remaining position for some digit.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for pos in Position::all() {
            if self.cells[pos.index()].is_empty() {
                return Err(ConsistencyError::NoCandidates { pos });
            }
        }
        for digit in Digit::ALL {
            let positions = self.digit_positions(digit);
            for house in House::ALL {
                if (positions & house.positions()).is_empty() {
                    return Err(ConsistencyError::NoPlaceForDigit { house, digit });
                }
            }
        }
        Ok(())
    }

    /// Returns whether every cell is decided.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if the grid contains contradictions.
    pub fn is_solved(&self) -> Result<bool, ConsistencyError> {
        self.check_consistency()?;
        Ok(self.decided_cells() == PositionSet::FULL)
    }

    /// Returns the 20 peers of a position: the other cells of its row,
    /// column, and box.
    #[must_use]
    pub fn peers(pos: Position) -> PositionSet {
        let mut peers = PositionSet::EMPTY;
        for house in House::containing(pos) {
            peers |= house.positions();
        }
        peers.remove(pos);
        peers
    }
}

impl Default for CandidateGrid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<&DigitGrid> for CandidateGrid {
    fn from(grid: &DigitGrid) -> Self {
        Self::from_digit_grid(grid)
    }
}

/// A contradiction found in a [`CandidateGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConsistencyError {
    /// A cell has no candidate digit left.
    #[display("cell {pos} has no candidates")]
    NoCandidates {
        /// The contradicted cell.
        pos: Position,
    },
    /// A house has no remaining position for a digit.
    #[display("{house} has no place for digit {digit}")]
    NoPlaceForDigit {
        /// The house missing the digit.
        house: House,
        /// The digit that cannot be placed.
        digit: Digit,
    },
}
