//! Structured report types returned at the boundary.
//!
//! Reports are plain serde-serializable values so hosts receive typed
//! structure instead of re-parsing strings. Cell indices are row-major
//! (0-80) and numbers are digits 1-9.

use serde::{Deserialize, Serialize};

/// Result of validating a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Row-major indices of cells conflicting with another cell in their
    /// row, column, or box. Both cells of a pair are listed, ascending.
    pub invalid_cells: Vec<usize>,
    /// `true` when all 81 cells are filled with no conflicts.
    pub is_complete: bool,
}

/// Result of analyzing a puzzle's difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Difficulty tier name: `easy`, `medium`, `hard`, or `expert`.
    pub difficulty: String,
    /// Technique names in first-use order, deduplicated.
    pub techniques: Vec<String>,
    /// Number of technique steps applied.
    pub steps: usize,
    /// Number of givens on the analyzed board.
    pub clue_count: usize,
    /// `true` if the technique catalog solved the board without search.
    pub solved_by_techniques: bool,
}

/// One step of a technique solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Name of the technique that produced the step.
    pub technique: String,
    /// The change the step made.
    pub action: TraceAction,
}

/// The change a [`TraceStep`] made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceAction {
    /// A digit was placed in a cell.
    Place {
        /// Row-major cell index.
        cell: usize,
        /// Placed digit.
        number: u8,
    },
    /// Candidate digits were removed from cells.
    Eliminate {
        /// Row-major cell indices, ascending.
        cells: Vec<usize>,
        /// Removed digits, ascending.
        numbers: Vec<u8>,
    },
}

/// Full trace of a technique solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveTrace {
    /// `true` if the board was fully solved by techniques.
    pub solved: bool,
    /// Applied steps, in order.
    pub steps: Vec<TraceStep>,
    /// The board after the final step (81 cells, `0` = empty).
    pub board: Vec<u8>,
}

/// A single suggested move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Row-major index of the cell to fill.
    pub cell: usize,
    /// Digit to place.
    pub number: u8,
    /// Name of the justifying technique, or `Reveal` for solution lookups.
    pub technique: String,
}
