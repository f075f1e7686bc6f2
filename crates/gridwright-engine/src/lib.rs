//! Stateless boundary API of the gridwright Sudoku engine.
//!
//! This crate is the narrow surface hosts call: plain byte boards in
//! (81 cells, row-major, `0` = empty), structured serde-serializable
//! reports out. No entity outlives a call and no state is shared between
//! calls; determinism comes from explicit seeds.
//!
//! Inputs are checked before any algorithm runs: a wrong length or a cell
//! value above 9 is [`EngineError::InvalidInput`]. Unsolvable and
//! non-unique boards are not errors; they are encoded in return values
//! (see [`solve_puzzle`] and [`check_unique_solution`]).
//!
//! # Examples
//!
//! ```
//! use gridwright_engine as engine;
//!
//! let puzzle = engine::generate_puzzle_with_seed(3, 42);
//! let report = engine::validate_board(&puzzle)?;
//! assert!(report.invalid_cells.is_empty());
//! assert!(engine::check_unique_solution(&puzzle)?);
//! # Ok::<(), engine::EngineError>(())
//! ```

mod api;
mod convert;
mod reports;

use derive_more::{Display, Error, From};
use gridwright_core::grid::GridError;

pub use self::{
    api::{
        analyze_puzzle_difficulty, check_unique_solution, create_game, create_game_with_seed,
        generate_custom_puzzle, generate_puzzle, generate_puzzle_with_seed, get_hint, reveal_hint,
        solve_puzzle, solve_with_techniques, validate_board, validate_board_sparse,
    },
    reports::{AnalysisReport, Hint, SolveTrace, TraceAction, TraceStep, ValidationReport},
};

/// Errors produced at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// The input board was malformed: wrong cell count or a cell value
    /// outside 0-9.
    #[display("invalid input: {_0}")]
    InvalidInput(GridError),
}
