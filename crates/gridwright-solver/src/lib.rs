//! Solving for the gridwright Sudoku engine.
//!
//! Two solvers live here:
//!
//! - [`backtracking`]: exhaustive depth-first search with bitmask pruning,
//!   used for solving, solution counting, and uniqueness checks.
//! - [`TechniqueSolver`]: an ordered catalog of human solving techniques,
//!   used for difficulty analysis and hints.
//!
//! [`analyze`] combines the two into a difficulty classification.

pub mod analysis;
pub mod backtracking;
mod state;
pub mod technique;
mod technique_solver;
pub mod testing;

use derive_more::{Display, Error, From};
use gridwright_core::ConsistencyError;

pub use self::{
    analysis::{Analysis, analyze},
    backtracking::{count_solutions_capped, is_unique, solve},
    state::TechniqueState,
    technique::{BoxedTechnique, Step, StepAction, Technique, all_techniques},
    technique_solver::{TechniqueSolveOutcome, TechniqueSolver},
};

/// Errors produced by technique-based solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// The candidate grid contains a contradiction.
    #[display("inconsistent grid: {_0}")]
    Inconsistent(ConsistencyError),
}
