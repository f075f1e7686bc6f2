//! Core data structures for the gridwright Sudoku engine.
//!
//! This crate defines the canonical board representation and the pure,
//! stateless primitives every other component builds on:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`DigitSet`]: a bitmask of candidate digits for a single cell
//! - [`Position`] / [`PositionSet`]: cell coordinates and 81-cell bitsets
//! - [`House`]: rows, columns, and 3×3 boxes
//! - [`DigitGrid`]: the 81-cell board (row-major, empty cells unset)
//! - [`CandidateGrid`]: derived per-cell candidate tracking
//! - [`validate`]: placement-conflict and completion checking
//! - [`Difficulty`]: the four-tier difficulty scale and its clue bands
//!
//! Everything here is a pure function of its inputs; no entity outlives a
//! call and no global state exists.
//!
//! # Examples
//!
//! ```
//! use gridwright_core::{Digit, DigitGrid, Position, validate};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Digit::D5);
//!
//! let outcome = validate(&grid);
//! assert!(outcome.invalid_cells.is_empty());
//! assert!(!outcome.is_complete);
//! ```

pub mod candidates;
pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;
pub mod validation;

pub use self::{
    candidates::{CandidateGrid, ConsistencyError},
    difficulty::Difficulty,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridError},
    house::House,
    position::Position,
    position_set::PositionSet,
    validation::{ValidationOutcome, validate},
};
