//! Human solving techniques.
//!
//! Each technique implements [`Technique`] and reports the next applicable
//! step against a [`TechniqueState`] without mutating it. Steps are applied
//! by the [`TechniqueSolver`](crate::TechniqueSolver).

use std::fmt::Debug;

use gridwright_core::{Digit, DigitSet, Position, PositionSet};

use crate::TechniqueState;

mod hidden_pair;
mod hidden_single;
mod locked_candidates;
mod naked_pair;
mod naked_single;
mod x_wing;

pub use self::{
    hidden_pair::HiddenPair, hidden_single::HiddenSingle, locked_candidates::LockedCandidates,
    naked_pair::NakedPair, naked_single::NakedSingle, x_wing::XWing,
};

/// A Sudoku solving technique.
pub trait Technique: Debug + Send + Sync {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Finds the next applicable step without mutating the state.
    ///
    /// Returns `None` when the technique cannot make progress. A returned
    /// step is guaranteed to change the state when applied.
    fn find_step(&self, state: &TechniqueState) -> Option<Step>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns all techniques, ordered from easiest to hardest.
///
/// The order defines the catalog the analyzer and the hint engine walk:
/// singles, then intersection and subset eliminations, then fish.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(LockedCandidates::new()),
        Box::new(NakedPair::new()),
        Box::new(HiddenPair::new()),
        Box::new(XWing::new()),
    ]
}

/// A concrete step produced by a technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Name of the technique that produced this step.
    pub technique: &'static str,
    /// The change the step makes.
    pub action: StepAction,
}

/// The change a [`Step`] makes to the solver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Place a digit in a single cell.
    Place {
        /// Cell to place the digit into.
        pos: Position,
        /// Digit to place.
        digit: Digit,
    },
    /// Remove candidate digits from the specified cells.
    Eliminate {
        /// Cells to remove candidates from.
        positions: PositionSet,
        /// Digits to remove.
        digits: DigitSet,
    },
}

impl Step {
    /// Applies the step. Returns `true` if the state changed.
    pub(crate) fn apply(&self, state: &mut TechniqueState) -> bool {
        match self.action {
            StepAction::Place { pos, digit } => {
                let changed = !state.placed().contains(pos);
                state.place(pos, digit);
                changed
            }
            StepAction::Eliminate { positions, digits } => {
                let mut changed = false;
                for digit in digits {
                    changed |= state.remove_candidate_at_all(positions, digit);
                }
                changed
            }
        }
    }
}
