//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] tracks the initial and current solver state, applies
//! technique steps, and asserts the expected changes with fluent chaining.

use std::str::FromStr as _;

use gridwright_core::{Digit, DigitGrid, Position};

use crate::{Technique, TechniqueState};

/// A test harness for verifying technique implementations.
///
/// All methods return `self` so tests read as a chain of actions and
/// assertions. Assertion methods panic with `#[track_caller]` so failures
/// point at the test line.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: TechniqueState,
    current: TechniqueState,
}

impl TechniqueTester {
    /// Creates a tester from an initial solver state.
    #[must_use]
    pub fn new<T>(initial: T) -> Self
    where
        T: Into<TechniqueState>,
    {
        let initial = initial.into();
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from a grid string in [`DigitGrid`]'s text format.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    #[must_use]
    pub fn from_grid_str(s: &str) -> Self {
        let grid = DigitGrid::from_str(s).unwrap();
        Self::new(TechniqueState::from_digit_grid(&grid))
    }

    /// Finds the technique's next step and applies it.
    ///
    /// # Panics
    ///
    /// Panics if the technique has no applicable step, or if the step does
    /// not change the state.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        let name = technique.name();
        let step = technique
            .find_step(&self.current)
            .unwrap_or_else(|| panic!("Expected {name} to find an applicable step"));
        assert!(
            step.apply(&mut self.current),
            "Expected the step found by {name} to change the state"
        );
        self
    }

    /// Applies the technique repeatedly until it has no applicable step.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while let Some(step) = technique.find_step(&self.current) {
            assert!(
                step.apply(&mut self.current),
                "Expected the step found by {} to change the state",
                technique.name()
            );
        }
        self
    }

    /// Asserts that the technique has no applicable step.
    ///
    /// # Panics
    ///
    /// Panics if the technique finds a step.
    #[track_caller]
    pub fn assert_no_step<T>(self, technique: &T) -> Self
    where
        T: Technique,
    {
        let step = technique.find_step(&self.current);
        assert!(
            step.is_none(),
            "Expected {} to have no applicable step, but found {step:?}",
            technique.name()
        );
        self
    }

    /// Asserts that a cell was placed with the given digit.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already placed initially, or is not now placed
    /// with `digit`.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        assert!(
            !self.initial.placed().contains(pos),
            "Expected cell at {pos} to be initially unplaced"
        );
        assert!(
            self.current.placed().contains(pos),
            "Expected cell at {pos} to be placed"
        );
        let candidates = self.current.candidates_at(pos);
        assert_eq!(
            candidates.as_single(),
            Some(digit),
            "Expected cell at {pos} to hold {digit}, but candidates are {candidates:?}"
        );
        self
    }

    /// Asserts that a candidate digit was removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the digit was not initially a candidate, or is still one.
    #[track_caller]
    pub fn assert_removed(self, pos: Position, digit: Digit) -> Self {
        assert!(
            self.initial.candidates_at(pos).contains(digit),
            "Expected {digit} to be an initial candidate at {pos}"
        );
        assert!(
            !self.current.candidates_at(pos).contains(digit),
            "Expected {digit} to be removed from {pos}, but candidates are {:?}",
            self.current.candidates_at(pos)
        );
        self
    }

    /// Asserts that a candidate digit survived at a cell.
    ///
    /// # Panics
    ///
    /// Panics if the digit is no longer a candidate at `pos`.
    #[track_caller]
    pub fn assert_kept(self, pos: Position, digit: Digit) -> Self {
        assert!(
            self.current.candidates_at(pos).contains(digit),
            "Expected {digit} to remain a candidate at {pos}, but candidates are {:?}",
            self.current.candidates_at(pos)
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technique::{BoxedTechnique, NakedSingle, Step, StepAction};

    #[derive(Debug)]
    struct PlaceD1At00;

    impl Technique for PlaceD1At00 {
        fn name(&self) -> &'static str {
            "place-d1-at-00"
        }

        fn clone_box(&self) -> BoxedTechnique {
            Box::new(PlaceD1At00)
        }

        fn find_step(&self, state: &TechniqueState) -> Option<Step> {
            let pos = Position::new(0, 0);
            if state.placed().contains(pos) {
                return None;
            }
            Some(Step {
                technique: self.name(),
                action: StepAction::Place {
                    pos,
                    digit: Digit::D1,
                },
            })
        }
    }

    #[test]
    fn test_apply_once_and_assert_placed() {
        TechniqueTester::new(TechniqueState::new())
            .apply_once(&PlaceD1At00)
            .assert_placed(Position::new(0, 0), Digit::D1)
            .assert_removed(Position::new(8, 0), Digit::D1)
            .assert_no_change(Position::new(5, 5));
    }

    #[test]
    fn test_apply_until_stuck() {
        TechniqueTester::new(TechniqueState::new())
            .apply_until_stuck(&PlaceD1At00)
            .assert_placed(Position::new(0, 0), Digit::D1);
    }

    #[test]
    #[should_panic(expected = "no applicable step")]
    fn test_assert_no_step_fails_when_step_exists() {
        TechniqueTester::new(TechniqueState::new()).assert_no_step(&PlaceD1At00);
    }

    #[test]
    fn test_from_grid_str() {
        TechniqueTester::from_grid_str(
            "
            12_ 456 789
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&NakedSingle::new())
        .assert_placed(Position::new(2, 0), Digit::D3);
    }
}
