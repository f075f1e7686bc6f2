use crate::{
    SolverError, TechniqueState,
    technique::{self, BoxedTechnique, Step},
};

/// Result of running the technique pipeline to quiescence.
#[derive(Debug, Clone)]
pub struct TechniqueSolveOutcome {
    /// `true` if every cell was placed using techniques alone.
    pub solved: bool,
    /// Every applied step, in order.
    pub steps: Vec<Step>,
}

/// A solver that applies human solving techniques in catalog order.
///
/// Each step tries every technique from the easiest down and applies the
/// first one that can make progress, then restarts from the top. Solving
/// stops when the state is solved or no technique applies.
///
/// # Examples
///
/// ```
/// use gridwright_core::DigitGrid;
/// use gridwright_solver::{TechniqueSolver, TechniqueState};
///
/// let puzzle: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let solver = TechniqueSolver::with_all_techniques();
/// let mut state = TechniqueState::from_digit_grid(&puzzle);
/// let outcome = solver.solve(&mut state)?;
/// assert!(outcome.solved);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TechniqueSolver {
    techniques: Vec<BoxedTechnique>,
}

impl TechniqueSolver {
    /// Creates a solver with the given techniques, tried in order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with the full catalog, easiest technique first.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Finds the next applicable step without mutating the state.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the state is contradicted.
    pub fn find_step(&self, state: &TechniqueState) -> Result<Option<Step>, SolverError> {
        state.check_consistency()?;
        for technique in &self.techniques {
            if let Some(step) = technique.find_step(state) {
                return Ok(Some(step));
            }
        }
        Ok(None)
    }

    /// Finds and applies the next applicable step.
    ///
    /// Returns the applied step, or `None` if no technique can make
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the state is contradicted
    /// before or after the step.
    pub fn step(&self, state: &mut TechniqueState) -> Result<Option<Step>, SolverError> {
        let Some(step) = self.find_step(state)? else {
            return Ok(None);
        };
        let changed = step.apply(state);
        debug_assert!(changed, "technique {} reported a no-op step", step.technique);
        state.check_consistency()?;
        Ok(Some(step))
    }

    /// Applies steps until the state is solved or no technique applies.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the state becomes
    /// contradicted during solving.
    pub fn solve(&self, state: &mut TechniqueState) -> Result<TechniqueSolveOutcome, SolverError> {
        let mut steps = Vec::new();
        while let Some(step) = self.step(state)? {
            steps.push(step);
            if state.is_solved()? {
                return Ok(TechniqueSolveOutcome {
                    solved: true,
                    steps,
                });
            }
        }
        let solved = state.is_solved()?;
        Ok(TechniqueSolveOutcome { solved, steps })
    }
}

impl Default for TechniqueSolver {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}

#[cfg(test)]
mod tests {
    use gridwright_core::{Digit, DigitGrid, Position};

    use super::*;
    use crate::technique::{HiddenSingle, NakedSingle, StepAction};

    fn singles_solver() -> TechniqueSolver {
        TechniqueSolver::new(vec![
            Box::new(NakedSingle::new()),
            Box::new(HiddenSingle::new()),
        ])
    }

    #[test]
    fn test_step_returns_none_on_open_state() {
        let solver = singles_solver();
        let mut state = TechniqueState::new();
        assert_eq!(solver.step(&mut state).unwrap(), None);
    }

    #[test]
    fn test_step_applies_naked_single() {
        let solver = singles_solver();
        let mut state = TechniqueState::new();
        let pos = Position::new(4, 4);
        for digit in Digit::ALL {
            if digit != Digit::D5 {
                state.remove_candidate(pos, digit);
            }
        }

        let step = solver.step(&mut state).unwrap().unwrap();
        assert_eq!(step.technique, "Naked Single");
        assert_eq!(
            step.action,
            StepAction::Place {
                pos,
                digit: Digit::D5
            }
        );
        assert!(state.placed().contains(pos));
    }

    #[test]
    fn test_find_step_does_not_mutate() {
        let solver = singles_solver();
        let mut state = TechniqueState::new();
        for digit in Digit::ALL {
            if digit != Digit::D5 {
                state.remove_candidate(Position::new(4, 4), digit);
            }
        }

        let before = state.clone();
        let step = solver.find_step(&state).unwrap();
        assert!(step.is_some());
        assert_eq!(state, before);
    }

    #[test]
    fn test_solve_easy_puzzle_with_singles() {
        let puzzle: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        let solver = singles_solver();
        let mut state = TechniqueState::from_digit_grid(&puzzle);
        let outcome = solver.solve(&mut state).unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.steps.len(), 81 - puzzle.filled_count());
        assert!(state.to_digit_grid().is_full());
    }

    #[test]
    fn test_solve_reports_error_on_conflicting_board() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Digit::D1);
        grid.set(Position::new(1, 0), Digit::D1);

        let solver = singles_solver();
        let mut state = TechniqueState::from_digit_grid(&grid);
        assert!(solver.solve(&mut state).is_err());
    }

    #[test]
    fn test_solve_stalls_on_open_state() {
        let solver = TechniqueSolver::with_all_techniques();
        let mut state = TechniqueState::new();
        let outcome = solver.solve(&mut state).unwrap();
        assert!(!outcome.solved);
        assert!(outcome.steps.is_empty());
    }
}
