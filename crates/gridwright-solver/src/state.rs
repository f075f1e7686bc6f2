use gridwright_core::{
    CandidateGrid, ConsistencyError, Digit, DigitGrid, DigitSet, Position, PositionSet,
};

/// Solver state for technique-based solving.
///
/// Wraps a [`CandidateGrid`] and tracks which cells have actually been
/// placed, as opposed to cells that merely narrowed to a single candidate.
/// Techniques read candidates through this type and the
/// [`TechniqueSolver`](crate::TechniqueSolver) mutates it by applying steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechniqueState {
    candidates: CandidateGrid,
    placed: PositionSet,
}

impl TechniqueState {
    /// Creates a state with every candidate open and nothing placed.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            candidates: CandidateGrid::new(),
            placed: PositionSet::EMPTY,
        }
    }

    /// Builds the state from a board: givens are placed, everything else is
    /// open.
    #[must_use]
    pub fn from_digit_grid(grid: &DigitGrid) -> Self {
        let mut state = Self::new();
        for (pos, digit) in grid.iter_filled() {
            state.place(pos, digit);
        }
        state
    }

    /// Returns the candidate digits at `pos`.
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates.candidates_at(pos)
    }

    /// Returns every position where `digit` is still a candidate.
    #[inline]
    #[must_use]
    pub fn digit_positions(&self, digit: Digit) -> PositionSet {
        self.candidates.digit_positions(digit)
    }

    /// Returns the cells that have been placed.
    #[inline]
    #[must_use]
    pub fn placed(&self) -> PositionSet {
        self.placed
    }

    /// Returns the cells that are still open.
    #[inline]
    #[must_use]
    pub fn unplaced(&self) -> PositionSet {
        !self.placed
    }

    /// Places a digit and eliminates it from all peers.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.candidates.place(pos, digit);
        self.placed.insert(pos);
    }

    /// Removes a candidate digit at a position. Returns `true` if it was
    /// present.
    #[inline]
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates.remove_candidate(pos, digit)
    }

    /// Removes a candidate digit from every position in `positions`.
    /// Returns `true` if any cell changed.
    pub fn remove_candidate_at_all(&mut self, positions: PositionSet, digit: Digit) -> bool {
        self.candidates.remove_candidate_at_all(positions, digit)
    }

    /// Returns the board of placed cells.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in self.placed {
            if let Some(digit) = self.candidates.candidates_at(pos).as_single() {
                grid.set(pos, digit);
            }
        }
        grid
    }

    /// Checks the candidate state for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if any cell or house is contradicted.
    #[inline]
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        self.candidates.check_consistency()
    }

    /// Returns whether every cell has been placed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if the state contains contradictions.
    pub fn is_solved(&self) -> Result<bool, ConsistencyError> {
        self.check_consistency()?;
        Ok(self.placed == PositionSet::FULL)
    }
}

impl Default for TechniqueState {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<&DigitGrid> for TechniqueState {
    fn from(grid: &DigitGrid) -> Self {
        Self::from_digit_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_tracks_placed_cells() {
        let mut state = TechniqueState::new();
        let pos = Position::new(2, 3);
        state.place(pos, Digit::D6);

        assert!(state.placed().contains(pos));
        assert!(!state.unplaced().contains(pos));
        assert_eq!(state.to_digit_grid().get(pos), Some(Digit::D6));
    }

    #[test]
    fn test_single_candidate_is_not_placed() {
        let mut state = TechniqueState::new();
        let pos = Position::new(0, 0);
        for digit in Digit::ALL {
            if digit != Digit::D4 {
                state.remove_candidate(pos, digit);
            }
        }

        assert_eq!(state.candidates_at(pos).as_single(), Some(Digit::D4));
        assert!(!state.placed().contains(pos));
        assert_eq!(state.to_digit_grid().get(pos), None);
    }

    #[test]
    fn test_from_digit_grid_places_givens() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(1, 1), Digit::D9);
        let state = TechniqueState::from_digit_grid(&grid);

        assert_eq!(state.placed().len(), 1);
        assert!(!state.candidates_at(Position::new(8, 1)).contains(Digit::D9));
    }
}
