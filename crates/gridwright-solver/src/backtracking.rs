//! Exhaustive backtracking search with bitmask pruning.
//!
//! The search keeps one 9-bit mask per row, column, and box recording which
//! digits are already used, fills the first empty cell in row-major order,
//! and tries digits in ascending order. This is the ground truth the rest of
//! the engine leans on: solving, solution counting, and uniqueness checks.

use gridwright_core::{Digit, DigitGrid, Position};

/// Upper bound on search nodes per call. Ordinary boards finish in a few
/// thousand nodes; the bound only matters for adversarial near-empty inputs
/// fed to solution counting.
const NODE_BUDGET: u64 = 20_000_000;

#[derive(Debug, Clone, Copy)]
struct UsedMasks {
    rows: [u16; 9],
    columns: [u16; 9],
    boxes: [u16; 9],
}

impl UsedMasks {
    /// Builds the used-digit masks from a board's givens. Returns `None` if
    /// any house already contains a duplicate.
    fn from_grid(grid: &DigitGrid) -> Option<Self> {
        let mut masks = Self {
            rows: [0; 9],
            columns: [0; 9],
            boxes: [0; 9],
        };
        for (pos, digit) in grid.iter_filled() {
            if !masks.is_free(pos, digit) {
                return None;
            }
            masks.mark(pos, digit);
        }
        Some(masks)
    }

    #[inline]
    fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    #[inline]
    fn is_free(&self, pos: Position, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        self.rows[pos.y() as usize] & bit == 0
            && self.columns[pos.x() as usize] & bit == 0
            && self.boxes[pos.box_index() as usize] & bit == 0
    }

    #[inline]
    fn mark(&mut self, pos: Position, digit: Digit) {
        let bit = Self::bit(digit);
        self.rows[pos.y() as usize] |= bit;
        self.columns[pos.x() as usize] |= bit;
        self.boxes[pos.box_index() as usize] |= bit;
    }

    #[inline]
    fn unmark(&mut self, pos: Position, digit: Digit) {
        let bit = !Self::bit(digit);
        self.rows[pos.y() as usize] &= bit;
        self.columns[pos.x() as usize] &= bit;
        self.boxes[pos.box_index() as usize] &= bit;
    }
}

struct Search {
    masks: UsedMasks,
    nodes: u64,
    cap: usize,
    found: usize,
    first_solution: Option<DigitGrid>,
}

impl Search {
    fn run(&mut self, grid: &mut DigitGrid, from: usize) {
        if self.found >= self.cap || self.nodes >= NODE_BUDGET {
            return;
        }
        self.nodes += 1;

        let Some(pos) = (from..81)
            .map(Position::from_index)
            .find(|&pos| grid.get(pos).is_none())
        else {
            if self.first_solution.is_none() {
                self.first_solution = Some(*grid);
            }
            self.found += 1;
            return;
        };

        for digit in Digit::ALL {
            if !self.masks.is_free(pos, digit) {
                continue;
            }
            grid.set(pos, digit);
            self.masks.mark(pos, digit);
            self.run(grid, pos.index() + 1);
            self.masks.unmark(pos, digit);
            grid.clear(pos);
            if self.found >= self.cap || self.nodes >= NODE_BUDGET {
                return;
            }
        }
    }
}

fn search(grid: &DigitGrid, cap: usize) -> Search {
    let mut state = Search {
        masks: UsedMasks {
            rows: [0; 9],
            columns: [0; 9],
            boxes: [0; 9],
        },
        nodes: 0,
        cap,
        found: 0,
        first_solution: None,
    };
    let Some(masks) = UsedMasks::from_grid(grid) else {
        return state;
    };
    state.masks = masks;
    let mut work = *grid;
    state.run(&mut work, 0);
    state
}

/// Solves a board by exhaustive search.
///
/// Returns the first solution in digit-ascending search order, or `None` if
/// the givens conflict or admit no completion. The input is untouched.
///
/// # Examples
///
/// ```
/// use gridwright_core::DigitGrid;
/// use gridwright_solver::backtracking;
///
/// let solved = backtracking::solve(&DigitGrid::new()).unwrap();
/// assert!(solved.is_full());
/// ```
#[must_use]
pub fn solve(grid: &DigitGrid) -> Option<DigitGrid> {
    search(grid, 1).first_solution
}

/// Counts solutions, stopping early once `cap` have been found.
///
/// Returns a value in `0..=cap`. A board with conflicting givens counts as
/// having zero solutions.
#[must_use]
pub fn count_solutions_capped(grid: &DigitGrid, cap: usize) -> usize {
    search(grid, cap).found
}

/// Returns `true` if the board has exactly one solution.
#[must_use]
pub fn is_unique(grid: &DigitGrid) -> bool {
    count_solutions_capped(grid, 2) == 1
}

#[cfg(test)]
mod tests {
    use gridwright_core::validate;

    use super::*;

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    #[test]
    fn test_solves_classic_puzzle() {
        let puzzle: DigitGrid = PUZZLE.parse().unwrap();
        let expected: DigitGrid = SOLUTION.parse().unwrap();
        assert_eq!(solve(&puzzle), Some(expected));
    }

    #[test]
    fn test_solution_preserves_givens() {
        let puzzle: DigitGrid = PUZZLE.parse().unwrap();
        let solved = solve(&puzzle).unwrap();
        for (pos, digit) in puzzle.iter_filled() {
            assert_eq!(solved.get(pos), Some(digit));
        }
        assert!(validate(&solved).is_complete);
    }

    #[test]
    fn test_conflicting_givens_unsolvable() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Digit::D1);
        grid.set(Position::new(8, 0), Digit::D1);
        assert_eq!(solve(&grid), None);
        assert_eq!(count_solutions_capped(&grid, 2), 0);
    }

    #[test]
    fn test_classic_puzzle_is_unique() {
        let puzzle: DigitGrid = PUZZLE.parse().unwrap();
        assert!(is_unique(&puzzle));
    }

    #[test]
    fn test_two_solution_board() {
        // Clearing an unavoidable set of four cells (two rows in one band,
        // two columns, two digits forming a rectangle) yields exactly two
        // completions.
        let mut grid: DigitGrid = SOLUTION.parse().unwrap();
        for index in [32, 35, 41, 44] {
            grid.clear(Position::from_index(index));
        }
        assert_eq!(count_solutions_capped(&grid, 3), 2);
        assert!(!is_unique(&grid));
    }

    #[test]
    fn test_solved_board_has_one_solution() {
        let solution: DigitGrid = SOLUTION.parse().unwrap();
        assert_eq!(solve(&solution), Some(solution));
        assert!(is_unique(&solution));
    }

    #[test]
    fn test_empty_board_is_not_unique() {
        assert!(!is_unique(&DigitGrid::new()));
        assert_eq!(count_solutions_capped(&DigitGrid::new(), 2), 2);
    }
}
