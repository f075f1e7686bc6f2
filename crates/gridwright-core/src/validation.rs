//! Conflict detection and completion checking.

use crate::{DigitGrid, House, PositionSet};

/// Result of validating a board with [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Every filled cell that shares its digit with another filled cell in
    /// the same row, column, or box. Both cells of a conflicting pair are
    /// included.
    pub invalid_cells: PositionSet,
    /// `true` when all 81 cells are filled and no conflicts exist.
    pub is_complete: bool,
}

/// Checks a board for rule violations.
///
/// Empty cells are never conflicts; only duplicated digits within a house
/// are. A board with no filled cells validates as conflict-free and
/// incomplete.
///
/// # Examples
///
/// ```
/// use gridwright_core::{Digit, DigitGrid, Position, validate};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Digit::D5);
/// grid.set(Position::new(8, 0), Digit::D5);
///
/// let outcome = validate(&grid);
/// assert_eq!(outcome.invalid_cells.len(), 2);
/// assert!(!outcome.is_complete);
/// ```
#[must_use]
pub fn validate(grid: &DigitGrid) -> ValidationOutcome {
    let mut invalid_cells = PositionSet::EMPTY;
    for house in House::ALL {
        let positions = house.positions();
        for (i, pos) in positions.iter().enumerate() {
            let Some(digit) = grid.get(pos) else {
                continue;
            };
            for other in positions.iter().skip(i + 1) {
                if grid.get(other) == Some(digit) {
                    invalid_cells.insert(pos);
                    invalid_cells.insert(other);
                }
            }
        }
    }
    ValidationOutcome {
        invalid_cells,
        is_complete: grid.is_full() && invalid_cells.is_empty(),
    }
}
