//! The 81-cell board of placed digits.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};

use crate::{Digit, Position, PositionSet};

/// A 9×9 board of placed digits.
///
/// Each cell holds an optional [`Digit`]; `None` means empty. Positions are
/// addressed by [`Position`] and stored row-major.
///
/// The text format accepted by [`FromStr`] and produced by [`Display`] is 81
/// cells in row-major order: digits `1`-`9` for filled cells, any of `_`, `.`,
/// or `0` for empty cells, with all whitespace ignored.
///
/// # Examples
///
/// ```
/// use gridwright_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
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
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places a digit at `pos`, overwriting any previous value.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Clears the cell at `pos`.
    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns the set of filled positions.
    #[must_use]
    pub fn filled_positions(&self) -> PositionSet {
        Position::all().filter(|&pos| self.get(pos).is_some()).collect()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterates `(Position, Digit)` pairs for every filled cell, row-major.
    pub fn iter_filled(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        Position::all().filter_map(|pos| self.get(pos).map(|digit| (pos, digit)))
    }

    /// Builds a grid from 81 cell values in row-major order.
    ///
    /// `0` means empty; `1`-`9` are digits.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellValueOutOfRange`] if any value exceeds 9.
    pub fn from_values(values: &[u8; 81]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let digit = Digit::try_from_value(value).ok_or(GridError::CellValueOutOfRange {
                index,
                value,
            })?;
            grid.cells[index] = Some(digit);
        }
        Ok(grid)
    }

    /// Returns the 81 cell values in row-major order, `0` for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [u8; 81] {
        let mut values = [0; 81];
        for (cell, value) in self.cells.iter().zip(&mut values) {
            if let Some(digit) = cell {
                *value = digit.value();
            }
        }
        values
    }
}

impl Default for DigitGrid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DigitGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut grid = Self::new();
        let mut index = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if index >= 81 {
                return Err(GridError::TooManyCells);
            }
            match ch {
                '_' | '.' | '0' => {}
                '1'..='9' => {
                    grid.cells[index] = ch
                        .to_digit(10)
                        .and_then(|value| u8::try_from(value).ok())
                        .and_then(Digit::try_from_value);
                }
                _ => return Err(GridError::InvalidCharacter { ch, index }),
            }
            index += 1;
        }
        if index < 81 {
            return Err(GridError::TooFewCells { count: index });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
                if x == 2 || x == 5 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors produced when constructing a [`DigitGrid`] from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum GridError {
    /// A textual grid contained a character outside `1-9`, `_`, `.`, `0`,
    /// and whitespace.
    #[display("invalid character {ch:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Row-major cell index at which it appeared.
        index: usize,
    },
    /// A textual grid contained fewer than 81 cells.
    #[display("expected 81 cells, found {count}")]
    TooFewCells {
        /// Number of cells found.
        count: usize,
    },
    /// A textual grid contained more than 81 cells.
    #[display("expected 81 cells, found more")]
    TooManyCells,
    /// A numeric cell value was outside the range 0-9.
    #[display("cell {index} has value {value}, expected 0-9")]
    CellValueOutOfRange {
        /// Row-major cell index.
        index: usize,
        /// The offending value.
        value: u8,
    },
}

#[cfg(test)]
mod tests {
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

    #[test]
    fn test_parse_display_round_trip() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        let round_tripped: DigitGrid = grid.to_string().parse().unwrap();
        assert_eq!(grid, round_tripped);
    }

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let a: DigitGrid = "_".repeat(81).parse().unwrap();
        let b: DigitGrid = ".".repeat(81).parse().unwrap();
        let c: DigitGrid = "0".repeat(81).parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.filled_count(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(GridError::InvalidCharacter { ch: 'x', index: 0 })
        );
        assert_eq!(
            "1".repeat(80).parse::<DigitGrid>(),
            Err(GridError::TooFewCells { count: 80 })
        );
        assert_eq!(
            "1".repeat(82).parse::<DigitGrid>(),
            Err(GridError::TooManyCells)
        );
    }

    #[test]
    fn test_values_round_trip() {
        let grid: DigitGrid = PUZZLE.parse().unwrap();
        let values = grid.to_values();
        assert_eq!(DigitGrid::from_values(&values), Ok(grid));
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let mut values = [0; 81];
        values[13] = 10;
        assert_eq!(
            DigitGrid::from_values(&values),
            Err(GridError::CellValueOutOfRange {
                index: 13,
                value: 10
            })
        );
    }

    proptest::proptest! {
        #[test]
        fn test_arbitrary_values_round_trip(values in proptest::collection::vec(0u8..=9, 81)) {
            let mut array = [0u8; 81];
            array.copy_from_slice(&values);
            let grid = DigitGrid::from_values(&array).unwrap();
            proptest::prop_assert_eq!(grid.to_values(), array);
            let reparsed: DigitGrid = grid.to_string().parse().unwrap();
            proptest::prop_assert_eq!(reparsed, grid);
        }
    }

    #[test]
    fn test_set_clear() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(3, 4);
        grid.set(pos, Digit::D8);
        assert_eq!(grid.get(pos), Some(Digit::D8));
        assert_eq!(grid.filled_count(), 1);
        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
        assert!(grid.filled_positions().is_empty());
    }
}
