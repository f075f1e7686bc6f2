//! Board positions.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). The flat index is row-major: `index = y * 9 + x`.
///
/// # Examples
///
/// ```
/// use gridwright_core::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.index(), 12);
/// assert_eq!(Position::from_index(12), pos);
/// assert_eq!(pos.box_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[inline]
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major flat index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        Self {
            x: (index % 9) as u8,
            y: (index / 9) as u8,
        }
    }

    /// Returns the column (0-8).
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major flat index (0-80).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 box containing this position (0-8,
    /// left to right, top to bottom).
    #[inline]
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the box with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[inline]
    #[must_use]
    pub const fn box_origin(box_index: u8) -> Self {
        assert!(box_index < 9);
        Self {
            x: (box_index % 3) * 3,
            y: (box_index / 3) * 3,
        }
    }

    /// Returns the position rotated 180° around the board center.
    ///
    /// Used by the carver's symmetric removal ordering.
    #[inline]
    #[must_use]
    pub const fn rotated_180(self) -> Self {
        Self {
            x: 8 - self.x,
            y: 8 - self.y,
        }
    }

    /// Iterates all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
