//! Houses: the 27 rows, columns, and boxes of the board.

use std::fmt::{self, Display};

use crate::{Position, PositionSet};

/// A Sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut all = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        all
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut all = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        all
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut all = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => {
                let origin = Position::box_origin(index);
                Position::new(origin.x() + i % 3, origin.y() + i / 3)
            }
        }
    }

    /// Returns all positions contained in this house.
    #[must_use]
    pub fn positions(self) -> PositionSet {
        match self {
            House::Row { y } => PositionSet::ROWS[y as usize],
            House::Column { x } => PositionSet::COLUMNS[x as usize],
            House::Box { index } => PositionSet::BOXES[index as usize],
        }
    }

    /// Returns the three houses containing `pos`: its row, column, and box.
    #[must_use]
    pub fn containing(pos: Position) -> [Self; 3] {
        [
            House::Row { y: pos.y() },
            House::Column { x: pos.x() },
            House::Box {
                index: pos.box_index(),
            },
        ]
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { y } => write!(f, "row {y}"),
            House::Column { x } => write!(f, "column {x}"),
            House::Box { index } => write!(f, "box {index}"),
        }
    }
}
