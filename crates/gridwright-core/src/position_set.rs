//! Sets of board positions.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign},
};

use crate::Position;

/// A set of board positions, stored as an 81-bit mask.
///
/// Bit `n` represents the cell at flat index `n` (row-major). Used for
/// tracking filled cells, technique elimination targets, and house
/// membership queries.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet(u128);

const MASK: u128 = (1 << 81) - 1;

const fn row_mask(y: usize) -> u128 {
    0b1_1111_1111 << (y * 9)
}

const fn column_mask(x: usize) -> u128 {
    let mut mask = 0;
    let mut y = 0;
    while y < 9 {
        mask |= 1 << (y * 9 + x);
        y += 1;
    }
    mask
}

const fn box_mask(index: usize) -> u128 {
    let origin = (index / 3) * 27 + (index % 3) * 3;
    0b111 << origin | 0b111 << (origin + 9) | 0b111 << (origin + 18)
}

macro_rules! mask_table {
    ($f:ident) => {{
        let mut table = [PositionSet(0); 9];
        let mut i = 0;
        while i < 9 {
            table[i] = PositionSet($f(i));
            i += 1;
        }
        table
    }};
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all 81 positions.
    pub const FULL: Self = Self(MASK);

    /// Per-row position sets, indexed by `y`.
    pub const ROWS: [Self; 9] = mask_table!(row_mask);
    /// Per-column position sets, indexed by `x`.
    pub const COLUMNS: [Self; 9] = mask_table!(column_mask);
    /// Per-box position sets, indexed by box index.
    pub const BOXES: [Self; 9] = mask_table!(box_mask);

    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single position.
    #[inline]
    #[must_use]
    pub const fn from_elem(pos: Position) -> Self {
        Self(1 << pos.index())
    }

    /// Returns `true` if the set contains `pos`.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Inserts a position. Returns `true` if the set changed.
    #[inline]
    pub fn insert(&mut self, pos: Position) -> bool {
        let old = self.0;
        self.0 |= 1 << pos.index();
        self.0 != old
    }

    /// Removes a position. Returns `true` if the set changed.
    #[inline]
    pub fn remove(&mut self, pos: Position) -> bool {
        let old = self.0;
        self.0 &= !(1 << pos.index());
        self.0 != old
    }

    /// Returns the number of positions in the set.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole position if the set has exactly one element.
    #[inline]
    #[must_use]
    pub fn as_single(self) -> Option<Position> {
        if self.0.count_ones() == 1 {
            Some(Position::from_index(self.0.trailing_zeros() as usize))
        } else {
            None
        }
    }

    /// Returns `true` if every position of `other` is in `self`.
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterates the positions in flat-index order.
    #[inline]
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for PositionSet {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for PositionSet {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PositionSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PositionSet {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for PositionSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Sub for PositionSet {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

impl SubAssign for PositionSet {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0;
    }
}

impl Not for PositionSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0 & MASK)
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`], in flat-index order.
#[derive(Debug, Clone)]
pub struct Iter(u128);

impl Iterator for Iter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Position::from_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
