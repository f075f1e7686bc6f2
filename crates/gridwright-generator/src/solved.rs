//! Seeded generation of complete solved boards.

use gridwright_core::{Digit, DigitGrid, Position};
use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

/// Generates a complete solved board from a seed.
///
/// The fill is a backtracking search over the empty board with the digit
/// order of every branch shuffled by a [`Pcg64Mcg`] seeded from `seed`.
/// Identical seeds produce identical boards.
///
/// # Examples
///
/// ```
/// use gridwright_generator::generate_complete;
///
/// let a = generate_complete(42);
/// let b = generate_complete(42);
/// assert_eq!(a, b);
/// assert!(a.is_full());
/// ```
#[must_use]
pub fn generate_complete(seed: u64) -> DigitGrid {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    fill(&mut rng)
}

/// Fills an empty board using the supplied generator.
///
/// The search cannot fail from an empty start, so the unreachable fallback
/// only guards the recursion contract.
pub(crate) fn fill<R: Rng>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let mut masks = UsedMasks::default();
    let filled = fill_from(&mut grid, &mut masks, rng, 0);
    debug_assert!(filled);
    grid
}

fn fill_from<R: Rng>(grid: &mut DigitGrid, masks: &mut UsedMasks, rng: &mut R, from: usize) -> bool {
    let Some(pos) = (from..81)
        .map(Position::from_index)
        .find(|&pos| grid.get(pos).is_none())
    else {
        return true;
    };

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if !masks.is_free(pos, digit) {
            continue;
        }
        grid.set(pos, digit);
        masks.mark(pos, digit);
        if fill_from(grid, masks, rng, pos.index() + 1) {
            return true;
        }
        masks.unmark(pos, digit);
        grid.clear(pos);
    }
    false
}

#[derive(Debug, Default, Clone, Copy)]
struct UsedMasks {
    rows: [u16; 9],
    columns: [u16; 9],
    boxes: [u16; 9],
}

impl UsedMasks {
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
