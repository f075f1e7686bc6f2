//! Uniqueness-preserving clue removal.

use gridwright_core::{Difficulty, DigitGrid, Position};
use gridwright_solver::backtracking;
use log::debug;
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

/// Parameters for carving a puzzle out of a solved board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveConfig {
    /// Fewest clues the carver may leave.
    pub min_clues: usize,
    /// Most clues the carver aims to leave.
    pub max_clues: usize,
    /// Remove clues in 180°-rotational pairs where possible.
    pub prefer_symmetry: bool,
    /// Full carve attempts before settling for the best result.
    pub max_attempts: usize,
}

impl CarveConfig {
    /// The default number of carve attempts.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

    /// Returns the config targeting a difficulty tier's clue band.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let band = difficulty.clue_range();
        Self {
            min_clues: *band.start(),
            max_clues: *band.end(),
            prefer_symmetry: true,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Carves clues out of `solution` until a target drawn from
/// `[min_clues, max_clues]` is reached.
///
/// Every removal is checked with the backtracking solver; a removal that
/// breaks uniqueness is undone and the cell stays locked for the rest of the
/// attempt. Uniqueness is monotone in the clue set, so the result is always
/// uniquely solvable. Reaching a low target can fail for an unlucky removal
/// order; in that case up to `max_attempts` fresh orders are tried and the
/// attempt with the fewest clues wins.
pub(crate) fn carve<R: Rng>(solution: &DigitGrid, config: &CarveConfig, rng: &mut R) -> DigitGrid {
    let target = rng.random_range(config.min_clues..=config.max_clues);
    let mut best = carve_once(solution, target, config.prefer_symmetry, rng);
    for attempt in 1..config.max_attempts.max(1) {
        if best.filled_count() <= target {
            break;
        }
        debug!(
            "carve attempt {attempt} stuck at {} clues (target {target}), retrying",
            best.filled_count()
        );
        let candidate = carve_once(solution, target, config.prefer_symmetry, rng);
        if candidate.filled_count() < best.filled_count() {
            best = candidate;
        }
    }
    best
}

fn carve_once<R: Rng>(
    solution: &DigitGrid,
    target: usize,
    prefer_symmetry: bool,
    rng: &mut R,
) -> DigitGrid {
    let mut puzzle = *solution;
    let mut order: Vec<Position> = Position::all().collect();
    order.shuffle(rng);

    for pos in order {
        if puzzle.filled_count() <= target {
            break;
        }
        let Some(digit) = puzzle.get(pos) else {
            continue;
        };

        let mirror = pos.rotated_180();
        let mirror_digit = puzzle.get(mirror);
        let remove_pair = prefer_symmetry
            && mirror != pos
            && mirror_digit.is_some()
            && puzzle.filled_count() >= target + 2;

        puzzle.clear(pos);
        if remove_pair {
            puzzle.clear(mirror);
        }
        if backtracking::is_unique(&puzzle) {
            continue;
        }

        if remove_pair {
            // The pair broke uniqueness; retry with the single cell.
            if let Some(digit) = mirror_digit {
                puzzle.set(mirror, digit);
            }
            if backtracking::is_unique(&puzzle) {
                continue;
            }
        }
        puzzle.set(pos, digit);
    }
    puzzle
}
