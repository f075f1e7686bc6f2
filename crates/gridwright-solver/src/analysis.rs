//! Difficulty analysis via the technique pipeline.

use gridwright_core::{Difficulty, DigitGrid};

use crate::{TechniqueSolver, TechniqueState, technique};

/// Result of analyzing a puzzle with [`analyze`].
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Estimated difficulty tier.
    pub difficulty: Difficulty,
    /// Technique names in first-use order, deduplicated.
    pub techniques: Vec<&'static str>,
    /// Number of applied steps.
    pub steps: usize,
    /// Number of givens on the analyzed board.
    pub clue_count: usize,
    /// `true` if the catalog solved the board without search.
    pub solved_by_techniques: bool,
}

/// Estimates how hard a puzzle is for a human solver.
///
/// Runs the full technique catalog to quiescence and classifies by the
/// hardest technique needed, refined by the clue count:
///
/// - pipeline stalls or the board is contradicted: `Expert` (search needed)
/// - X-Wing used: `Hard`
/// - locked candidates or a pair technique used: `Medium`
/// - singles only: `Easy` with 30 or more clues, `Medium` below that
///
/// Never fails; degenerate boards (empty, conflicting, already solved) get
/// a well-formed result.
#[must_use]
pub fn analyze(grid: &DigitGrid) -> Analysis {
    let solver = TechniqueSolver::with_all_techniques();
    let mut state = TechniqueState::from_digit_grid(grid);
    let clue_count = grid.filled_count();

    let (solved, steps) = match solver.solve(&mut state) {
        Ok(outcome) => (outcome.solved, outcome.steps),
        Err(_) => (false, Vec::new()),
    };

    let mut techniques = Vec::new();
    for step in &steps {
        if !techniques.contains(&step.technique) {
            techniques.push(step.technique);
        }
    }

    let difficulty = classify(solved, &techniques, clue_count);
    Analysis {
        difficulty,
        techniques,
        steps: steps.len(),
        clue_count,
        solved_by_techniques: solved,
    }
}

fn classify(solved: bool, techniques: &[&'static str], clue_count: usize) -> Difficulty {
    if !solved {
        return Difficulty::Expert;
    }
    let hardest = technique::all_techniques()
        .iter()
        .rposition(|technique| techniques.contains(&technique.name()));
    match hardest {
        // X-Wing
        Some(5) => Difficulty::Hard,
        // Locked Candidates, Naked Pair, Hidden Pair
        Some(2..=4) => Difficulty::Medium,
        // Singles only (or a board with nothing left to do)
        _ if clue_count >= 30 => Difficulty::Easy,
        _ => Difficulty::Medium,
    }
}
