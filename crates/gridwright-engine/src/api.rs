//! Boundary operations.

use std::time::{SystemTime, UNIX_EPOCH};

use gridwright_core::{Difficulty, DigitGrid, Position, validate};
use gridwright_generator::{CarveConfig, PuzzleGenerator};
use gridwright_solver::{StepAction, TechniqueSolver, TechniqueState, analyze, backtracking};
use log::{debug, warn};

use crate::{
    EngineError,
    convert::{bytes_from_grid, grid_from_bytes, grid_from_sparse, sparse_from_grid},
    reports::{AnalysisReport, Hint, SolveTrace, TraceAction, TraceStep, ValidationReport},
};

/// Fewest clues a custom carve may request.
const MIN_CUSTOM_CLUES: usize = 17;
/// Most clues a custom carve may request.
const MAX_CUSTOM_CLUES: usize = 50;

/// Technique name reported by [`reveal_hint`].
const REVEAL: &str = "Reveal";

/// Generates a puzzle at a 1-9 difficulty level with a time-derived seed.
///
/// The board is returned as 81 row-major cells, `0` = empty. For
/// reproducible output use [`generate_puzzle_with_seed`].
#[must_use]
pub fn generate_puzzle(difficulty: u8) -> [u8; 81] {
    generate_puzzle_with_seed(difficulty, time_seed())
}

/// Generates a puzzle at a 1-9 difficulty level from an explicit seed.
///
/// Equal `(difficulty, seed)` inputs produce equal boards. The result is
/// always uniquely solvable.
#[must_use]
pub fn generate_puzzle_with_seed(difficulty: u8, seed: u64) -> [u8; 81] {
    let tier = tier_from_level(difficulty);
    let generated = PuzzleGenerator::new(tier).generate_with_seed(seed);
    log_band(&generated.puzzle, tier);
    bytes_from_grid(&generated.puzzle)
}

/// Generates a puzzle with an explicit clue-count range.
///
/// `min_clues` and `max_clues` are clamped to 17-50 (and reordered if
/// reversed); `difficulty` still selects the tier reported by analysis
/// tooling. `prefer_symmetry` keeps removals in 180°-rotational pairs.
#[must_use]
pub fn generate_custom_puzzle(
    difficulty: u8,
    min_clues: usize,
    max_clues: usize,
    prefer_symmetry: bool,
    seed: u64,
) -> [u8; 81] {
    let clamped_min = min_clues.clamp(MIN_CUSTOM_CLUES, MAX_CUSTOM_CLUES);
    let clamped_max = max_clues.clamp(MIN_CUSTOM_CLUES, MAX_CUSTOM_CLUES);
    if clamped_min != min_clues || clamped_max != max_clues {
        warn!(
            "custom clue range {min_clues}-{max_clues} clamped to {clamped_min}-{clamped_max}"
        );
    }
    let (lo, hi) = if clamped_min <= clamped_max {
        (clamped_min, clamped_max)
    } else {
        (clamped_max, clamped_min)
    };
    let config = CarveConfig {
        min_clues: lo,
        max_clues: hi,
        prefer_symmetry,
        max_attempts: CarveConfig::DEFAULT_MAX_ATTEMPTS,
    };
    let generator = PuzzleGenerator::with_config(tier_from_level(difficulty), config);
    bytes_from_grid(&generator.generate_with_seed(seed).puzzle)
}

/// Generates a puzzle as a sparse board with a time-derived seed.
///
/// `None` marks empty cells. The sparse representation exists only at this
/// boundary.
#[must_use]
pub fn create_game(difficulty: u8) -> Vec<Option<u8>> {
    create_game_with_seed(difficulty, time_seed())
}

/// Generates a puzzle as a sparse board from an explicit seed.
#[must_use]
pub fn create_game_with_seed(difficulty: u8, seed: u64) -> Vec<Option<u8>> {
    let tier = tier_from_level(difficulty);
    let generated = PuzzleGenerator::new(tier).generate_with_seed(seed);
    log_band(&generated.puzzle, tier);
    sparse_from_grid(&generated.puzzle)
}

/// Checks a byte board for rule violations.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn validate_board(cells: &[u8]) -> Result<ValidationReport, EngineError> {
    Ok(validation_report(&grid_from_bytes(cells)?))
}

/// Checks a sparse board for rule violations.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn validate_board_sparse(cells: &[Option<u8>]) -> Result<ValidationReport, EngineError> {
    Ok(validation_report(&grid_from_sparse(cells)?))
}

/// Solves a board by exhaustive search.
///
/// If the board has no solution the input is returned unchanged; callers
/// distinguish the two cases by re-validating the result.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn solve_puzzle(cells: &[u8]) -> Result<Vec<u8>, EngineError> {
    let grid = grid_from_bytes(cells)?;
    match backtracking::solve(&grid) {
        Some(solution) => Ok(bytes_from_grid(&solution).to_vec()),
        None => {
            debug!("board is unsolvable, returning input unchanged");
            Ok(cells.to_vec())
        }
    }
}

/// Returns `true` if the board has exactly one solution.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn check_unique_solution(cells: &[u8]) -> Result<bool, EngineError> {
    Ok(backtracking::is_unique(&grid_from_bytes(cells)?))
}

/// Estimates how hard a board is for a human solver.
///
/// Degenerate boards (empty, conflicting, solved) yield a well-formed
/// report; boards beyond the technique catalog are rated `expert`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn analyze_puzzle_difficulty(cells: &[u8]) -> Result<AnalysisReport, EngineError> {
    let grid = grid_from_bytes(cells)?;
    let analysis = analyze(&grid);
    Ok(AnalysisReport {
        difficulty: analysis.difficulty.to_string(),
        techniques: analysis
            .techniques
            .iter()
            .map(ToString::to_string)
            .collect(),
        steps: analysis.steps,
        clue_count: analysis.clue_count,
        solved_by_techniques: analysis.solved_by_techniques,
    })
}

/// Runs the technique catalog to quiescence and returns the full trace.
///
/// A conflicting board yields an empty trace with the input board.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn solve_with_techniques(cells: &[u8]) -> Result<SolveTrace, EngineError> {
    let grid = grid_from_bytes(cells)?;
    let solver = TechniqueSolver::with_all_techniques();
    let mut state = TechniqueState::from_digit_grid(&grid);
    let mut steps = Vec::new();
    let solved = loop {
        match solver.step(&mut state) {
            Err(err) => {
                debug!("technique solve aborted: {err}");
                return Ok(SolveTrace {
                    solved: false,
                    steps: Vec::new(),
                    board: cells.to_vec(),
                });
            }
            Ok(None) => break false,
            Ok(Some(step)) => {
                steps.push(trace_step(&step));
                if state.is_solved().unwrap_or(false) {
                    break true;
                }
            }
        }
    };
    Ok(SolveTrace {
        solved,
        steps,
        board: bytes_from_grid(&state.to_digit_grid()).to_vec(),
    })
}

/// Suggests the next logical move.
///
/// Runs the technique pipeline until the first placement step, applying
/// elimination-only steps silently on the way. Returns `None` for complete
/// boards, boards with conflicts, and boards the catalog cannot advance;
/// the logical mode never guesses.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn get_hint(cells: &[u8]) -> Result<Option<Hint>, EngineError> {
    let grid = grid_from_bytes(cells)?;
    let outcome = validate(&grid);
    if outcome.is_complete || !outcome.invalid_cells.is_empty() {
        return Ok(None);
    }

    let solver = TechniqueSolver::with_all_techniques();
    let mut state = TechniqueState::from_digit_grid(&grid);
    loop {
        match solver.step(&mut state) {
            Err(err) => {
                debug!("hint search aborted: {err}");
                return Ok(None);
            }
            Ok(None) => return Ok(None),
            Ok(Some(step)) => {
                if let StepAction::Place { pos, digit } = step.action {
                    return Ok(Some(Hint {
                        cell: pos.index(),
                        number: digit.value(),
                        technique: step.technique.to_owned(),
                    }));
                }
            }
        }
    }
}

/// Reveals the solution's digit for the first empty cell.
///
/// This is the explicit non-logical hint mode: the digit comes straight
/// from the backtracking solution. Returns `None` if the board is complete
/// or unsolvable.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a malformed board.
pub fn reveal_hint(cells: &[u8]) -> Result<Option<Hint>, EngineError> {
    let grid = grid_from_bytes(cells)?;
    let Some(solution) = backtracking::solve(&grid) else {
        return Ok(None);
    };
    let hint = Position::all()
        .find(|&pos| grid.get(pos).is_none())
        .and_then(|pos| {
            solution.get(pos).map(|digit| Hint {
                cell: pos.index(),
                number: digit.value(),
                technique: REVEAL.to_owned(),
            })
        });
    Ok(hint)
}

fn validation_report(grid: &DigitGrid) -> ValidationReport {
    let outcome = validate(grid);
    ValidationReport {
        invalid_cells: outcome.invalid_cells.iter().map(Position::index).collect(),
        is_complete: outcome.is_complete,
    }
}

fn trace_step(step: &gridwright_solver::Step) -> TraceStep {
    let action = match step.action {
        StepAction::Place { pos, digit } => TraceAction::Place {
            cell: pos.index(),
            number: digit.value(),
        },
        StepAction::Eliminate { positions, digits } => TraceAction::Eliminate {
            cells: positions.iter().map(Position::index).collect(),
            numbers: digits.iter().map(u8::from).collect(),
        },
    };
    TraceStep {
        technique: step.technique.to_owned(),
        action,
    }
}

/// Maps the boundary's 1-9 difficulty level to a tier, warning on
/// out-of-range input before clamping.
fn tier_from_level(level: u8) -> Difficulty {
    if !(1..=9).contains(&level) {
        warn!("difficulty level {level} out of range 1-9, clamping");
    }
    Difficulty::from_level(level)
}

fn log_band(puzzle: &DigitGrid, tier: Difficulty) {
    let clues = puzzle.filled_count();
    if tier.clue_range().contains(&clues) {
        debug!("generated {tier} puzzle with {clues} clues");
    } else {
        warn!("generated {tier} puzzle with {clues} clues, outside the target band");
    }
}

fn time_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    u64::try_from(now.as_nanos()).unwrap_or(u64::MAX)
}
