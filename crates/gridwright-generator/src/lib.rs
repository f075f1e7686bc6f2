//! Seeded puzzle generation for the gridwright Sudoku engine.
//!
//! Generation is a two-stage pipeline sharing one random generator:
//!
//! 1. [`generate_complete`] fills a solved board by backtracking with
//!    shuffled digit orders.
//! 2. The carver removes clues down to a difficulty tier's clue band,
//!    checking after every removal that the puzzle still has exactly one
//!    solution.
//!
//! The whole pipeline is a pure function of `(seed, difficulty)`.
//!
//! # Examples
//!
//! ```
//! use gridwright_core::Difficulty;
//! use gridwright_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let a = generator.generate_with_seed(42);
//! let b = generator.generate_with_seed(42);
//! assert_eq!(a.puzzle, b.puzzle);
//! assert_eq!(a.solution, b.solution);
//! ```

mod carve;
mod solved;

use gridwright_core::{Difficulty, DigitGrid};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

pub use self::{carve::CarveConfig, solved::generate_complete};

/// A generated puzzle together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved puzzle, uniquely solvable.
    pub puzzle: DigitGrid,
    /// The complete board the puzzle was carved from.
    pub solution: DigitGrid,
    /// Seed that produced this puzzle.
    pub seed: u64,
    /// Difficulty tier the carver targeted.
    pub difficulty: Difficulty,
}

impl GeneratedPuzzle {
    /// Returns the number of clues left in the puzzle.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.puzzle.filled_count()
    }
}

/// Generates puzzles for a difficulty tier.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
    config: CarveConfig,
}

impl PuzzleGenerator {
    /// Creates a generator targeting the tier's default clue band.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_config(difficulty, CarveConfig::for_difficulty(difficulty))
    }

    /// Creates a generator with an explicit carve configuration.
    #[must_use]
    pub fn with_config(difficulty: Difficulty, config: CarveConfig) -> Self {
        Self { difficulty, config }
    }

    /// Returns the carve configuration.
    #[must_use]
    pub fn config(&self) -> &CarveConfig {
        &self.config
    }

    /// Generates a puzzle from a seed.
    ///
    /// One [`Pcg64Mcg`] seeded from `seed` drives both the solved-board fill
    /// and the carve, so equal inputs give equal outputs.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u64) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let solution = solved::fill(&mut rng);
        let puzzle = carve::carve(&solution, &self.config, &mut rng);
        GeneratedPuzzle {
            puzzle,
            solution,
            seed,
            difficulty: self.difficulty,
        }
    }
}
