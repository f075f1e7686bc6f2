//! Example demonstrating seeded puzzle generation.
//!
//! Generates a puzzle at a requested difficulty, prints the puzzle, its
//! solution, and the analyzer's verdict.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! cargo run --example generate_puzzle -- --difficulty hard --seed 42
//! cargo run --example generate_puzzle -- --count 5
//! ```

use clap::{Parser, ValueEnum};
use gridwright_core::Difficulty;
use gridwright_generator::{GeneratedPuzzle, PuzzleGenerator};
use gridwright_solver::analyze;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tier {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
            Tier::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to target.
    #[arg(long, value_name = "TIER", default_value = "easy")]
    difficulty: Tier,

    /// Seed for the first puzzle; subsequent puzzles increment it.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    for seed in args.seed..args.seed + args.count {
        print_puzzle(&generator.generate_with_seed(seed));
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    let analysis = analyze(&generated.puzzle);

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Puzzle ({} clues):", generated.clue_count());
    println!("{}", generated.puzzle);
    println!("Solution:");
    println!("{}", generated.solution);
    println!("Analysis:");
    println!("  target: {}", generated.difficulty);
    println!("  rated: {}", analysis.difficulty);
    println!("  steps: {}", analysis.steps);
    for technique in &analysis.techniques {
        println!("  uses: {technique}");
    }
    println!();
}
