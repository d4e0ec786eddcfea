//! Example demonstrating crossword grid generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` over the built-in riddle bank
//! - Generate a puzzle from a random or fixed seed
//! - Display the seed, grid and placed words
//! - Sample many puzzles and report how full the grids get
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample puzzles in parallel and keep the one with the most letters:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --samples 10000
//! ```

use std::process;

use clap::Parser;
use crossgrid_core::WordBank;
use crossgrid_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to generate from (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "samples")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to sample; the fullest one is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let bank = WordBank::builtin();
    let generator = PuzzleGenerator::new(&bank);

    if let Some(seed) = args.seed {
        print_puzzle(&generator.generate_with_seed(seed), None);
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let puzzles: Vec<GeneratedPuzzle> = (0..args.samples)
        .into_par_iter()
        .map(|_| generator.generate())
        .collect();

    let stats = SampleStats::collect(&puzzles);
    let best = puzzles
        .iter()
        .max_by_key(|puzzle| puzzle.grid.count_letters());

    match best {
        Some(puzzle) => print_puzzle(puzzle, (args.samples > 1).then_some(&stats)),
        None => {
            eprintln!("No puzzle generated.");
            process::exit(1);
        }
    }
}

#[derive(Debug)]
struct SampleStats {
    samples: usize,
    degenerate: usize,
    total_letters: usize,
    total_attempts: usize,
}

impl SampleStats {
    fn collect(puzzles: &[GeneratedPuzzle]) -> Self {
        Self {
            samples: puzzles.len(),
            degenerate: puzzles.iter().filter(|p| p.is_degenerate()).count(),
            total_letters: puzzles.iter().map(|p| p.grid.count_letters()).sum(),
            total_attempts: puzzles.iter().map(|p| p.attempts).sum(),
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn print_puzzle(puzzle: &GeneratedPuzzle, stats: Option<&SampleStats>) {
    if let Some(seed) = puzzle.seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    if let Some(stats) = stats {
        let samples = stats.samples as f64;
        println!("Sampling:");
        println!("  Samples: {}", stats.samples);
        println!("  Empty fallbacks: {}", stats.degenerate);
        println!("  Mean letters: {:.1}", stats.total_letters as f64 / samples);
        println!("  Mean attempts: {:.2}", stats.total_attempts as f64 / samples);
        println!();
    }

    println!("Grid ({} letters, {} attempts):", puzzle.grid.count_letters(), puzzle.attempts);
    for row in puzzle.grid.rows() {
        println!("  {row}");
    }
    println!();

    println!("Words:");
    for placement in &puzzle.placements {
        println!(
            "  {} ({}, {}) {}: {}",
            placement.word.answer(),
            placement.start.row + 1,
            placement.start.col + 1,
            placement.orientation,
            placement.word.clue()
        );
    }
}
