//! Crossword grid generation.
//!
//! [`PuzzleGenerator`] builds a grid from a [`WordBank`] with a bounded-retry
//! heuristic:
//!
//! 1. pick a random subset of the bank,
//! 2. place the first word horizontally in the middle of the grid,
//! 3. place every other word across an existing letter, or at a random free
//!    spot when it shares no letter, abandoning the attempt at the first word
//!    that does not fit,
//! 4. accept the attempt if the grid holds enough letters, otherwise start
//!    over.
//!
//! When every attempt falls short the generator returns an empty puzzle
//! instead of failing.
//!
//! All random choices go through [`RandomSource`]; [`PuzzleSeed`] makes a
//! generation reproducible.
//!
//! # Examples
//!
//! ```
//! use crossgrid_core::WordBank;
//! use crossgrid_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let bank = WordBank::builtin();
//! let generator = PuzzleGenerator::new(&bank);
//!
//! let seed = PuzzleSeed::from_phrase("example");
//! let puzzle = generator.generate_with_seed(seed);
//! assert_eq!(puzzle, generator.generate_with_seed(seed));
//! assert!(puzzle.is_degenerate() || puzzle.grid.count_letters() >= 18);
//! ```

use crossgrid_core::{Grid, WordBank, WordEntry};

pub use self::{
    config::GeneratorConfig,
    placement::Placement,
    random::{RandomSource, shuffle},
    seed::{PuzzleSeed, SeedParseError},
};

mod config;
mod placement;
mod random;
mod seed;

/// The result of a generation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedPuzzle {
    /// The finished grid.
    pub grid: Grid,
    /// Entries that were placed, in placement order.
    pub items: Vec<WordEntry>,
    /// Where each entry of [`items`](Self::items) was placed.
    pub placements: Vec<Placement>,
    /// The seed that drove generation, if one was used.
    pub seed: Option<PuzzleSeed>,
    /// Number of attempts consumed.
    pub attempts: usize,
}

impl GeneratedPuzzle {
    /// Returns `true` for the empty result produced when no attempt was
    /// accepted.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.items.is_empty() && self.grid.is_empty()
    }
}

/// Generates crossword puzzles from a word bank.
///
/// The generator only borrows the bank, so one instance can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    bank: &'a WordBank,
    config: GeneratorConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(bank: &'a WordBank) -> Self {
        Self::with_config(bank, GeneratorConfig::default())
    }

    /// Creates a generator with a custom configuration.
    #[must_use]
    pub fn with_config(bank: &'a WordBank, config: GeneratorConfig) -> Self {
        Self { bank, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates a puzzle driven by `seed`.
    ///
    /// The same bank, configuration and seed always give the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let puzzle = self.generate_with_source(&mut rng);
        GeneratedPuzzle {
            seed: Some(seed),
            ..puzzle
        }
    }

    /// Generates a puzzle drawing every random choice from `source`.
    ///
    /// Makes at most [`GeneratorConfig::max_attempts`] attempts. If none
    /// reaches [`GeneratorConfig::min_letters`], returns an empty grid with
    /// no items.
    pub fn generate_with_source<R>(&self, source: &mut R) -> GeneratedPuzzle
    where
        R: RandomSource + ?Sized,
    {
        for attempt in 1..=self.config.max_attempts {
            let placement::Attempt { grid, placements } =
                placement::run_attempt(self.bank, &self.config, source);
            let letters = grid.count_letters();
            if letters >= self.config.min_letters {
                log::debug!(
                    "attempt {attempt} accepted: {} words, {letters} letters",
                    placements.len()
                );
                let items = placements.iter().map(|p| p.word.clone()).collect();
                return GeneratedPuzzle {
                    grid,
                    items,
                    placements,
                    seed: None,
                    attempts: attempt,
                };
            }
            log::debug!(
                "attempt {attempt} rejected: {letters} letters, {} required",
                self.config.min_letters
            );
        }

        log::warn!(
            "no attempt out of {} reached {} letters, returning an empty puzzle",
            self.config.max_attempts,
            self.config.min_letters
        );
        GeneratedPuzzle {
            grid: Grid::new(),
            items: vec![],
            placements: vec![],
            seed: None,
            attempts: self.config.max_attempts,
        }
    }
}
