//! Playing a generated crossword.
//!
//! This crate turns a [`GeneratedPuzzle`](crossgrid_generator::GeneratedPuzzle)
//! into something a front end can drive:
//!
//! - [`extract_clues`] numbers the across and down answers found on the grid,
//! - [`PuzzleState`] tracks the player's letters and detects a full solve,
//! - [`InputOrder`] decides where the cursor goes next.
//!
//! Nothing here renders, sleeps or reads input.
//!
//! # Examples
//!
//! ```
//! use crossgrid_core::{Grid, Orientation, Position, WordEntry};
//! use crossgrid_game::{EntryStatus, PuzzleState};
//! use crossgrid_generator::{GeneratedPuzzle, Placement};
//!
//! let cat = WordEntry::new("КОТ", "Кто мурлычет у окна и ловит мышей?")?;
//! let start = Position::new(5, 4);
//! let mut grid = Grid::new();
//! grid.place(cat.letters(), start, Orientation::Horizontal);
//! let puzzle = GeneratedPuzzle {
//!     grid,
//!     items: vec![cat.clone()],
//!     placements: vec![Placement {
//!         word: cat,
//!         start,
//!         orientation: Orientation::Horizontal,
//!     }],
//!     seed: None,
//!     attempts: 1,
//! };
//!
//! let mut state = PuzzleState::new(puzzle);
//! assert_eq!(state.clues().across()[0].number, 1);
//!
//! let outcome = state.set_entry(start, "к")?;
//! assert_eq!(outcome.status, EntryStatus::Correct);
//! assert_eq!(outcome.next_focus, Some(Position::new(5, 5)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crossgrid_core::Position;

pub use self::{
    clues::{CluePlacement, Clues, extract_clues},
    entry::{EntryStatus, normalize_entry, validate_entry},
    game::{EntryOutcome, PuzzleState, SolvedEvent},
    navigation::{InputOrder, MoveDirection},
};

mod clues;
mod entry;
mod game;
mod navigation;

/// Errors from editing a [`PuzzleState`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GameError {
    /// The position lies outside the grid.
    #[display("position {pos:?} is outside the grid")]
    OutOfBounds {
        /// The offending position.
        pos: Position,
    },
    /// The position is a block cell, which takes no input.
    #[display("position {pos:?} is a block cell")]
    BlockCell {
        /// The offending position.
        pos: Position,
    },
}
