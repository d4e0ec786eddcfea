//! Core data structures for crossword grids.
//!
//! This crate provides the fundamental types shared by generation, clue
//! extraction and game management:
//!
//! 1. **Word bank** - riddle/answer pairs
//!    - [`word`]: [`WordEntry`] and [`WordBank`], including the built-in riddle
//!      bank and a line-oriented text format for custom banks.
//!
//! 2. **Grid** - the fixed-size letter matrix and its placement primitives
//!    - [`position`]: [`Position`] and [`Orientation`]
//!    - [`grid`]: [`Grid`] and [`Cell`], with [`Grid::can_place`] and
//!      [`Grid::place`].
//!
//! # Examples
//!
//! ```
//! use crossgrid_core::{Grid, Orientation, Position, WordEntry};
//!
//! let entry = WordEntry::new("КОТ", "Кто мурлычет у окна и ловит мышей?")?;
//! let mut grid = Grid::new();
//!
//! let start = Position::new(5, 4);
//! assert!(grid.can_place(entry.letters(), start, Orientation::Horizontal));
//! grid.place(entry.letters(), start, Orientation::Horizontal);
//! assert_eq!(grid.count_letters(), 3);
//! # Ok::<(), crossgrid_core::WordEntryError>(())
//! ```

pub mod grid;
pub mod position;
mod riddles;
pub mod word;

pub use self::{
    grid::{Cell, GRID_SIZE, Grid, GridParseError},
    position::{Orientation, Position},
    word::{WordBank, WordBankError, WordEntry, WordEntryError},
};
