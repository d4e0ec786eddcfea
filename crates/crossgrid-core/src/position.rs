//! Grid coordinates and word orientation.

use std::iter::FusedIterator;

use crate::GRID_SIZE;

/// A cell coordinate on the grid.
///
/// Rows grow downwards and columns grow to the right. Both are zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Position {
    /// Row index (0 at the top).
    pub row: usize,
    /// Column index (0 at the left).
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the position lies inside the grid.
    #[must_use]
    pub const fn is_in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Returns the position `offset` cells further along `orientation`.
    ///
    /// The result is not bounds-checked.
    #[must_use]
    pub const fn advanced(self, orientation: Orientation, offset: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + offset),
            Orientation::Vertical => Self::new(self.row + offset, self.col),
        }
    }

    /// Returns the positions covered by a run of `len` cells starting here.
    ///
    /// Returns `None` if any of those cells would fall outside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossgrid_core::{Orientation, Position};
    ///
    /// let run: Vec<_> = Position::new(2, 9)
    ///     .run(Orientation::Horizontal, 2)
    ///     .unwrap()
    ///     .collect();
    /// assert_eq!(run, [Position::new(2, 9), Position::new(2, 10)]);
    ///
    /// assert!(Position::new(2, 9).run(Orientation::Horizontal, 3).is_none());
    /// ```
    #[must_use]
    pub fn run(self, orientation: Orientation, len: usize) -> Option<Run> {
        if !self.is_in_bounds() {
            return None;
        }
        let start = match orientation {
            Orientation::Horizontal => self.col,
            Orientation::Vertical => self.row,
        };
        if start + len > GRID_SIZE {
            return None;
        }
        Some(Run {
            start: self,
            orientation,
            front: 0,
            back: len,
        })
    }
}

/// Iterator over the cells of a bounds-checked run, created by [`Position::run`].
#[derive(Debug, Clone)]
pub struct Run {
    start: Position,
    orientation: Orientation,
    front: usize,
    back: usize,
}

impl Iterator for Run {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let pos = self.start.advanced(self.orientation, self.front);
        self.front += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Run {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.start.advanced(self.orientation, self.back))
    }
}

impl ExactSizeIterator for Run {}
impl FusedIterator for Run {}

/// Direction a word runs in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right (an "across" word).
    #[display("across")]
    Horizontal,
    /// Top to bottom (a "down" word).
    #[display("down")]
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];
}
