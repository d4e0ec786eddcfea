//! Fixed-size letter grid with placement primitives.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Orientation, Position};

/// Width and height of every grid.
pub const GRID_SIZE: usize = 11;

/// The content of a single grid cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Cell {
    /// No letter; rendered as a block.
    #[default]
    Empty,
    /// A single uppercase letter.
    Letter(char),
}

impl Cell {
    /// Returns the letter held by the cell, if any.
    #[must_use]
    pub const fn as_letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Letter(letter) => Some(letter),
        }
    }
}

/// A [`GRID_SIZE`] x [`GRID_SIZE`] matrix of [`Cell`]s.
///
/// A letter cell is never overwritten with a different letter as long as every
/// [`place`](Self::place) is preceded by a successful
/// [`can_place`](Self::can_place).
///
/// The text form used by [`Display`] and [`FromStr`] is one line per row with
/// `.` for empty cells:
///
/// ```
/// use crossgrid_core::{Grid, Position};
///
/// let text = "\
/// ...........
/// ...........
/// ...........
/// ...........
/// ...........
/// ....КОТ....
/// ...........
/// ...........
/// ...........
/// ...........
/// ...........";
/// let grid: Grid = text.parse()?;
/// assert_eq!(grid[Position::new(5, 5)].as_letter(), Some('О'));
/// assert_eq!(grid.to_string(), text);
/// # Ok::<(), crossgrid_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Returns the cell at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Checks whether `word` can be written starting at `start`.
    ///
    /// Every letter must land inside the grid, and every cell it lands on must
    /// be empty or already hold the same letter. Overlapping existing letters
    /// exactly is allowed; that is how words intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossgrid_core::{Grid, Orientation, Position};
    ///
    /// let mut grid = Grid::new();
    /// let cat = ['К', 'О', 'Т'];
    /// grid.place(&cat, Position::new(5, 4), Orientation::Horizontal);
    ///
    /// // "ДОМ" crosses "КОТ" on the shared 'О'.
    /// let home = ['Д', 'О', 'М'];
    /// assert!(grid.can_place(&home, Position::new(4, 5), Orientation::Vertical));
    /// // Shifted one row up, 'Д' would collide with 'О'.
    /// assert!(!grid.can_place(&home, Position::new(5, 5), Orientation::Vertical));
    /// // Past the right edge.
    /// assert!(!grid.can_place(&home, Position::new(0, 9), Orientation::Horizontal));
    /// ```
    #[must_use]
    pub fn can_place(&self, word: &[char], start: Position, orientation: Orientation) -> bool {
        let Some(run) = start.run(orientation, word.len()) else {
            return false;
        };
        run.zip(word).all(|(pos, &letter)| match self[pos] {
            Cell::Empty => true,
            Cell::Letter(existing) => existing == letter,
        })
    }

    /// Writes `word` starting at `start`.
    ///
    /// No compatibility check is made: callers must have checked
    /// [`can_place`](Self::can_place) first, otherwise conflicting letters are
    /// silently overwritten.
    ///
    /// # Panics
    ///
    /// Panics if a letter would land outside the grid.
    pub fn place(&mut self, word: &[char], start: Position, orientation: Orientation) {
        for (offset, &letter) in word.iter().enumerate() {
            let pos = start.advanced(orientation, offset);
            self.cells[pos.row][pos.col] = Cell::Letter(letter);
        }
    }

    /// Returns the number of cells holding a letter.
    #[must_use]
    pub fn count_letters(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_letter())
            .count()
    }

    /// Returns `true` if no cell holds a letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_empty())
    }

    /// Iterates over letter cells in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| Some((Position::new(row, col), cell.as_letter()?)))
        })
    }

    /// Returns each row in the text form, `.` standing for an empty cell.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .map(|cell| cell.as_letter().unwrap_or(EMPTY_CHAR))
                    .collect()
            })
            .collect()
    }
}

const EMPTY_CHAR: char = '.';

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.row][pos.col]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`Grid`] from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text does not have exactly [`GRID_SIZE`] rows.
    #[display("expected {GRID_SIZE} rows, found {found}")]
    RowCount {
        /// Number of non-blank lines found.
        found: usize,
    },
    /// A row does not have exactly [`GRID_SIZE`] cells.
    #[display("row {row}: expected {GRID_SIZE} cells, found {found}")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of characters found.
        found: usize,
    },
    /// A cell is neither `.` nor an uppercase letter.
    #[display("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != GRID_SIZE {
            return Err(GridParseError::RowCount { found: lines.len() });
        }

        let mut grid = Self::new();
        for (row, line) in lines.into_iter().enumerate() {
            let found = line.chars().count();
            if found != GRID_SIZE {
                return Err(GridParseError::RowWidth { row, found });
            }
            for (col, ch) in line.chars().enumerate() {
                grid.cells[row][col] = match ch {
                    EMPTY_CHAR => Cell::Empty,
                    ch if ch.is_alphabetic() && !ch.is_lowercase() => Cell::Letter(ch),
                    ch => return Err(GridParseError::InvalidCell { row, col, ch }),
                };
            }
        }
        Ok(grid)
    }
}

impl serde::Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.count_letters(), 0);
        assert_eq!(grid.letters().count(), 0);
    }

    #[test]
    fn test_place_writes_letters() {
        let mut grid = Grid::new();
        grid.place(&letters("ЛЕС"), Position::new(2, 3), Orientation::Vertical);

        assert_eq!(grid.count_letters(), 3);
        assert_eq!(grid[Position::new(2, 3)], Cell::Letter('Л'));
        assert_eq!(grid[Position::new(3, 3)], Cell::Letter('Е'));
        assert_eq!(grid[Position::new(4, 3)], Cell::Letter('С'));
        assert!(grid[Position::new(2, 4)].is_empty());
    }

    #[test]
    fn test_can_place_allows_exact_overlap() {
        let mut grid = Grid::new();
        let word = letters("МОРЕ");
        grid.place(&word, Position::new(0, 0), Orientation::Horizontal);

        assert!(grid.can_place(&word, Position::new(0, 0), Orientation::Horizontal));
        assert!(!grid.can_place(&word, Position::new(0, 1), Orientation::Horizontal));
    }

    #[test]
    fn test_can_place_edges() {
        let grid = Grid::new();
        let word = letters("ПУСТЫНЯ");

        assert!(grid.can_place(&word, Position::new(10, 4), Orientation::Horizontal));
        assert!(!grid.can_place(&word, Position::new(10, 5), Orientation::Horizontal));
        assert!(grid.can_place(&word, Position::new(4, 10), Orientation::Vertical));
        assert!(!grid.can_place(&word, Position::new(5, 10), Orientation::Vertical));
        assert!(!grid.can_place(&word, Position::new(11, 0), Orientation::Horizontal));
    }

    #[test]
    fn test_letters_iterates_row_major() {
        let mut grid = Grid::new();
        grid.place(&letters("ДОМ"), Position::new(1, 1), Orientation::Vertical);
        grid.place(&letters("ОКНО"), Position::new(2, 1), Orientation::Horizontal);

        let positions: Vec<_> = grid.letters().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            [
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(2, 4),
                Position::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let grid = Grid::new();
        assert_eq!(grid.cell(Position::new(10, 10)), Some(Cell::Empty));
        assert_eq!(grid.cell(Position::new(11, 0)), None);
        assert_eq!(grid.cell(Position::new(0, 11)), None);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert_eq!(
            "...".parse::<Grid>(),
            Err(GridParseError::RowCount { found: 1 })
        );

        let mut rows = vec!["..........."; GRID_SIZE];
        rows[3] = "....";
        assert_eq!(
            rows.join("\n").parse::<Grid>(),
            Err(GridParseError::RowWidth { row: 3, found: 4 })
        );

        rows[3] = "....к......";
        assert_eq!(
            rows.join("\n").parse::<Grid>(),
            Err(GridParseError::InvalidCell {
                row: 3,
                col: 4,
                ch: 'к'
            })
        );
    }

    proptest! {
        #[test]
        fn test_can_place_matches_bounds_on_empty_grid(
            word in "[А-Я]{1,13}",
            row in 0..GRID_SIZE + 2,
            col in 0..GRID_SIZE + 2,
            horizontal in any::<bool>(),
        ) {
            let word = letters(&word);
            let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
            let start = Position::new(row, col);
            let end = start.advanced(orientation, word.len() - 1);

            let grid = Grid::new();
            prop_assert_eq!(
                grid.can_place(&word, start, orientation),
                start.is_in_bounds() && end.is_in_bounds()
            );
        }

        #[test]
        fn test_placed_word_stays_placeable(
            word in "[А-Я]{1,11}",
            row in 0..GRID_SIZE,
            col in 0..GRID_SIZE,
            horizontal in any::<bool>(),
        ) {
            let word = letters(&word);
            let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
            let start = Position::new(row, col);

            let mut grid = Grid::new();
            prop_assume!(grid.can_place(&word, start, orientation));
            grid.place(&word, start, orientation);

            prop_assert!(grid.can_place(&word, start, orientation));
            prop_assert_eq!(grid.count_letters(), word.len());
            for (pos, letter) in grid.letters() {
                prop_assert!(pos.is_in_bounds());
                prop_assert!(word.contains(&letter));
            }
        }

        #[test]
        fn test_text_form_round_trips(
            word in "[А-Я]{1,11}",
            row in 0..GRID_SIZE,
            horizontal in any::<bool>(),
        ) {
            let word = letters(&word);
            let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
            let start = match orientation {
                Orientation::Horizontal => Position::new(row, 0),
                Orientation::Vertical => Position::new(0, row),
            };
            let mut grid = Grid::new();
            grid.place(&word, start, orientation);

            let parsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
