//! Numbered across/down clues recovered from a finished grid.

use crossgrid_core::{GRID_SIZE, Grid, Orientation, Position, WordEntry};

/// A numbered clue and where its answer sits on the grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CluePlacement {
    /// Clue number, starting at 1.
    pub number: u32,
    /// First cell of the answer.
    pub start: Position,
    /// Direction of the answer.
    pub orientation: Orientation,
    /// The answer text as read from the grid.
    pub answer: String,
    /// The riddle of the matching entry.
    pub clue: String,
}

impl CluePlacement {
    /// Returns the number of letters in the answer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    /// Always `false`; only runs of two or more letters are clued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

/// Across and down clues of one puzzle.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Clues {
    across: Vec<CluePlacement>,
    down: Vec<CluePlacement>,
}

impl Clues {
    /// Across clues in ascending number order.
    #[must_use]
    pub fn across(&self) -> &[CluePlacement] {
        &self.across
    }

    /// Down clues in ascending number order.
    #[must_use]
    pub fn down(&self) -> &[CluePlacement] {
        &self.down
    }

    /// Iterates over all clues, across first.
    pub fn iter(&self) -> impl Iterator<Item = &CluePlacement> {
        self.across.iter().chain(&self.down)
    }

    /// Returns the number of clues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    /// Returns `true` if there are no clues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }

    /// Iterates over the numbers of clues whose answer starts at `pos`.
    ///
    /// A cell that starts both an across and a down answer has two numbers.
    pub fn numbers_at(&self, pos: Position) -> impl Iterator<Item = u32> + '_ {
        self.iter()
            .filter(move |clue| clue.start == pos)
            .map(|clue| clue.number)
    }

    /// Returns the number to print in the cell at `pos`: the smallest number
    /// starting there.
    #[must_use]
    pub fn label_at(&self, pos: Position) -> Option<u32> {
        self.numbers_at(pos).min()
    }
}

/// Recovers numbered clues by scanning `grid` for letter runs.
///
/// Maximal runs of two or more letters are read row by row, then column by
/// column. A run whose text equals the answer of one of `items` gets the next
/// number and that entry's clue; every other run, such as letters of
/// neighbouring words that happen to touch, is skipped without a number.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{Grid, Orientation, Position, WordEntry};
/// use crossgrid_game::extract_clues;
///
/// let cat = WordEntry::new("КОТ", "Кто мурлычет у окна и ловит мышей?")?;
/// let mut grid = Grid::new();
/// grid.place(cat.letters(), Position::new(5, 4), Orientation::Horizontal);
///
/// let clues = extract_clues(&grid, &[cat]);
/// assert_eq!(clues.across().len(), 1);
/// assert_eq!(clues.across()[0].number, 1);
/// assert_eq!(clues.across()[0].answer, "КОТ");
/// assert!(clues.down().is_empty());
/// # Ok::<(), crossgrid_core::WordEntryError>(())
/// ```
#[must_use]
pub fn extract_clues(grid: &Grid, items: &[WordEntry]) -> Clues {
    let mut next_number = 1;
    let mut clues = Clues::default();

    for orientation in Orientation::ALL {
        for line in 0..GRID_SIZE {
            for (start, answer) in letter_runs(grid, orientation, line) {
                let Some(item) = items.iter().find(|item| item.answer() == answer) else {
                    log::trace!("no entry for run {answer} at {start:?} {orientation}");
                    continue;
                };
                let clue = CluePlacement {
                    number: next_number,
                    start,
                    orientation,
                    answer,
                    clue: item.clue().to_owned(),
                };
                next_number += 1;
                match orientation {
                    Orientation::Horizontal => clues.across.push(clue),
                    Orientation::Vertical => clues.down.push(clue),
                }
            }
        }
    }

    clues
}

/// Maximal runs of two or more letters along row (horizontal) or column
/// (vertical) `line`.
fn letter_runs(grid: &Grid, orientation: Orientation, line: usize) -> Vec<(Position, String)> {
    let first = match orientation {
        Orientation::Horizontal => Position::new(line, 0),
        Orientation::Vertical => Position::new(0, line),
    };

    let mut runs = vec![];
    let mut current: Option<(Position, String)> = None;
    for offset in 0..=GRID_SIZE {
        let pos = first.advanced(orientation, offset);
        match grid.cell(pos).and_then(|cell| cell.as_letter()) {
            Some(letter) => current
                .get_or_insert_with(|| (pos, String::new()))
                .1
                .push(letter),
            None => {
                if let Some((start, text)) = current.take()
                    && text.chars().count() >= 2
                {
                    runs.push((start, text));
                }
            }
        }
    }
    runs
}
