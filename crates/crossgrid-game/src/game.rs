use crossgrid_core::{Cell, Grid, Position, WordEntry};
use crossgrid_generator::{GeneratedPuzzle, PuzzleSeed};

use crate::{
    Clues, EntryStatus, GameError, InputOrder, extract_clues, normalize_entry, validate_entry,
};

/// A crossword being played.
///
/// Holds the generated grid, its clues and the player's entry for every
/// letter cell. Block cells take no input.
///
/// # Example
///
/// ```
/// use crossgrid_core::WordBank;
/// use crossgrid_game::PuzzleState;
/// use crossgrid_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let bank = WordBank::builtin();
/// let generator = PuzzleGenerator::new(&bank);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("doc"));
/// let state = PuzzleState::new(puzzle);
///
/// // Nothing is entered yet
/// assert!(!state.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    grid: Grid,
    items: Vec<WordEntry>,
    clues: Clues,
    order: InputOrder,
    entries: Vec<Option<char>>,
    seed: Option<PuzzleSeed>,
    solved: bool,
}

/// Emitted once when an entry completes the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvedEvent {
    /// Seed of the solved puzzle, if it had one.
    pub seed: Option<PuzzleSeed>,
    /// Number of letter cells filled in.
    pub letters: usize,
}

/// What happened after a [`PuzzleState::set_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOutcome {
    /// Status of the edited cell.
    pub status: EntryStatus,
    /// Where focus should move: the next input after a correct letter.
    pub next_focus: Option<Position>,
    /// Set when this entry solved the puzzle.
    pub solved: Option<SolvedEvent>,
}

impl PuzzleState {
    /// Starts a session on a generated puzzle, with every cell blank.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            grid, items, seed, ..
        } = puzzle;
        let clues = extract_clues(&grid, &items);
        let order = InputOrder::new(&grid);
        let entries = vec![None; order.len()];
        Self {
            grid,
            items,
            clues,
            order,
            entries,
            seed,
            solved: false,
        }
    }

    /// Returns the solution grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the entries placed on the grid.
    #[must_use]
    pub fn items(&self) -> &[WordEntry] {
        &self.items
    }

    /// Returns the numbered clues.
    #[must_use]
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Returns the input order of the letter cells.
    #[must_use]
    pub fn order(&self) -> &InputOrder {
        &self.order
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// Returns the player's letter at `pos`, if any.
    #[must_use]
    pub fn entry(&self, pos: Position) -> Option<char> {
        let index = self.order.index_of(pos)?;
        self.entries[index]
    }

    /// Returns how the entry at `pos` compares with the solution, or `None`
    /// for block cells and positions off the grid.
    #[must_use]
    pub fn status(&self, pos: Position) -> Option<EntryStatus> {
        let expected = self.grid.cell(pos)?.as_letter()?;
        Some(validate_entry(expected, self.entry(pos)))
    }

    /// Returns the number of cells holding the correct letter, and the number
    /// of letter cells.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let correct = self
            .grid
            .letters()
            .zip(&self.entries)
            .filter(|((_, expected), entry)| validate_entry(*expected, **entry).is_correct())
            .count();
        (correct, self.entries.len())
    }

    /// Returns `true` if every letter cell holds its expected letter.
    ///
    /// A grid without letter cells is never solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let (correct, total) = self.progress();
        total > 0 && correct == total
    }

    /// Stores raw input at `pos`.
    ///
    /// The input goes through [`normalize_entry`]; input without letters
    /// clears the cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid.
    /// Returns [`GameError::BlockCell`] if `pos` is a block cell.
    pub fn set_entry(&mut self, pos: Position, input: &str) -> Result<EntryOutcome, GameError> {
        let (index, expected) = self.input_cell(pos)?;
        let letter = normalize_entry(input);
        self.entries[index] = letter;

        let status = validate_entry(expected, letter);
        let next_focus = if status.is_correct() {
            self.order.next(pos)
        } else {
            None
        };
        let solved = self.check_solved();
        Ok(EntryOutcome {
            status,
            next_focus,
            solved,
        })
    }

    /// Clears the entry at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid.
    /// Returns [`GameError::BlockCell`] if `pos` is a block cell.
    pub fn clear_entry(&mut self, pos: Position) -> Result<(), GameError> {
        let (index, _) = self.input_cell(pos)?;
        self.entries[index] = None;
        self.solved = self.is_solved();
        Ok(())
    }

    fn input_cell(&self, pos: Position) -> Result<(usize, char), GameError> {
        let cell = self.grid.cell(pos).ok_or(GameError::OutOfBounds { pos })?;
        let Cell::Letter(expected) = cell else {
            return Err(GameError::BlockCell { pos });
        };
        let index = self
            .order
            .index_of(pos)
            .ok_or(GameError::BlockCell { pos })?;
        Ok((index, expected))
    }

    fn check_solved(&mut self) -> Option<SolvedEvent> {
        let was_solved = self.solved;
        self.solved = self.is_solved();
        if !self.solved || was_solved {
            return None;
        }
        log::info!(
            "puzzle solved: {} letters, seed {}",
            self.entries.len(),
            self.seed.map_or_else(|| "none".to_owned(), |seed| seed.to_string())
        );
        Some(SolvedEvent {
            seed: self.seed,
            letters: self.entries.len(),
        })
    }
}
