//! Plain-text views of a puzzle and a session.

use crossgrid_core::{GRID_SIZE, Position};
use crossgrid_game::{CluePlacement, Clues, EntryStatus, GameError, PuzzleState};

use crate::app::{CrosswordApp, Feedback};

const EMPTY_INPUT: char = '_';
const BLOCK: char = '.';
const SOLVED_MARK: &str = "✓";

/// How clue lists are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClueView {
    /// Answer length only.
    Hidden,
    /// Answers spelled out.
    Revealed,
    /// Answers spelled out and every clue ticked off.
    Solved,
}

impl ClueView {
    fn for_state(state: &PuzzleState, reveal: bool) -> Self {
        if state.is_solved() {
            Self::Solved
        } else if reveal {
            Self::Revealed
        } else {
            Self::Hidden
        }
    }
}

/// Renders the grid, one text row per grid row.
///
/// Each cell takes four columns: the clue label, a `>` under the cursor, and
/// the letter. Solution letters are shown with `reveal`, entered ones
/// otherwise.
#[must_use]
pub fn grid(state: &PuzzleState, cursor: Option<Position>, reveal: bool) -> String {
    let mut out = String::from("   ");
    for col in 1..=GRID_SIZE {
        out += &format!("{col:>4}");
    }
    out.push('\n');

    for row in 0..GRID_SIZE {
        out += &format!("{:>3}", row + 1);
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            let label = state
                .clues()
                .label_at(pos)
                .map_or_else(String::new, |n| n.to_string());
            let marker = if cursor == Some(pos) { '>' } else { ' ' };
            let content = match state.grid().cell(pos).and_then(|cell| cell.as_letter()) {
                Some(letter) if reveal => letter,
                Some(_) => state.entry(pos).unwrap_or(EMPTY_INPUT),
                None => BLOCK,
            };
            out += &format!("{label:>2}{marker}{content}");
        }
        out.push('\n');
    }
    out
}

/// Renders the across and down clue lists.
#[must_use]
pub fn clues(clues: &Clues, view: ClueView) -> String {
    let mut out = String::new();
    for (title, list) in [("Across", clues.across()), ("Down", clues.down())] {
        out += &format!("{title}:\n");
        if list.is_empty() {
            out.push_str("  (none)\n");
        }
        for clue in list {
            out += &clue_line(clue, view);
            out.push('\n');
        }
    }
    out
}

fn clue_line(clue: &CluePlacement, view: ClueView) -> String {
    match view {
        ClueView::Hidden => format!("{:>3}. ({}) {}", clue.number, clue.len(), clue.clue),
        ClueView::Revealed => format!("{:>3}. {}: {}", clue.number, clue.answer, clue.clue),
        ClueView::Solved => format!(
            "{:>3}. {}: {} {SOLVED_MARK}",
            clue.number, clue.answer, clue.clue
        ),
    }
}

/// Renders a whole puzzle for `crossgrid generate`.
#[must_use]
pub fn puzzle(state: &PuzzleState, reveal: bool) -> String {
    let mut out = String::new();
    if let Some(seed) = state.seed() {
        out += &format!("Seed: {seed}\n\n");
    }
    if state.order().is_empty() {
        out.push_str("No words could be placed; the grid is empty.\n\n");
    }
    out.push_str(&grid(state, None, reveal));
    out.push('\n');
    out.push_str(&clues(state.clues(), ClueView::for_state(state, reveal)));
    out
}

/// Renders the current state of an interactive session.
#[must_use]
pub fn session(app: &CrosswordApp) -> String {
    let state = app.state();
    let mut out = grid(state, app.cursor(), app.show_solution());
    out.push('\n');
    out.push_str(&clues(
        state.clues(),
        ClueView::for_state(state, app.show_solution()),
    ));
    out.push('\n');
    out.push_str(&status_line(app));
    out.push('\n');
    out
}

#[must_use]
pub fn status_line(app: &CrosswordApp) -> String {
    let (correct, total) = app.state().progress();
    let mut line = format!("{correct}/{total} correct");
    if let Some(pos) = app.cursor() {
        line += &format!(", cursor at {} {}", pos.row + 1, pos.col + 1);
    }
    if let Some(feedback) = app.feedback() {
        line += &format!(". {}", feedback_message(feedback));
    }
    line
}

fn feedback_message(feedback: Feedback) -> String {
    match feedback {
        Feedback::Entered(EntryStatus::Correct) => "Correct.".to_owned(),
        Feedback::Entered(EntryStatus::Incorrect) => "Not quite.".to_owned(),
        Feedback::Entered(EntryStatus::Empty) | Feedback::Cleared => "Cleared.".to_owned(),
        Feedback::Rejected(GameError::BlockCell { pos }) => {
            format!("Cell {} {} takes no letter.", pos.row + 1, pos.col + 1)
        }
        Feedback::Rejected(GameError::OutOfBounds { pos }) => {
            format!("Cell {} {} is off the grid.", pos.row + 1, pos.col + 1)
        }
        Feedback::NoCursor => "There is no cell to type into.".to_owned(),
        Feedback::Solved => "Solved! A new puzzle is on its way.".to_owned(),
        Feedback::NewPuzzle => "New puzzle.".to_owned(),
    }
}
