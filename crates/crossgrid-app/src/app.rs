//! Crossword session controller.
//!
//! # Design Notes
//! - Owns the current [`PuzzleState`] and the cursor; input arrives as
//!   [`Action`]s drained from an [`ActionRequestQueue`].
//! - Time is not handled here. A solve yields [`Effect::ScheduleNewPuzzle`]
//!   and the caller decides how to wait before requesting
//!   [`Action::NewPuzzle`].

use std::time::Duration;

use crossgrid_core::Position;
use crossgrid_game::{EntryStatus, GameError, PuzzleState};

use crate::{
    action::{Action, ActionRequestQueue},
    puzzle_factory::PuzzleFactory,
};

/// Delay between a solve and the next puzzle.
pub const NEW_PUZZLE_DELAY: Duration = Duration::from_secs(1);

/// Work the caller has to carry out after handling actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScheduleNewPuzzle { after: Duration },
}

/// Result of the last action, shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Feedback {
    Entered(EntryStatus),
    Cleared,
    Rejected(GameError),
    NoCursor,
    Solved,
    NewPuzzle,
}

#[derive(Debug)]
pub struct CrosswordApp {
    factory: PuzzleFactory,
    state: PuzzleState,
    cursor: Option<Position>,
    show_solution: bool,
    feedback: Option<Feedback>,
}

impl CrosswordApp {
    #[must_use]
    pub fn new(mut factory: PuzzleFactory) -> Self {
        let state = factory.next_puzzle();
        let cursor = state.order().first();
        Self {
            factory,
            state,
            cursor,
            show_solution: false,
            feedback: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    #[must_use]
    pub fn show_solution(&self) -> bool {
        self.show_solution
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn handle_all(&mut self, action_queue: &mut ActionRequestQueue) -> Vec<Effect> {
        let mut effects = vec![];
        for action in action_queue.take_all() {
            self.handle(action, &mut effects);
        }
        effects
    }

    fn handle(&mut self, action: Action, effects: &mut Vec<Effect>) {
        log::trace!("handling {action:?}");
        match action {
            Action::SelectCell(pos) => self.select_cell(pos),
            Action::MoveCursor(direction) => {
                if let Some(pos) = self.cursor
                    && let Some(next) = self.state.order().step(pos, direction)
                {
                    self.cursor = Some(next);
                }
            }
            Action::EnterLetter(input) => self.enter_letter(&input, effects),
            Action::ClearCell => self.clear_cell(),
            Action::Backspace => self.backspace(),
            Action::NewPuzzle => self.new_puzzle(),
            Action::ToggleSolution => self.show_solution = !self.show_solution,
        }
    }

    fn select_cell(&mut self, pos: Position) {
        match self.state.status(pos) {
            Some(_) => self.cursor = Some(pos),
            None => {
                let err = if pos.is_in_bounds() {
                    GameError::BlockCell { pos }
                } else {
                    GameError::OutOfBounds { pos }
                };
                self.feedback = Some(Feedback::Rejected(err));
            }
        }
    }

    fn enter_letter(&mut self, input: &str, effects: &mut Vec<Effect>) {
        let Some(pos) = self.cursor else {
            self.feedback = Some(Feedback::NoCursor);
            return;
        };
        match self.state.set_entry(pos, input) {
            Ok(outcome) => {
                self.feedback = Some(Feedback::Entered(outcome.status));
                if let Some(next) = outcome.next_focus {
                    self.cursor = Some(next);
                }
                if outcome.solved.is_some() {
                    self.feedback = Some(Feedback::Solved);
                    effects.push(Effect::ScheduleNewPuzzle {
                        after: NEW_PUZZLE_DELAY,
                    });
                }
            }
            Err(err) => self.feedback = Some(Feedback::Rejected(err)),
        }
    }

    fn clear_cell(&mut self) {
        let Some(pos) = self.cursor else {
            self.feedback = Some(Feedback::NoCursor);
            return;
        };
        self.feedback = Some(match self.state.clear_entry(pos) {
            Ok(()) => Feedback::Cleared,
            Err(err) => Feedback::Rejected(err),
        });
    }

    fn backspace(&mut self) {
        let Some(pos) = self.cursor else {
            self.feedback = Some(Feedback::NoCursor);
            return;
        };
        if self.state.entry(pos).is_some() {
            self.clear_cell();
        } else if let Some(previous) = self.state.order().previous(pos) {
            self.cursor = Some(previous);
        }
    }

    fn new_puzzle(&mut self) {
        self.state = self.factory.next_puzzle();
        self.cursor = self.state.order().first();
        self.feedback = Some(Feedback::NewPuzzle);
    }
}

#[cfg(test)]
mod tests {
    use crossgrid_core::{WordBank, WordEntry};
    use crossgrid_game::MoveDirection;
    use crossgrid_generator::{GeneratorConfig, PuzzleSeed};

    use super::*;

    /// A session whose puzzles are always КОТ across at row 5, col 4.
    fn cat_app() -> CrosswordApp {
        let bank: WordBank = [WordEntry::new("КОТ", "Кто мурлычет у окна?").unwrap()]
            .into_iter()
            .collect();
        let config = GeneratorConfig::default()
            .word_count(1..=1)
            .min_letters(3);
        let factory =
            PuzzleFactory::with_config(bank, config, Some(PuzzleSeed::from_phrase("cat")));
        CrosswordApp::new(factory)
    }

    fn run(app: &mut CrosswordApp, actions: impl IntoIterator<Item = Action>) -> Vec<Effect> {
        let mut queue = ActionRequestQueue::default();
        for action in actions {
            queue.request(action);
        }
        app.handle_all(&mut queue)
    }

    #[test]
    fn test_new_session_focuses_first_input() {
        let app = cat_app();
        assert_eq!(app.cursor(), Some(Position::new(5, 4)));
        assert_eq!(app.state().clues().across()[0].answer, "КОТ");
        assert_eq!(app.feedback(), None);
    }

    #[test]
    fn test_correct_letters_advance_and_solve() {
        let mut app = cat_app();
        let effects = run(
            &mut app,
            [
                Action::EnterLetter("к".to_owned()),
                Action::EnterLetter("о".to_owned()),
            ],
        );
        assert!(effects.is_empty());
        assert_eq!(app.cursor(), Some(Position::new(5, 6)));

        let effects = run(&mut app, [Action::EnterLetter("т".to_owned())]);
        assert_eq!(
            effects,
            [Effect::ScheduleNewPuzzle {
                after: NEW_PUZZLE_DELAY
            }]
        );
        assert_eq!(app.feedback(), Some(Feedback::Solved));
        assert!(app.state().is_solved());

        run(&mut app, [Action::NewPuzzle]);
        assert!(!app.state().is_solved());
        assert_eq!(app.cursor(), Some(Position::new(5, 4)));
    }

    #[test]
    fn test_wrong_letter_keeps_cursor() {
        let mut app = cat_app();
        run(&mut app, [Action::EnterLetter("Ж".to_owned())]);
        assert_eq!(app.cursor(), Some(Position::new(5, 4)));
        assert_eq!(
            app.feedback(),
            Some(Feedback::Entered(EntryStatus::Incorrect))
        );
    }

    #[test]
    fn test_select_block_cell_is_rejected() {
        let mut app = cat_app();
        run(&mut app, [Action::SelectCell(Position::new(0, 0))]);
        assert_eq!(app.cursor(), Some(Position::new(5, 4)));
        assert_eq!(
            app.feedback(),
            Some(Feedback::Rejected(GameError::BlockCell {
                pos: Position::new(0, 0)
            }))
        );

        run(&mut app, [Action::SelectCell(Position::new(5, 6))]);
        assert_eq!(app.cursor(), Some(Position::new(5, 6)));
    }

    #[test]
    fn test_cursor_moves_stop_at_edges() {
        let mut app = cat_app();
        run(
            &mut app,
            [
                Action::MoveCursor(MoveDirection::Left),
                Action::MoveCursor(MoveDirection::Up),
            ],
        );
        assert_eq!(app.cursor(), Some(Position::new(5, 4)));
        run(
            &mut app,
            [
                Action::MoveCursor(MoveDirection::Right),
                Action::MoveCursor(MoveDirection::Right),
                Action::MoveCursor(MoveDirection::Right),
            ],
        );
        assert_eq!(app.cursor(), Some(Position::new(5, 6)));
    }

    #[test]
    fn test_backspace_clears_then_steps_back() {
        let mut app = cat_app();
        run(
            &mut app,
            [
                Action::SelectCell(Position::new(5, 5)),
                Action::EnterLetter("Ж".to_owned()),
                Action::Backspace,
            ],
        );
        assert_eq!(app.state().entry(Position::new(5, 5)), None);
        assert_eq!(app.cursor(), Some(Position::new(5, 5)));

        run(&mut app, [Action::Backspace]);
        assert_eq!(app.cursor(), Some(Position::new(5, 4)));
    }

    #[test]
    fn test_toggle_solution() {
        let mut app = cat_app();
        run(&mut app, [Action::ToggleSolution]);
        assert!(app.show_solution());
        run(&mut app, [Action::ToggleSolution]);
        assert!(!app.show_solution());
    }

    #[test]
    fn test_degenerate_puzzle_has_no_cursor() {
        let bank: WordBank = [WordEntry::new("КОТ", "Кто мурлычет у окна?").unwrap()]
            .into_iter()
            .collect();
        let mut app = CrosswordApp::new(PuzzleFactory::new(bank, None));
        assert_eq!(app.cursor(), None);
        run(&mut app, [Action::EnterLetter("К".to_owned())]);
        assert_eq!(app.feedback(), Some(Feedback::NoCursor));
    }
}
