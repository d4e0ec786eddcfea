use std::mem;

use crossgrid_core::Position;
use crossgrid_game::MoveDirection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCell(Position),
    MoveCursor(MoveDirection),
    EnterLetter(String),
    ClearCell,
    Backspace,
    NewPuzzle,
    ToggleSolution,
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn test_take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::NewPuzzle);
        queue.request(Action::ClearCell);

        let drained = queue.take_all();
        assert_eq!(drained, [Action::NewPuzzle, Action::ClearCell]);

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
