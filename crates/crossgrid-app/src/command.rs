//! Line commands of the interactive session.

use std::str::FromStr;

use crossgrid_core::{GRID_SIZE, Position};
use crossgrid_game::{MoveDirection, normalize_entry};

use crate::action::{Action, ActionRequestQueue};

pub const HELP: &str = "\
Commands:
  <row> <col> <letter>  enter a letter at a cell (1-based)
  <row> <col>           move the cursor to a cell
  <letter>              enter a letter at the cursor
  w / a / s / d         move the cursor up / left / down / right
  x                     clear the cell under the cursor
  b                     backspace: clear, or step back when already empty
  new                   start a new puzzle
  show                  show or hide the solution
  help                  print this help
  quit                  leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Actions(Vec<Action>),
    Help,
    Quit,
}

impl Command {
    /// Queues the actions of this command. Commands the session loop handles
    /// itself queue nothing.
    pub fn request_into(self, queue: &mut ActionRequestQueue) {
        if let Self::Actions(actions) = self {
            for action in actions {
                queue.request(action);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command `{input}`, type `help` for the list")]
    Unknown { input: String },
    #[display("row and column must be between 1 and {GRID_SIZE}, got `{input}`")]
    InvalidCoordinate { input: String },
}

const KEYS: [(&str, Action); 6] = [
    ("w", Action::MoveCursor(MoveDirection::Up)),
    ("a", Action::MoveCursor(MoveDirection::Left)),
    ("s", Action::MoveCursor(MoveDirection::Down)),
    ("d", Action::MoveCursor(MoveDirection::Right)),
    ("x", Action::ClearCell),
    ("b", Action::Backspace),
];

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let single = |action: Action| Ok(Self::Actions(vec![action]));

        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["help" | "?"] => Ok(Self::Help),
            ["quit" | "exit" | "q"] => Ok(Self::Quit),
            ["new"] => single(Action::NewPuzzle),
            ["show"] => single(Action::ToggleSolution),
            [word] => match KEYS.iter().find(|(key, _)| key == word) {
                Some((_, action)) => single(action.clone()),
                None if is_single_letter(word) => single(Action::EnterLetter((*word).to_owned())),
                None => Err(CommandError::Unknown {
                    input: line.trim().to_owned(),
                }),
            },
            [row, col] => single(Action::SelectCell(parse_position(row, col)?)),
            [row, col, letter] => {
                let pos = parse_position(row, col)?;
                if !is_single_letter(letter) {
                    return Err(CommandError::Unknown {
                        input: line.trim().to_owned(),
                    });
                }
                Ok(Self::Actions(vec![
                    Action::SelectCell(pos),
                    Action::EnterLetter((*letter).to_owned()),
                ]))
            }
            _ => Err(CommandError::Unknown {
                input: line.trim().to_owned(),
            }),
        }
    }
}

fn is_single_letter(word: &str) -> bool {
    word.chars().count() == 1 && normalize_entry(word).is_some()
}

fn parse_position(row: &str, col: &str) -> Result<Position, CommandError> {
    let coordinate = |text: &str| {
        text.parse::<usize>()
            .ok()
            .filter(|n| (1..=GRID_SIZE).contains(n))
            .map(|n| n - 1)
    };
    match (coordinate(row), coordinate(col)) {
        (Some(row), Some(col)) => Ok(Position::new(row, col)),
        _ => Err(CommandError::InvalidCoordinate {
            input: format!("{row} {col}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(line: &str) -> Vec<Action> {
        match line.parse::<Command>().unwrap() {
            Command::Actions(actions) => actions,
            other => panic!("expected actions, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_at_cell_is_one_based() {
        assert_eq!(
            actions("6 5 к"),
            [
                Action::SelectCell(Position::new(5, 4)),
                Action::EnterLetter("к".to_owned()),
            ]
        );
        assert_eq!(actions(" 1 11 "), [Action::SelectCell(Position::new(0, 10))]);
    }

    #[test]
    fn test_movement_keys_and_letters() {
        assert_eq!(actions("w"), [Action::MoveCursor(MoveDirection::Up)]);
        assert_eq!(actions("d"), [Action::MoveCursor(MoveDirection::Right)]);
        assert_eq!(actions("b"), [Action::Backspace]);
        // single letters other than the keys are entries
        assert_eq!(actions("Я"), [Action::EnterLetter("Я".to_owned())]);
        assert_eq!(actions("e"), [Action::EnterLetter("e".to_owned())]);
    }

    #[test]
    fn test_session_commands() {
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(actions("new"), [Action::NewPuzzle]);
        assert_eq!(actions("show"), [Action::ToggleSolution]);
    }

    #[test]
    fn test_invalid_commands() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert!(matches!(
            "0 3 А".parse::<Command>(),
            Err(CommandError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            "12 3".parse::<Command>(),
            Err(CommandError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            "1 1 АБ".parse::<Command>(),
            Err(CommandError::Unknown { .. })
        ));
        assert!(matches!(
            "hello".parse::<Command>(),
            Err(CommandError::Unknown { .. })
        ));
    }

    #[test]
    fn test_request_into_queue() {
        let mut queue = ActionRequestQueue::default();
        actions_command("1 1 А").request_into(&mut queue);
        Command::Quit.request_into(&mut queue);
        Command::Help.request_into(&mut queue);
        assert_eq!(
            queue.take_all(),
            [
                Action::SelectCell(Position::new(0, 0)),
                Action::EnterLetter("А".to_owned()),
            ]
        );
    }

    fn actions_command(line: &str) -> Command {
        line.parse().unwrap()
    }
}
