//! Focus movement between input cells.

use crossgrid_core::{Grid, Position};

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// To the previous input.
    Left,
    /// To the next input.
    Right,
}

/// Letter cells of a grid in row-major order, the order inputs are laid out.
///
/// Maps positions to input indices and back, and answers where focus moves
/// next.
///
/// # Examples
///
/// ```
/// use crossgrid_core::{Grid, Orientation, Position};
/// use crossgrid_game::{InputOrder, MoveDirection};
///
/// let mut grid = Grid::new();
/// grid.place(&['К', 'О', 'Т'], Position::new(5, 4), Orientation::Horizontal);
/// grid.place(&['Д', 'О', 'М'], Position::new(4, 5), Orientation::Vertical);
///
/// let order = InputOrder::new(&grid);
/// assert_eq!(order.len(), 5);
/// assert_eq!(order.index_of(Position::new(5, 4)), Some(1));
///
/// // Right walks the row-major order, wrapping onto the next row.
/// assert_eq!(order.next(Position::new(4, 5)), Some(Position::new(5, 4)));
/// // Down stays in the column.
/// assert_eq!(
///     order.step(Position::new(4, 5), MoveDirection::Down),
///     Some(Position::new(5, 5))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOrder {
    positions: Vec<Position>,
}

impl InputOrder {
    /// Collects the letter cells of `grid`.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self {
            positions: grid.letters().map(|(pos, _)| pos).collect(),
        }
    }

    /// Returns the number of inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the grid has no letter cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the first input, where focus goes on a new puzzle.
    #[must_use]
    pub fn first(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    /// Returns the input index of `pos`, or `None` if it is not a letter cell.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.positions.binary_search(&pos).ok()
    }

    /// Returns the position of input `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    /// Returns the input after `pos`.
    #[must_use]
    pub fn next(&self, pos: Position) -> Option<Position> {
        let index = self.index_of(pos)?;
        self.position(index + 1)
    }

    /// Returns the input before `pos`.
    #[must_use]
    pub fn previous(&self, pos: Position) -> Option<Position> {
        let index = self.index_of(pos)?;
        self.position(index.checked_sub(1)?)
    }

    /// Returns where focus moves from `pos` in `direction`.
    ///
    /// Left and right follow the input order. Up and down jump to the nearest
    /// letter cell in the same column, skipping blocks. Returns `None` when
    /// there is nowhere to go, in which case focus stays put.
    #[must_use]
    pub fn step(&self, pos: Position, direction: MoveDirection) -> Option<Position> {
        match direction {
            MoveDirection::Left => self.previous(pos),
            MoveDirection::Right => self.next(pos),
            MoveDirection::Up => self
                .positions
                .iter()
                .rev()
                .find(|p| p.col == pos.col && p.row < pos.row)
                .copied(),
            MoveDirection::Down => self
                .positions
                .iter()
                .find(|p| p.col == pos.col && p.row > pos.row)
                .copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossgrid_core::Orientation;

    use super::*;

    fn sample_order() -> InputOrder {
        let mut grid = Grid::new();
        let home: Vec<char> = "ДОМ".chars().collect();
        let window: Vec<char> = "ОКНО".chars().collect();
        let garden: Vec<char> = "САД".chars().collect();
        grid.place(&home, Position::new(0, 1), Orientation::Vertical);
        grid.place(&window, Position::new(1, 1), Orientation::Horizontal);
        grid.place(&garden, Position::new(6, 1), Orientation::Horizontal);
        InputOrder::new(&grid)
    }

    #[test]
    fn test_index_mapping_round_trips() {
        let order = sample_order();
        assert_eq!(order.len(), 9);
        for index in 0..order.len() {
            let pos = order.position(index).unwrap();
            assert_eq!(order.index_of(pos), Some(index));
        }
        assert_eq!(order.index_of(Position::new(0, 0)), None);
        assert_eq!(order.position(9), None);
    }

    #[test]
    fn test_left_right_stop_at_ends() {
        let order = sample_order();
        assert_eq!(order.first(), Some(Position::new(0, 1)));
        assert_eq!(order.step(Position::new(0, 1), MoveDirection::Left), None);
        assert_eq!(order.step(Position::new(6, 3), MoveDirection::Right), None);
        assert_eq!(
            order.step(Position::new(1, 4), MoveDirection::Right),
            Some(Position::new(2, 1))
        );
    }

    #[test]
    fn test_up_down_skip_blocks() {
        let order = sample_order();
        assert_eq!(
            order.step(Position::new(2, 1), MoveDirection::Down),
            Some(Position::new(6, 1))
        );
        assert_eq!(
            order.step(Position::new(6, 1), MoveDirection::Up),
            Some(Position::new(2, 1))
        );
        assert_eq!(order.step(Position::new(1, 3), MoveDirection::Up), None);
        assert_eq!(order.step(Position::new(6, 3), MoveDirection::Down), None);
    }

    #[test]
    fn test_moves_from_block_cell() {
        let order = sample_order();
        assert_eq!(order.next(Position::new(9, 9)), None);
        assert_eq!(
            order.step(Position::new(4, 1), MoveDirection::Up),
            Some(Position::new(2, 1))
        );
    }
}
