use super::grid::Grid;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Move `pos` one cell in this direction.  Returns `None` if the move
    /// would leave `grid`; there is no wraparound.
    pub(super) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Down => y = y.checked_add(1).filter(|&y2| y2 < grid.cells())?,
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Right => x = x.checked_add(1).filter(|&x2| x2 < grid.cells())?,
        }
        Some(Position { x, y })
    }

    pub(super) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Position::new(2, 7), Some(Position::new(2, 6)))]
    #[case(Direction::Down, Position::new(2, 7), Some(Position::new(2, 8)))]
    #[case(Direction::Left, Position::new(2, 7), Some(Position::new(1, 7)))]
    #[case(Direction::Right, Position::new(2, 7), Some(Position::new(3, 7)))]
    #[case(Direction::Up, Position::new(2, 0), None)]
    #[case(Direction::Down, Position::new(2, 11), None)]
    #[case(Direction::Left, Position::new(0, 7), None)]
    #[case(Direction::Right, Position::new(11, 7), None)]
    #[case(Direction::Down, Position::new(2, 10), Some(Position::new(2, 11)))]
    #[case(Direction::Right, Position::new(10, 7), Some(Position::new(11, 7)))]
    fn advance(#[case] d: Direction, #[case] pos: Position, #[case] r: Option<Position>) {
        assert_eq!(d.advance(pos, Grid::new(12)), r);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Left, Direction::Right)]
    fn opposite(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.opposite(), r);
        assert_eq!(r.opposite(), d);
    }
}
