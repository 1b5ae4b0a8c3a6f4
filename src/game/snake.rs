use super::direction::Direction;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  All positions are relative to the top-left corner of the
/// board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the cells in the snake's body, oldest (tail) at the
    /// front, newest at the back.  Does not include the head.
    pub(super) body: VecDeque<Position>,

    /// The direction the snake is travelling in, or `None` if it has not yet
    /// started moving
    pub(super) heading: Option<Direction>,
}

impl Snake {
    /// Create a single-cell snake with its head at `head`
    pub(super) fn new(head: Position, heading: Option<Direction>) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            heading,
        }
    }

    pub(super) fn head(&self) -> Position {
        self.head
    }

    pub(super) fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub(super) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Number of cells occupied, head included
    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Does any cell of the snake (head included) lie at `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Change the snake's heading in response to user input.  A steer to the
    /// exact opposite of the current heading is ignored.  The first steer of a
    /// game is always accepted.
    pub(super) fn steer(&mut self, direction: Direction) {
        if self.heading != Some(direction.opposite()) {
            self.heading = Some(direction);
        }
    }

    /// Move the head to `target`, which must be one cell away.  When `grow` is
    /// true the tail stays put and the snake gains one cell; otherwise every
    /// cell shifts forwards one step.
    pub(super) fn slither(&mut self, target: Position, grow: bool) {
        self.body.push_back(self.head);
        self.head = target;
        if !grow {
            let _ = self.body.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worm() -> Snake {
        // head at (4,5), tail trailing off to the left
        Snake {
            head: Position::new(4, 5),
            body: VecDeque::from([Position::new(2, 5), Position::new(3, 5)]),
            heading: Some(Direction::Right),
        }
    }

    #[test]
    fn slither_without_growing() {
        let mut snake = worm();
        snake.slither(Position::new(5, 5), false);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(
            snake.body,
            VecDeque::from([Position::new(3, 5), Position::new(4, 5)])
        );
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn slither_and_grow() {
        let mut snake = worm();
        snake.slither(Position::new(5, 5), true);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(
            snake.body,
            VecDeque::from([
                Position::new(2, 5),
                Position::new(3, 5),
                Position::new(4, 5)
            ])
        );
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn occupies() {
        let snake = worm();
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(snake.occupies(Position::new(2, 5)));
        assert!(!snake.occupies(Position::new(5, 5)));
    }

    #[test]
    fn steer_opposite_ignored() {
        let mut snake = worm();
        snake.steer(Direction::Left);
        assert_eq!(snake.heading(), Some(Direction::Right));
        snake.steer(Direction::Up);
        assert_eq!(snake.heading(), Some(Direction::Up));
    }

    #[test]
    fn first_steer_always_accepted() {
        let mut snake = Snake::new(Position::new(6, 6), None);
        snake.steer(Direction::Left);
        assert_eq!(snake.heading(), Some(Direction::Left));
    }
}
