use super::direction::Direction;
use crate::consts;
use crate::util::Bounds;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the playing field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the cells of the snake, head first
    pub(super) segments: VecDeque<Position>,

    /// The direction in which the snake moved on the last tick (or will move
    /// on the first tick)
    pub(super) direction: Direction,

    /// A turn requested since the last tick, to be applied at the next one
    pub(super) pending: Option<Direction>,
}

impl Snake {
    /// Create a new snake of length
    /// [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH] in the middle of
    /// `bounds`, facing east with its body trailing off to the west.
    pub(super) fn new(bounds: Bounds) -> Snake {
        let direction = Direction::East;
        let head = Position::new(bounds.width / 2, bounds.height / 2);
        let tail_ward = direction.reverse();
        let segments = std::iter::successors(Some(head), |&p| Some(tail_ward.advance(p, bounds)))
            .take(usize::from(consts::INITIAL_SNAKE_LENGTH))
            .collect();
        Snake {
            segments,
            direction,
            pending: None,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.segments.front().copied().unwrap_or_default()
    }

    /// Return the positions of the cells of the snake, head first
    pub(super) fn segments(&self) -> &VecDeque<Position> {
        &self.segments
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Does any part of the snake occupy `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Return the direction the snake will move in on the next tick
    pub(super) fn heading(&self) -> Direction {
        self.pending.unwrap_or(self.direction)
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Request that the snake turn to face `direction` on the next tick.
    /// Returns `false` and does nothing if `direction` is the reverse of the
    /// direction the snake last moved in.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.pending = Some(direction);
            true
        }
    }

    /// Apply any pending turn and return the position the head would move to
    /// within `bounds`
    pub(super) fn next_head(&mut self, bounds: Bounds) -> Position {
        if let Some(d) = self.pending.take() {
            self.direction = d;
        }
        self.direction.advance(self.head(), bounds)
    }

    /// Move the head to `pos`, which must be adjacent to the current head
    pub(super) fn push_head(&mut self, pos: Position) {
        self.segments.push_front(pos);
    }

    /// Remove the last cell of the snake's tail
    pub(super) fn drop_tail(&mut self) {
        let _ = self.segments.pop_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 10,
        height: 10,
    };

    #[test]
    fn new_snake() {
        let snake = Snake::new(BOUNDS);
        assert_eq!(
            snake.segments,
            VecDeque::from([
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ])
        );
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.pending, None);
        assert_eq!(snake.head(), Position::new(5, 5));
    }

    #[test]
    fn reverse_rejected() {
        let mut snake = Snake::new(BOUNDS);
        assert!(!snake.turn(Direction::West));
        assert_eq!(snake.heading(), Direction::East);
        assert_eq!(snake.next_head(BOUNDS), Position::new(6, 5));
    }

    #[test]
    fn turn_is_checked_against_last_move() {
        let mut snake = Snake::new(BOUNDS);
        assert!(snake.turn(Direction::North));
        // West is still the reverse of the direction actually moved in
        assert!(!snake.turn(Direction::West));
        assert_eq!(snake.heading(), Direction::North);
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.next_head(BOUNDS), Position::new(5, 4));
        assert_eq!(snake.direction, Direction::North);
        assert_eq!(snake.pending, None);
    }

    #[test]
    fn push_and_drop() {
        let mut snake = Snake::new(BOUNDS);
        let pos = snake.next_head(BOUNDS);
        snake.push_head(pos);
        assert_eq!(snake.len(), 4);
        snake.drop_tail();
        assert_eq!(
            snake.segments(),
            &VecDeque::from([
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5)
            ])
        );
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(3, 5)));
    }

    #[test]
    fn head_symbol_follows_direction() {
        let mut snake = Snake::new(BOUNDS);
        assert_eq!(snake.head_symbol(), consts::SNAKE_HEAD_EAST_SYMBOL);
        assert!(snake.turn(Direction::South));
        // Pending turns don't show until the snake actually moves
        assert_eq!(snake.head_symbol(), consts::SNAKE_HEAD_EAST_SYMBOL);
        let _ = snake.next_head(BOUNDS);
        assert_eq!(snake.head_symbol(), consts::SNAKE_HEAD_SOUTH_SYMBOL);
    }
}
