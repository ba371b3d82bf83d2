use crate::util::Bounds;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the position one cell away from `pos` in this direction,
    /// wrapping around to the opposite edge of `bounds` when stepping off the
    /// field
    pub(super) fn advance(self, pos: Position, bounds: Bounds) -> Position {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = decrement_wrapping(y, bounds.height),
            Direction::East => x = increment_wrapping(x, bounds.width),
            Direction::South => y = increment_wrapping(y, bounds.height),
            Direction::West => x = decrement_wrapping(x, bounds.width),
        }
        Position { x, y }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub(crate) fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

fn decrement_wrapping(x: u16, max: u16) -> u16 {
    x.checked_sub(1).unwrap_or_else(|| max.saturating_sub(1))
}

fn increment_wrapping(x: u16, max: u16) -> u16 {
    x.checked_add(1).filter(|&xx| xx < max).unwrap_or(0)
}
