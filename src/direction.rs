//! Cardinal directions on the grid.

use core::fmt;
use grid_util::point::Point;

/// A cardinal movement direction. The grid uses screen coordinates: y grows
/// southward, so a step north decrements y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The four directions in the fixed evaluation order used throughout the
    /// crate: N, S, E, W.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The (dx, dy) of a unit step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The neighbouring cell one step in this direction.
    pub fn step(self, p: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(p.x + dx, p.y + dy)
    }

    /// The direction of the unit move from `from` to `to`, if the two cells
    /// are cardinal neighbours.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Single-letter form used in path strings.
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
