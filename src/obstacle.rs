//! Obstacle kinds and their compromise predicates.
//!
//! Every kind answers one question: does it see or occupy a given cell? The
//! predicates are pure and total over all of `i32` space. Camera and sensor
//! checks promote coordinates to `f64` and compare with exact `<=`; all other
//! kinds stay in integer arithmetic.

use crate::Direction;
use grid_util::point::Point;

/// A guard standing on a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guard {
    pub x: i32,
    pub y: i32,
}

impl Guard {
    pub fn compromises(&self, p: Point) -> bool {
        p.x == self.x && p.y == self.y
    }
}

/// An axis-aligned fence between two cells, covering every cell on the
/// segment including both endpoints.
///
/// A fence whose endpoints share neither axis is degenerate: it covers
/// nothing, and constructing one is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fence {
    pub start: Point,
    pub end: Point,
}

impl Fence {
    pub fn compromises(&self, p: Point) -> bool {
        if self.start.x == self.end.x && p.x == self.start.x {
            let lo = self.start.y.min(self.end.y);
            let hi = self.start.y.max(self.end.y);
            return (lo..=hi).contains(&p.y);
        }
        if self.start.y == self.end.y && p.y == self.start.y {
            let lo = self.start.x.min(self.end.x);
            let hi = self.start.x.max(self.end.x);
            return (lo..=hi).contains(&p.x);
        }
        false
    }
}

/// A camera at a fixed cell looking along one cardinal direction.
///
/// Its vision is the 90 degree cone opening away from it: the apex cell plus
/// every cell on or between the two diagonals through the apex. A camera
/// facing north at (X, Y) sees (x, y) when `y <= Y` and
/// `X - (Y - y) <= x <= X + (Y - y)`; the other directions are rotations of
/// the same test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

impl Camera {
    pub fn compromises(&self, p: Point) -> bool {
        let (x, y) = (f64::from(p.x), f64::from(p.y));
        let (cx, cy) = (f64::from(self.x), f64::from(self.y));
        match self.facing {
            Direction::North => y <= cy && x >= cx - (cy - y) && x <= cx + (cy - y),
            Direction::South => y >= cy && x >= cx - (y - cy) && x <= cx + (y - cy),
            Direction::East => x >= cx && y >= cy - (x - cx) && y <= cy + (x - cx),
            Direction::West => x <= cx && y >= cy - (cx - x) && y <= cy + (cx - x),
        }
    }
}

/// A sensor with a circular detection range, boundary inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensor {
    pub x: i32,
    pub y: i32,
    pub range: f64,
}

impl Sensor {
    pub fn compromises(&self, p: Point) -> bool {
        let dx = f64::from(self.x - p.x);
        let dy = f64::from(self.y - p.y);
        (dx * dx + dy * dy).sqrt() <= self.range
    }
}

/// A laser beam projected from an emitter cell along one cardinal direction.
///
/// The beam covers `range` cells starting at the cell next to the emitter;
/// the emitter's own cell stays clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaserBarrier {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
    pub range: i32,
}

impl LaserBarrier {
    pub fn compromises(&self, p: Point) -> bool {
        match self.facing {
            Direction::North => p.x == self.x && p.y < self.y && p.y >= self.y - self.range,
            Direction::South => p.x == self.x && p.y > self.y && p.y <= self.y + self.range,
            Direction::East => p.y == self.y && p.x > self.x && p.x <= self.x + self.range,
            Direction::West => p.y == self.y && p.x < self.x && p.x >= self.x - self.range,
        }
    }
}

/// Any obstacle.
///
/// A closed enum rather than a trait object: the kind set is fixed, and the
/// compiler checks that every kind is handled wherever obstacles are
/// inspected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Obstacle {
    Guard(Guard),
    Fence(Fence),
    Camera(Camera),
    Sensor(Sensor),
    LaserBarrier(LaserBarrier),
}

impl Obstacle {
    /// Whether this obstacle sees or occupies the given cell.
    pub fn compromises(&self, p: Point) -> bool {
        match self {
            Obstacle::Guard(g) => g.compromises(p),
            Obstacle::Fence(f) => f.compromises(p),
            Obstacle::Camera(c) => c.compromises(p),
            Obstacle::Sensor(s) => s.compromises(p),
            Obstacle::LaserBarrier(l) => l.compromises(p),
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Guard(_) => ObstacleKind::Guard,
            Obstacle::Fence(_) => ObstacleKind::Fence,
            Obstacle::Camera(_) => ObstacleKind::Camera,
            Obstacle::Sensor(_) => ObstacleKind::Sensor,
            Obstacle::LaserBarrier(_) => ObstacleKind::LaserBarrier,
        }
    }
}

impl From<Guard> for Obstacle {
    fn from(guard: Guard) -> Self {
        Obstacle::Guard(guard)
    }
}

impl From<Fence> for Obstacle {
    fn from(fence: Fence) -> Self {
        Obstacle::Fence(fence)
    }
}

impl From<Camera> for Obstacle {
    fn from(camera: Camera) -> Self {
        Obstacle::Camera(camera)
    }
}

impl From<Sensor> for Obstacle {
    fn from(sensor: Sensor) -> Self {
        Obstacle::Sensor(sensor)
    }
}

impl From<LaserBarrier> for Obstacle {
    fn from(laser: LaserBarrier) -> Self {
        Obstacle::LaserBarrier(laser)
    }
}

/// The kind of an [Obstacle], used for map symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Guard,
    Fence,
    Camera,
    Sensor,
    LaserBarrier,
}

impl ObstacleKind {
    /// One-character map symbol.
    pub fn symbol(self) -> char {
        match self {
            ObstacleKind::Guard => 'g',
            ObstacleKind::Fence => 'f',
            ObstacleKind::Camera => 'c',
            ObstacleKind::Sensor => 's',
            ObstacleKind::LaserBarrier => 'l',
        }
    }
}
