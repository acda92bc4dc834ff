//! The obstacle registry.

use crate::obstacle::Obstacle;
use grid_util::point::Point;
use log::debug;

/// An append-only collection of obstacles, queried as a whole.
///
/// Obstacles keep their insertion order: [first_compromising](Self::first_compromising)
/// reports the earliest added obstacle covering a cell, which map rendering
/// relies on. Compromise itself is an OR over all obstacles and does not
/// depend on order. Once added, an obstacle is never mutated or removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> ObstacleField {
        ObstacleField {
            obstacles: Vec::new(),
        }
    }

    /// Registers an obstacle with the field.
    pub fn add(&mut self, obstacle: impl Into<Obstacle>) {
        let obstacle = obstacle.into();
        debug!("registering obstacle {:?}", obstacle);
        self.obstacles.push(obstacle);
    }

    /// Whether any obstacle sees or occupies the cell.
    pub fn is_compromised(&self, p: Point) -> bool {
        self.obstacles.iter().any(|o| o.compromises(p))
    }

    /// The earliest added obstacle covering the cell, if any. Only map
    /// rendering cares about which obstacle wins; pathing uses
    /// [is_compromised](Self::is_compromised).
    pub fn first_compromising(&self, p: Point) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.compromises(p))
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}

impl FromIterator<Obstacle> for ObstacleField {
    fn from_iter<T: IntoIterator<Item = Obstacle>>(iter: T) -> Self {
        ObstacleField {
            obstacles: iter.into_iter().collect(),
        }
    }
}
