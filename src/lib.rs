//! # stealth_path
//!
//! Obstacle compromise modelling and safe-path search on an unbounded 2D
//! grid. An [ObstacleField] holds a heterogeneous collection of obstacles
//! (guards, fences, camera cones, sensor ranges and laser barriers), each of
//! which marks some region of the grid as compromised. Three query layers sit
//! on top of the field:
//!
//! - [ObstacleField::is_compromised]: whether a single cell is covered by any
//!   obstacle,
//! - [ObstacleField::analyze]: which cardinal moves away from a cell are safe,
//! - [Pathfinder::find_path]: a shortest path between two cells that never
//!   enters a compromised cell, found with breadth-first search over the
//!   4-connected grid.
//!
//! The grid has no borders: coordinates are arbitrary `i32` values and the
//! search keeps a sparse visited set instead of a dense map. Coordinates use
//! the screen convention, so y grows southward and [Direction::North] is a
//! step to y - 1.

mod bfs;
pub mod direction;
pub mod field;
pub mod obstacle;
pub mod pathfinder;
pub mod render;
pub mod safety;

pub use direction::Direction;
pub use field::ObstacleField;
pub use obstacle::{Camera, Fence, Guard, LaserBarrier, Obstacle, ObstacleKind, Sensor};
pub use pathfinder::{PathResult, Pathfinder};
pub use render::MapView;
pub use safety::SafetyReport;

/// Inline capacity of successor lists; a cell has at most 4 cardinal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
