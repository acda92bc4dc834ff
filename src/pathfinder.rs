//! Shortest safe-path search over the 4-connected grid.

use crate::bfs::{bfs, SearchOutcome};
use crate::{Direction, ObstacleField, N_SMALLVEC_SIZE};
use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

/// Shortest safe-path search between two cells of an [ObstacleField].
///
/// The grid is unbounded, so a search for a goal that is unreachable but not
/// fenced in by obstacles would expand forever. An optional expansion cap
/// converts that case into [PathResult::Capped]; the default is uncapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pathfinder {
    expansion_limit: Option<usize>,
}

/// Outcome of a safe-path search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// A shortest safe path, as the moves taking the start cell to the goal.
    /// Empty when the start already is the goal.
    Found(Vec<Direction>),
    /// Every cell reachable from the start was explored without meeting the
    /// goal. A normal outcome, not an error.
    NoPath,
    /// The expansion cap was hit; reachability is unknown.
    Capped,
}

impl PathResult {
    /// The found moves, if any.
    pub fn path(self) -> Option<Vec<Direction>> {
        match self {
            PathResult::Found(moves) => Some(moves),
            PathResult::NoPath | PathResult::Capped => None,
        }
    }
}

impl Pathfinder {
    /// An uncapped pathfinder.
    pub fn new() -> Pathfinder {
        Pathfinder {
            expansion_limit: None,
        }
    }

    /// A pathfinder that expands at most `limit` cells per search before
    /// giving up as [PathResult::Capped].
    pub fn with_expansion_limit(limit: usize) -> Pathfinder {
        Pathfinder {
            expansion_limit: Some(limit),
        }
    }

    /// Finds a shortest path from `start` to `goal` that never enters a
    /// compromised cell.
    ///
    /// A compromised goal is rejected up front without searching. The start
    /// cell itself is never checked: the agent already stands there, and the
    /// first move is the earliest chance to get clear. Neighbours are
    /// expanded in N, S, E, W order; among equal-length paths any one may be
    /// returned.
    pub fn find_path(&self, field: &ObstacleField, start: Point, goal: Point) -> PathResult {
        if field.is_compromised(goal) {
            info!("goal {} is compromised, skipping search", goal);
            return PathResult::NoPath;
        }
        let outcome = bfs(
            &start,
            |node| {
                let node = *node;
                Direction::CARDINAL
                    .into_iter()
                    .map(move |dir| dir.step(node))
                    .filter(|p| !field.is_compromised(*p))
                    .collect::<SmallVec<[Point; N_SMALLVEC_SIZE]>>()
            },
            |node| *node == goal,
            self.expansion_limit,
        );
        match outcome {
            SearchOutcome::Found(cells) => PathResult::Found(moves_between(&cells)),
            SearchOutcome::Exhausted => PathResult::NoPath,
            SearchOutcome::Capped => PathResult::Capped,
        }
    }

    /// Like [find_path](Self::find_path), rendered as a direction string such
    /// as `"EESSE"`. `None` covers both the no-path and capped outcomes.
    pub fn find_path_string(
        &self,
        field: &ObstacleField,
        start: Point,
        goal: Point,
    ) -> Option<String> {
        self.find_path(field, start, goal)
            .path()
            .map(|moves| moves.iter().map(|dir| dir.letter()).collect())
    }
}

/// The moves between consecutive cells of a search result.
fn moves_between(cells: &[Point]) -> Vec<Direction> {
    cells
        .windows(2)
        .map(|pair| {
            Direction::between(pair[0], pair[1])
                .expect("consecutive search cells are cardinal neighbours")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::{Fence, Guard, LaserBarrier};

    fn replay(start: Point, moves: &[Direction]) -> Point {
        moves.iter().fold(start, |p, dir| dir.step(p))
    }

    #[test]
    fn straight_line_path() {
        let field = ObstacleField::new();
        let path = Pathfinder::new()
            .find_path(&field, Point::new(0, 0), Point::new(3, 0))
            .path()
            .unwrap();
        assert_eq!(path, vec![Direction::East; 3]);
    }

    #[test]
    fn start_equals_goal_is_empty_path() {
        let field = ObstacleField::new();
        let result = Pathfinder::new().find_path(&field, Point::new(2, 2), Point::new(2, 2));
        assert_eq!(result, PathResult::Found(vec![]));
    }

    #[test]
    fn compromised_goal_needs_no_search() {
        let mut field = ObstacleField::new();
        field.add(Guard { x: 5, y: 5 });
        // Uncapped: only the up-front goal check keeps this from running forever.
        let result = Pathfinder::new().find_path(&field, Point::new(0, 0), Point::new(5, 5));
        assert_eq!(result, PathResult::NoPath);
    }

    #[test]
    fn compromised_start_is_still_searched_from() {
        let mut field = ObstacleField::new();
        field.add(Guard { x: 0, y: 0 });
        let path = Pathfinder::new()
            .find_path(&field, Point::new(0, 0), Point::new(2, 0))
            .path()
            .unwrap();
        assert_eq!(replay(Point::new(0, 0), &path), Point::new(2, 0));
    }

    #[test]
    fn path_goes_around_a_wall() {
        //  f
        // SfG
        //  f
        // A vertical fence between start and goal forces a detour.
        let mut field = ObstacleField::new();
        field.add(Fence {
            start: Point::new(1, -1),
            end: Point::new(1, 1),
        });
        let path = Pathfinder::new()
            .find_path(&field, Point::new(0, 0), Point::new(2, 0))
            .path()
            .unwrap();
        // Two cells around either fence end: 6 moves instead of 2.
        assert_eq!(path.len(), 6);
        let mut at = Point::new(0, 0);
        for dir in &path {
            at = dir.step(at);
            assert!(!field.is_compromised(at));
        }
        assert_eq!(at, Point::new(2, 0));
    }

    #[test]
    fn enclosed_start_has_no_path() {
        let mut field = ObstacleField::new();
        for (x, y) in [(0, -1), (0, 1), (1, 0), (-1, 0)] {
            field.add(Guard { x, y });
        }
        let result = Pathfinder::new().find_path(&field, Point::new(0, 0), Point::new(4, 0));
        assert_eq!(result, PathResult::NoPath);
    }

    #[test]
    fn walled_off_goal_trips_the_cap() {
        // The goal's ring makes it unreachable, but the start's component is
        // infinite; only the cap terminates the search.
        let mut field = ObstacleField::new();
        for (x, y) in [(10, -1), (10, 1), (11, 0), (9, 0)] {
            field.add(Guard { x, y });
        }
        let result =
            Pathfinder::with_expansion_limit(5_000).find_path(&field, Point::new(0, 0), Point::new(10, 0));
        assert_eq!(result, PathResult::Capped);
    }

    #[test]
    fn laser_blocks_the_direct_lane() {
        // A laser pointing south covers (3, 1)..(3, 4) but not (3, 0).
        let mut field = ObstacleField::new();
        field.add(LaserBarrier {
            x: 3,
            y: 0,
            facing: Direction::South,
            range: 4,
        });
        let path = Pathfinder::new()
            .find_path(&field, Point::new(0, 2), Point::new(6, 2))
            .path()
            .unwrap();
        let mut at = Point::new(0, 2);
        for dir in &path {
            at = dir.step(at);
            assert!(!field.is_compromised(at));
        }
        assert_eq!(at, Point::new(6, 2));
        assert!(path.len() > 6); // forced off the straight lane
    }

    #[test]
    fn path_string_uses_direction_letters() {
        let field = ObstacleField::new();
        let s = Pathfinder::new()
            .find_path_string(&field, Point::new(0, 0), Point::new(0, 2))
            .unwrap();
        assert_eq!(s, "SS");
    }
}
