//! Local safety analysis: which moves away from a cell are safe.

use crate::{Direction, ObstacleField};
use grid_util::point::Point;
use smallvec::SmallVec;

/// Outcome of checking a cell and its four cardinal neighbours against the
/// field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SafetyReport {
    /// The cell itself is covered by an obstacle.
    Compromised,
    /// The cell is clear but every cardinal neighbour is covered.
    Stuck,
    /// The directions whose neighbour is clear, in N, S, E, W order.
    /// Never empty.
    Safe(SmallVec<[Direction; 4]>),
}

impl ObstacleField {
    /// Classifies a position by the safety of staying put and of each
    /// cardinal move away from it. Pure query; the field is not changed.
    pub fn analyze(&self, position: Point) -> SafetyReport {
        if self.is_compromised(position) {
            return SafetyReport::Compromised;
        }
        let safe: SmallVec<[Direction; 4]> = Direction::CARDINAL
            .into_iter()
            .filter(|dir| !self.is_compromised(dir.step(position)))
            .collect();
        if safe.is_empty() {
            SafetyReport::Stuck
        } else {
            SafetyReport::Safe(safe)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::{Fence, Guard};
    use smallvec::smallvec;

    #[test]
    fn open_field_is_safe_in_all_directions() {
        let field = ObstacleField::new();
        assert_eq!(
            field.analyze(Point::new(0, 0)),
            SafetyReport::Safe(smallvec![
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West
            ])
        );
    }

    #[test]
    fn compromised_position_short_circuits() {
        let mut field = ObstacleField::new();
        field.add(Guard { x: 0, y: 0 });
        assert_eq!(field.analyze(Point::new(0, 0)), SafetyReport::Compromised);
    }

    #[test]
    fn ring_of_guards_means_stuck() {
        // g
        //g.g   the centre is clear, every neighbour is guarded
        // g
        let mut field = ObstacleField::new();
        for (x, y) in [(0, -1), (0, 1), (1, 0), (-1, 0)] {
            field.add(Guard { x, y });
        }
        assert_eq!(field.analyze(Point::new(0, 0)), SafetyReport::Stuck);
    }

    #[test]
    fn reports_only_clear_directions_in_order() {
        // A fence wall to the east and a guard to the north leave S and W.
        let mut field = ObstacleField::new();
        field.add(Guard { x: 0, y: -1 });
        field.add(Fence {
            start: Point::new(1, -2),
            end: Point::new(1, 2),
        });
        assert_eq!(
            field.analyze(Point::new(0, 0)),
            SafetyReport::Safe(smallvec![Direction::South, Direction::West])
        );
    }
}
