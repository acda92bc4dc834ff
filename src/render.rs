//! Symbolic map rendering of a rectangular window onto a field.

use crate::ObstacleField;
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;

/// A rectangular window onto an [ObstacleField], rendered one symbol per
/// cell.
///
/// Compromised cells show the symbol of the earliest added obstacle covering
/// them; clear cells show `'.'`. Both corners are included in the window; the
/// caller guarantees `top_left <= bottom_right` on both axes.
#[derive(Clone, Copy, Debug)]
pub struct MapView<'a> {
    field: &'a ObstacleField,
    top_left: Point,
    bottom_right: Point,
}

impl<'a> MapView<'a> {
    pub fn new(field: &'a ObstacleField, top_left: Point, bottom_right: Point) -> MapView<'a> {
        debug_assert!(top_left.x <= bottom_right.x && top_left.y <= bottom_right.y);
        MapView {
            field,
            top_left,
            bottom_right,
        }
    }

    pub fn width(&self) -> usize {
        (self.bottom_right.x - self.top_left.x + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.bottom_right.y - self.top_left.y + 1) as usize
    }

    /// Renders the window into a symbol grid indexed from the window's
    /// top-left corner.
    pub fn render(&self) -> SimpleGrid<u8> {
        let mut symbols = SimpleGrid::new(self.width(), self.height(), b'.');
        for y in self.top_left.y..=self.bottom_right.y {
            for x in self.top_left.x..=self.bottom_right.x {
                if let Some(obstacle) = self.field.first_compromising(Point::new(x, y)) {
                    symbols.set(
                        (x - self.top_left.x) as usize,
                        (y - self.top_left.y) as usize,
                        obstacle.kind().symbol() as u8,
                    );
                }
            }
        }
        symbols
    }
}

impl fmt::Display for MapView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbols = self.render();
        for y in 0..symbols.height() {
            for x in 0..symbols.width() {
                write!(f, "{}", symbols.get(x, y) as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::{Camera, Fence, Guard, LaserBarrier, Sensor};
    use crate::Direction;

    #[test]
    fn empty_window_is_all_dots() {
        let field = ObstacleField::new();
        let view = MapView::new(&field, Point::new(0, 0), Point::new(2, 1));
        assert_eq!(view.to_string(), "...\n...\n");
    }

    #[test]
    fn symbols_and_window_offsets() {
        let mut field = ObstacleField::new();
        field.add(Guard { x: 1, y: 1 });
        field.add(Fence {
            start: Point::new(0, 2),
            end: Point::new(2, 2),
        });
        let view = MapView::new(&field, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(view.to_string(), "...\n.g.\nfff\n");
        // Shifting the window keeps symbols anchored to world coordinates.
        let shifted = MapView::new(&field, Point::new(1, 1), Point::new(2, 2));
        assert_eq!(shifted.to_string(), "g.\nff\n");
    }

    #[test]
    fn first_added_obstacle_wins_the_cell() {
        let mut field = ObstacleField::new();
        field.add(Sensor {
            x: 0,
            y: 0,
            range: 1.0,
        });
        field.add(Guard { x: 0, y: 0 });
        let view = MapView::new(&field, Point::new(0, 0), Point::new(0, 0));
        assert_eq!(view.to_string(), "s\n");
    }

    #[test]
    fn laser_renders_with_its_own_symbol() {
        let mut field = ObstacleField::new();
        field.add(LaserBarrier {
            x: 0,
            y: 0,
            facing: Direction::East,
            range: 2,
        });
        let view = MapView::new(&field, Point::new(0, 0), Point::new(3, 0));
        // The emitter cell stays clear.
        assert_eq!(view.to_string(), ".ll.\n");
    }

    #[test]
    fn camera_cone_fills_its_quadrant() {
        let mut field = ObstacleField::new();
        field.add(Camera {
            x: 0,
            y: 0,
            facing: Direction::South,
        });
        let view = MapView::new(&field, Point::new(-2, 0), Point::new(2, 2));
        assert_eq!(view.to_string(), "..c..\n.ccc.\nccccc\n");
    }
}
