use grid_util::point::Point;
use stealth_path::{Guard, MapView, ObstacleField, Pathfinder};

// In this example a safe path is found across a small field with shape
//  ___
// |S  |
// | g |
// |  E|
//  ---
// where
// - g marks a guard
// - S marks the start
// - E marks the end
//
// Moves are cardinal only; the guard's cell must be avoided.

fn main() {
    let mut field = ObstacleField::new();
    field.add(Guard { x: 1, y: 1 });
    println!("{}", MapView::new(&field, Point::new(0, 0), Point::new(2, 2)));
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = Pathfinder::new().find_path_string(&field, start, end).unwrap();
    println!("Path: {}", path);
}
