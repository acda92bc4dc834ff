//! The interactive console shell around the library: collects obstacle
//! definitions and queries from stdin, renders results to stdout. All text
//! parsing and validation happens here; the library only ever sees
//! well-formed values.

use grid_util::point::Point;
use std::io::{self, BufRead, Write};
use stealth_path::{
    Camera, Direction, Fence, Guard, LaserBarrier, MapView, ObstacleField, PathResult, Pathfinder,
    SafetyReport, Sensor,
};

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().map_while(Result::ok);
    let mut field = ObstacleField::new();
    // A generous cap so a hopeless search reports instead of hanging.
    let finder = Pathfinder::with_expansion_limit(1_000_000);

    loop {
        print_menu();
        let choice = match lines.next() {
            Some(line) => line.trim().chars().next().unwrap_or(' '),
            None => return,
        };
        match choice {
            'g' => add_guard(&mut lines, &mut field),
            'f' => add_fence(&mut lines, &mut field),
            's' => add_sensor(&mut lines, &mut field),
            'c' => add_camera(&mut lines, &mut field),
            'l' => add_laser(&mut lines, &mut field),
            'd' => show_safe_directions(&mut lines, &field),
            'm' => display_map(&mut lines, &field),
            'p' => find_safe_path(&mut lines, &field, &finder),
            'x' => return,
            _ => println!("Invalid option."),
        }
    }
}

fn print_menu() {
    println!("Select one of the following options:");
    println!("g) Add 'Guard' obstacle");
    println!("f) Add 'Fence' obstacle");
    println!("s) Add 'Sensor' obstacle");
    println!("c) Add 'Camera' obstacle");
    println!("l) Add 'Laser barrier' obstacle");
    println!("d) Show safe directions");
    println!("m) Display obstacle map");
    println!("p) Find safe path");
    println!("x) Exit");
    print!("Enter code: ");
    io::stdout().flush().ok();
}

fn prompt_point(lines: &mut impl Iterator<Item = String>, prompt: &str) -> Option<Point> {
    loop {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let line = lines.next()?;
        if let Some(point) = parse_point(&line) {
            return Some(point);
        }
        println!("Invalid input.");
    }
}

fn parse_point(input: &str) -> Option<Point> {
    let (x, y) = input.trim().split_once(',')?;
    Some(Point::new(
        x.trim().parse().ok()?,
        y.trim().parse().ok()?,
    ))
}

fn prompt_direction(lines: &mut impl Iterator<Item = String>) -> Option<Direction> {
    loop {
        print!("Enter the direction (nsew): ");
        io::stdout().flush().ok();
        let line = lines.next()?;
        match line.trim().to_lowercase().chars().next() {
            Some('n') => return Some(Direction::North),
            Some('s') => return Some(Direction::South),
            Some('e') => return Some(Direction::East),
            Some('w') => return Some(Direction::West),
            _ => println!("Invalid direction. Enter nsew:"),
        }
    }
}

fn add_guard(lines: &mut impl Iterator<Item = String>, field: &mut ObstacleField) {
    if let Some(p) = prompt_point(lines, "Enter Guard's location X,Y: ") {
        field.add(Guard { x: p.x, y: p.y });
    }
}

fn add_fence(lines: &mut impl Iterator<Item = String>, field: &mut ObstacleField) {
    let Some(start) = prompt_point(lines, "Enter starting location of the Fence X,Y: ") else {
        return;
    };
    let Some(end) = prompt_point(lines, "Enter ending location of the Fence X,Y: ") else {
        return;
    };
    field.add(Fence { start, end });
}

fn add_sensor(lines: &mut impl Iterator<Item = String>, field: &mut ObstacleField) {
    let Some(p) = prompt_point(lines, "Enter Sensor's location X,Y: ") else {
        return;
    };
    loop {
        print!("Enter the sensor's range (in klicks): ");
        io::stdout().flush().ok();
        let Some(line) = lines.next() else { return };
        match line.trim().parse::<f64>() {
            Ok(range) if range > 0.0 => {
                field.add(Sensor {
                    x: p.x,
                    y: p.y,
                    range,
                });
                return;
            }
            _ => println!("Invalid range."),
        }
    }
}

fn add_camera(lines: &mut impl Iterator<Item = String>, field: &mut ObstacleField) {
    let Some(p) = prompt_point(lines, "Enter the camera's location X,Y: ") else {
        return;
    };
    let Some(facing) = prompt_direction(lines) else {
        return;
    };
    field.add(Camera {
        x: p.x,
        y: p.y,
        facing,
    });
}

fn add_laser(lines: &mut impl Iterator<Item = String>, field: &mut ObstacleField) {
    let Some(p) = prompt_point(lines, "Enter the starting location of the Laser Barrier X,Y: ")
    else {
        return;
    };
    let Some(facing) = prompt_direction(lines) else {
        return;
    };
    loop {
        print!("Enter the laser's range (in klicks): ");
        io::stdout().flush().ok();
        let Some(line) = lines.next() else { return };
        match line.trim().parse::<i32>() {
            Ok(range) if range > 0 => {
                field.add(LaserBarrier {
                    x: p.x,
                    y: p.y,
                    facing,
                    range,
                });
                return;
            }
            _ => println!("Invalid range."),
        }
    }
}

fn show_safe_directions(lines: &mut impl Iterator<Item = String>, field: &ObstacleField) {
    let Some(p) = prompt_point(lines, "Enter your current location X,Y: ") else {
        return;
    };
    println!();
    match field.analyze(p) {
        SafetyReport::Compromised => {
            println!("Agent, your location is compromised. Abort mission.");
        }
        SafetyReport::Stuck => {
            println!("You cannot safely move in any direction. Abort mission.");
        }
        SafetyReport::Safe(directions) => {
            let letters: String = directions
                .iter()
                .map(|d| d.letter().to_ascii_lowercase())
                .collect();
            println!("You can safely take any of the following directions: {}", letters);
        }
    }
    println!();
}

fn display_map(lines: &mut impl Iterator<Item = String>, field: &ObstacleField) {
    let Some(top_left) = prompt_point(lines, "Enter the location of the top-left cell of the map X,Y: ")
    else {
        return;
    };
    let Some(bottom_right) =
        prompt_point(lines, "Enter the location of the bottom-right cell of the map X,Y: ")
    else {
        return;
    };
    if bottom_right.x < top_left.x || bottom_right.y < top_left.y {
        println!("Invalid map specification.");
        return;
    }
    print!("{}", MapView::new(field, top_left, bottom_right));
}

fn find_safe_path(
    lines: &mut impl Iterator<Item = String>,
    field: &ObstacleField,
    finder: &Pathfinder,
) {
    let Some(start) = prompt_point(lines, "Enter your current location X,Y: ") else {
        return;
    };
    let Some(end) = prompt_point(lines, "Enter the location of your objective X,Y: ") else {
        return;
    };
    if start == end {
        println!("Agent, you are already at the objective.");
        return;
    }
    if field.is_compromised(end) {
        println!("The objective is blocked by an obstacle and cannot be reached.");
        return;
    }
    match finder.find_path(field, start, end) {
        PathResult::Found(moves) => {
            let path: String = moves.iter().map(|d| d.letter()).collect();
            println!("The following path will take you to the objective:");
            println!("{}", path);
        }
        PathResult::NoPath => println!("There is no safe path to the objective."),
        PathResult::Capped => println!("The search was exhausted before reaching the objective."),
    }
}
