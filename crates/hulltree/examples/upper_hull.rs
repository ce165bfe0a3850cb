//! Upper-hull construction end to end on a small fixed point set.
//!
//! Purpose
//! - Show the construction entry point and give a quick wall-clock data
//!   point without pulling in the bench harness.

use std::time::Instant;

use hulltree::upper_hull;
use hulltree::Point;

fn main() {
    let points: Vec<Point> = [
        (0.0, 26.0),
        (1.0, 2.0),
        (1.0, 23.0),
        (9.0, 29.0),
        (13.0, 32.0),
        (14.0, 26.0),
        (14.0, 32.0),
        (15.0, 27.0),
        (18.0, 11.0),
        (18.0, 20.0),
        (19.0, 7.0),
        (20.0, 35.0),
        (24.0, 4.0),
        (27.0, 25.0),
        (31.0, 2.0),
        (35.0, 12.0),
    ]
    .into_iter()
    .map(|(x, y)| Point::new(x, y))
    .collect();

    let start = Instant::now();
    let hull = upper_hull(&points, None).expect("generic-position input");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;

    println!("input points: {}", points.len());
    println!("hull vertices ({elapsed:.3} ms):");
    for p in &hull {
        println!("  {p}");
    }
}
