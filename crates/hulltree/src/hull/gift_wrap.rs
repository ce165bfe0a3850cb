//! Gift-wrapping (Jarvis march) fallback used by trivial merges.

use std::cmp::Ordering;

use crate::geom::{direction, dist, Metric, Point};

/// Convex hull by gift wrapping, O(n·h). Vertices come back in clockwise
/// order starting from the lexicographically smallest point, so the upper
/// chain is emitted first, left to right. Collinear runs keep only the
/// farthest point; points within the equality tolerance of each other count
/// as one. Fewer than three points are returned as given.
pub fn gift_wrap(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut start = points[0];
    for &p in &points[1..] {
        if p.cmp_order(&start) == Ordering::Less {
            start = p;
        }
    }

    let mut hull = vec![start];
    let mut current = start;
    loop {
        let mut best: Option<Point> = None;
        for &q in points {
            if q == current {
                continue;
            }
            let Some(b) = best else {
                best = Some(q);
                continue;
            };
            let d = direction(current, b, q);
            let farther = dist(current, q, Metric::Euclidean) > dist(current, b, Metric::Euclidean);
            if d < 0.0 || (d == 0.0 && farther) {
                best = Some(q);
            }
        }
        let Some(next) = best else {
            break;
        };
        if next == start || hull.len() > points.len() {
            break;
        }
        hull.push(next);
        current = next;
    }
    hull
}
