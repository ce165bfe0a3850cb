//! Local point classification for the tangent walk.

use std::f64::consts::PI;

use crate::error::{Error, Result};
use crate::geom::{direction, nonnegative_polar_angle, Point};

/// Local convexity of a chain point relative to a source point on the
/// opposite chain. Each variant maps to one move of the tangent walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointType {
    Convex,
    Reflex,
    LeftSupporting,
    RightSupporting,
}

/// Classify `target` (with chain neighbors `prev` and `next`) as seen from
/// `source`. Boundary nodes classify by the orientation sign against their
/// single neighbor, branched on which side of the merge the source lies;
/// interior nodes by both neighbors' polar angles in the frame where the ray
/// target→source is angle zero.
pub fn classify(
    source: Point,
    target: Point,
    prev: Option<Point>,
    next: Option<Point>,
) -> Result<PointType> {
    match (prev, next) {
        (None, None) => Err(Error::IsolatedChainNode),
        (None, Some(next)) => {
            let d = direction(source, target, next);
            Ok(if source.x < target.x {
                if d > 0.0 {
                    PointType::LeftSupporting
                } else {
                    PointType::Convex
                }
            } else if d >= 0.0 {
                PointType::RightSupporting
            } else {
                PointType::Reflex
            })
        }
        (Some(prev), None) => {
            let d = direction(source, target, prev);
            Ok(if source.x < target.x {
                if d >= 0.0 {
                    PointType::LeftSupporting
                } else {
                    PointType::Reflex
                }
            } else if d > 0.0 {
                PointType::RightSupporting
            } else {
                PointType::Convex
            })
        }
        (Some(prev), Some(next)) => classify_interior(source, target, prev, next),
    }
}

fn classify_interior(source: Point, target: Point, prev: Point, next: Point) -> Result<PointType> {
    // Neighbor angles in [0, 2π), measured in the frame rotated so that the
    // ray target→source sits at angle zero.
    let rotated = |p: Point| {
        let rot = nonnegative_polar_angle(source, target);
        let a = nonnegative_polar_angle(p, target);
        a - rot + if a < rot { 2.0 * PI } else { 0.0 }
    };
    let (a, b) = (rotated(prev), rotated(next));
    let mut angle1 = a.min(b);
    let mut angle2 = a.max(b);

    let convex_or_reflex = 0.0 < angle1 && angle1 <= PI && PI <= angle2 && angle2 < 2.0 * PI;
    if convex_or_reflex && angle2 < angle1 + PI {
        return Ok(PointType::Convex);
    }
    if convex_or_reflex && angle2 > angle1 + PI {
        return Ok(PointType::Reflex);
    }
    if 0.0 <= angle1 && angle1 < angle2 && angle2 < PI {
        return Ok(PointType::LeftSupporting);
    }
    if angle1 == 0.0 {
        // The zero angle wraps to 2π; the other neighbor takes its place.
        angle1 = angle2;
        angle2 = 2.0 * PI;
    }
    if PI < angle1 && angle1 < angle2 && angle2 <= 2.0 * PI {
        return Ok(PointType::RightSupporting);
    }
    Err(Error::Unclassifiable { angle1, angle2 })
}
