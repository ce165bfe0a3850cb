//! Free functions over points and vectors: orientation, angles, distances.

use nalgebra::Vector2;

use super::types::{Line2D, Metric, Point};
use crate::error::{Error, Result};

/// Arithmetic mean of a non-empty point set.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Interior angle at `p2` formed by `p1` and `p3`, in radians.
pub fn angle(p1: Point, p2: Point, p3: Point) -> f64 {
    let v1 = p2.vector_to(p1).normalize();
    let v2 = p2.vector_to(p3).normalize();
    v1.dot(&v2).clamp(-1.0, 1.0).acos()
}

/// Polar angle of `point` as seen from `origin`, in (−π, π].
#[inline]
pub fn polar_angle(point: Point, origin: Point) -> f64 {
    (point.y - origin.y).atan2(point.x - origin.x)
}

/// Polar angle shifted into [0, 2π).
#[inline]
pub fn nonnegative_polar_angle(point: Point, origin: Point) -> f64 {
    let a = polar_angle(point, origin);
    if a >= 0.0 {
        a
    } else {
        2.0 * std::f64::consts::PI + a
    }
}

/// Core orientation predicate: the scalar cross product of (p1→p3) and
/// (p1→p2). Positive means `p2` lies clockwise of the p1→p3 direction.
#[inline]
pub fn direction(p1: Point, p2: Point, p3: Point) -> f64 {
    p1.vector_to(p3).perp(&p1.vector_to(p2))
}

/// Vector norm under the chosen metric.
pub fn norm(v: Vector2<f64>, metric: Metric) -> f64 {
    match metric {
        Metric::Manhattan => v.x.abs() + v.y.abs(),
        Metric::Euclidean => v.norm(),
        Metric::Chebyshev => v.x.abs().max(v.y.abs()),
    }
}

/// Unit vector under the chosen metric, or None for a (near-)zero vector.
pub fn normalized(v: Vector2<f64>, metric: Metric) -> Option<Vector2<f64>> {
    let n = norm(v, metric);
    if n.is_finite() && n > 0.0 {
        Some(v / n)
    } else {
        None
    }
}

/// Point-to-point distance under the chosen metric.
pub fn dist(p: Point, q: Point, metric: Metric) -> f64 {
    norm(p.vector_to(q), metric)
}

/// Point-to-line distance. Supported metrics: euclidean and manhattan
/// (the uniform-denominator form); chebyshev has no line variant.
pub fn dist_to_line(p: Point, line: &Line2D, metric: Metric) -> Result<f64> {
    let (a, b, c) = (line.a(), line.b(), line.c());
    let denominator = match metric {
        Metric::Euclidean => (a * a + b * b).sqrt(),
        Metric::Manhattan => a.abs().max(b.abs()),
        Metric::Chebyshev => return Err(Error::UnknownMetric("chebyshev".to_owned())),
    };
    Ok((a * p.x + b * p.y + c).abs() / denominator)
}
