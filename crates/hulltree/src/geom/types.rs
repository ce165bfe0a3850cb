//! Point, metric, and line value types plus the shared tolerance config.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::{Error, Result};

/// Absolute per-coordinate tolerance for point equality.
pub(crate) const EPS_POINT: f64 = 1e-3;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Absolute tolerance under which two coordinates compare equal.
    pub eps_point: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_point: EPS_POINT,
        }
    }
}

/// A planar point. Equality is approximate (absolute tolerance per
/// coordinate); the total order used for sorting is `cmp_order`, kept
/// separate so the tolerance cannot poison comparator consistency.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn coords(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Displacement vector from `self` to `other`.
    #[inline]
    pub fn vector_to(self, other: Point) -> Vector2<f64> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    #[inline]
    pub fn approx_eq_eps(self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    #[inline]
    pub fn approx_eq(self, other: Point) -> bool {
        self.approx_eq_eps(other, EPS_POINT)
    }

    /// Total lexicographic order on (x, y). NaN coordinates compare equal,
    /// matching the sort used when building hulls.
    pub fn cmp_order(&self, other: &Point) -> Ordering {
        match self.x.partial_cmp(&other.x).unwrap_or(Ordering::Equal) {
            Ordering::Equal => self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal),
            o => o,
        }
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// p-norm selector. The distance names (manhattan, euclidean, chebyshev) and
/// the vector-norm names (octahedral, euclidean, cubic) parse to the same
/// three variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "manhattan" | "octahedral" => Ok(Metric::Manhattan),
            "euclidean" => Ok(Metric::Euclidean),
            "chebyshev" | "cubic" => Ok(Metric::Chebyshev),
            other => Err(Error::UnknownMetric(other.to_owned())),
        }
    }
}

/// A 2D line through two distinct points, with implicit-form coefficients
/// `a x + b y + c = 0`. Vertical lines report slope and intercept as −∞.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2D {
    point1: Point,
    point2: Point,
}

impl Line2D {
    pub fn new(point1: Point, point2: Point) -> Result<Self> {
        if point1 == point2 {
            return Err(Error::DegenerateLine(point1));
        }
        Ok(Self { point1, point2 })
    }

    #[inline]
    pub fn point1(&self) -> Point {
        self.point1
    }

    #[inline]
    pub fn point2(&self) -> Point {
        self.point2
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.point1.y - self.point2.y
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.point2.x - self.point1.x
    }

    #[inline]
    pub fn c(&self) -> f64 {
        self.point1.x * self.point2.y - self.point2.x * self.point1.y
    }

    pub fn slope(&self) -> f64 {
        if self.b() == 0.0 {
            f64::NEG_INFINITY
        } else {
            -self.a() / self.b()
        }
    }

    pub fn y_intercept(&self) -> f64 {
        if self.b() == 0.0 {
            f64::NEG_INFINITY
        } else {
            -self.c() / self.b()
        }
    }
}
