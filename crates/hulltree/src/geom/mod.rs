//! Planar primitives used by the hull structures.
//!
//! Purpose
//! - Provide the point/line value types and the orientation predicates the
//!   merge engine is built on, with one shared equality tolerance
//!   (`GeomCfg`) so hull comparisons absorb floating round-off.
//! - Vectors are plain `nalgebra::Vector2<f64>`; metric-parameterized norms
//!   live in `ops`.

mod ops;
pub mod rand;
mod types;

pub use ops::{
    angle, centroid, direction, dist, dist_to_line, nonnegative_polar_angle, norm, normalized,
    polar_angle,
};
pub use types::{GeomCfg, Line2D, Metric, Point};
