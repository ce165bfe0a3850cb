//! Failure taxonomy for the hull core.
//!
//! Two classes only: invalid arguments caught at construction boundaries, and
//! domain errors that signal an upstream invariant violation (a non-hull chain
//! fed to the classification oracle or the tangent walk). Domain errors must
//! propagate; the algorithms are deterministic, so there is nothing to retry.

use thiserror::Error;

use crate::geom::Point;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A 2D line needs two distinct defining points.
    #[error("2D line requires two distinct points, got {0} twice")]
    DegenerateLine(Point),

    /// A metric name that maps to no known p-norm.
    #[error("unknown metric \"{0}\"")]
    UnknownMetric(String),

    /// The classification oracle hit an angle configuration outside its four
    /// defined cases. Only possible when the input chain is not an upper hull.
    #[error("unclassifiable point configuration (angles {angle1}, {angle2})")]
    Unclassifiable { angle1: f64, angle2: f64 },

    /// A chain node with no neighbor on either side cannot be classified.
    #[error("chain node has no neighbors to classify against")]
    IsolatedChainNode,

    /// The tangent walk was told to step into a missing child.
    #[error("tangent walk stepped outside the subhull chain")]
    TangentWalkOverrun,

    /// The tangent walk exceeded its step budget without stabilizing.
    #[error("tangent walk did not converge")]
    TangentWalkDiverged,
}
