//! Mergeable upper convex hulls over balanced threaded trees.
//!
//! The crate keeps the upper hull of a planar point set in a merge tree:
//! every node owns the upper hull of the points below it (a "subhull"), and
//! two adjacent subhulls combine through a tangent walk that finds their
//! common supporting line. Construction is a single bottom-up pass over the
//! sorted points; a final compression pass trims each subhull down to the
//! points not already covered by its parent.
//!
//! Layout
//! - `geom`: points, lines, orientation predicates, deterministic clouds.
//! - `tree`: arena-backed binary tree core, AVL mutation, inorder threading.
//! - `hull`: classification oracle, gift-wrapping fallback, merge engine.

pub mod error;
pub mod geom;
pub mod hull;
pub mod tree;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geom::{GeomCfg, Line2D, Metric, Point};
pub use hull::{upper_hull, HullTree};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom::rand::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::geom::{direction, GeomCfg, Line2D, Metric, Point};
    pub use crate::hull::{gift_wrap, upper_hull, HullTree};
    pub use crate::tree::{BinTree, NodeId, ThreadedTree};
}
