//! Binary trees over an index arena.
//!
//! Purpose
//! - `node`: the ordered tree core (arena storage, medial-split construction,
//!   iterative traversals, structural equality).
//! - `avl`: height-balanced insert/remove on top of the core.
//! - `threaded`: inorder neighbor links as a non-owning overlay table.
//!
//! Child links are exclusively held (no two live nodes share a child); all
//! cross-references that are not ownership edges are plain `NodeId` indices.

mod avl;
mod node;
mod threaded;

pub use node::{BinNode, BinTree, NodeId};
pub use threaded::ThreadedTree;
