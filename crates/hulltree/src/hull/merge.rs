//! Dynamic hull merge engine.
//!
//! The merge tree is built bottom-up over the sorted points: every node owns
//! the upper hull of its subtree as a threaded chain (its subhull), and two
//! sibling subhulls combine either through the gift-wrap fallback (single
//! points and segments) or through a tangent walk that descends both chains'
//! trees toward their common supporting line. A final compression pass trims
//! each subhull down to the points not already stored by its parent, which
//! bounds total storage at O(n log n).

use crate::error::{Error, Result};
use crate::geom::{direction, Point};
use crate::hull::classify::{classify, PointType};
use crate::hull::gift_wrap::gift_wrap;
use crate::tree::{BinTree, NodeId, ThreadedTree};

/// Upper-hull chain of one subtree, threaded for O(1) neighbor access.
/// Always linear (non-circular): the tangent walk relies on the boundary
/// links being absent.
pub type SubHull = ThreadedTree<Point>;

/// Payload of one merge-tree node.
#[derive(Clone, Debug)]
pub struct HullPayload {
    /// Split marker: the rightmost point of the node's left subtree. Not
    /// necessarily a hull vertex.
    pub point: Point,
    /// Upper hull of the points under this node.
    pub subhull: SubHull,
    /// Index of the left child's tangent point within the subhull chain.
    pub left_supporting_index: usize,
}

/// Merge tree whose nodes own the upper hulls of their subtrees.
#[derive(Clone, Debug, Default)]
pub struct HullTree {
    tree: BinTree<HullPayload>,
}

impl HullTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the merge tree for `points` (any order; sorted internally) and
    /// run the subhull compression pass. An empty slice gives an empty tree.
    pub fn build(points: &[Point]) -> Result<Self> {
        let mut sorted = points.to_vec();
        sorted.sort_by(Point::cmp_order);

        let mut hull = HullTree::new();
        if sorted.is_empty() {
            return Ok(hull);
        }
        let root = hull.build_range(&sorted)?;
        hull.tree.set_root(Some(root));
        hull.compress();
        Ok(hull)
    }

    fn build_range(&mut self, points: &[Point]) -> Result<NodeId> {
        if points.len() == 1 {
            return Ok(self.leaf(points[0]));
        }
        let n_right = points.len() / 2;
        let n_left = points.len() - n_right;
        let left = self.build_range(&points[..n_left])?;
        let right = self.build_range(&points[n_left..])?;
        self.merge(left, right)
    }

    /// A detached leaf node holding a single point.
    pub fn leaf(&mut self, point: Point) -> NodeId {
        self.tree.push(HullPayload {
            point,
            subhull: SubHull::from_sorted(&[point], false),
            left_supporting_index: 0,
        })
    }

    /// Merge two sibling subtrees covering adjacent point ranges (`left`
    /// strictly precedes `right` in x order) into a joint node. Ownership of
    /// both inputs transfers to the new node; nothing is copied.
    pub fn merge(&mut self, left: NodeId, right: NodeId) -> Result<NodeId> {
        if self.is_point(left)
            || self.is_point(right)
            || self.is_segment(left)
            || self.is_segment(right)
        {
            return self.merge_trivial(left, right);
        }

        let sh1 = &self.tree.data(left).subhull;
        let sh2 = &self.tree.data(right).subhull;
        let (stop1, stop2) = tangent_walk(sh1, sh2)?;
        let ids1 = sh1.inorder();
        let ids2 = sh2.inorder();
        let pos1 = ids1
            .iter()
            .position(|&i| i == stop1)
            .ok_or(Error::TangentWalkOverrun)?;
        let pos2 = ids2
            .iter()
            .position(|&i| i == stop2)
            .ok_or(Error::TangentWalkOverrun)?;

        // Left chain through its tangent point, then the right chain from its
        // tangent point on.
        let mut chain: Vec<Point> = ids1[..=pos1].iter().map(|&i| *sh1.tree().data(i)).collect();
        chain.extend(ids2[pos2..].iter().map(|&i| *sh2.tree().data(i)));

        Ok(self.attach(left, right, chain, pos1))
    }

    /// Merge via the gift-wrapping fallback. Only reached when one side is a
    /// single point or a two-point segment, where the tangent walk has no
    /// chain to descend.
    fn merge_trivial(&mut self, left: NodeId, right: NodeId) -> Result<NodeId> {
        let points1 = self.tree.data(left).subhull.chain();
        let points2 = self.tree.data(right).subhull.chain();
        // Both chains are x-sorted and left precedes right, so the pool is
        // sorted as a whole.
        let mut pool = points1.clone();
        pool.extend_from_slice(&points2);
        let first = pool[0];
        let last = pool[pool.len() - 1];

        let mut chain = Vec::with_capacity(pool.len());
        let vertical_pair = pool.len() == 2 && pool[0].x == pool[1].x;
        if !vertical_pair {
            // A vertical two-point pool keeps only its upper point; anything
            // else keeps both pooled endpoints as chain ends.
            chain.push(first);
        }
        chain.extend(
            gift_wrap(&pool)
                .into_iter()
                .filter(|&p| direction(first, last, p) < 0.0),
        );
        chain.push(last);

        let supporting = if chain.len() == 1 {
            0
        } else {
            // Last left-pool point surviving into the merged chain. The first
            // pooled point always survives, so the reverse scan cannot miss.
            points1
                .iter()
                .rev()
                .find_map(|p| chain.iter().position(|q| q == p))
                .unwrap_or(0)
        };
        Ok(self.attach(left, right, chain, supporting))
    }

    fn attach(
        &mut self,
        left: NodeId,
        right: NodeId,
        chain: Vec<Point>,
        supporting: usize,
    ) -> NodeId {
        let marker = {
            let rm = self.tree.rightmost(left);
            self.tree.data(rm).point
        };
        let id = self.tree.push(HullPayload {
            point: marker,
            subhull: SubHull::from_sorted(&chain, false),
            left_supporting_index: supporting,
        });
        self.tree.set_children(id, Some(left), Some(right));
        self.tree.update_height(id);
        id
    }

    /// Subhull is a single point.
    pub fn is_point(&self, id: NodeId) -> bool {
        let sh = &self.tree.data(id).subhull;
        sh.root().is_some_and(|r| sh.tree().is_leaf(r))
    }

    /// Subhull is a two-point segment.
    pub fn is_segment(&self, id: NodeId) -> bool {
        let sh = &self.tree.data(id).subhull;
        let Some(r) = sh.root() else {
            return false;
        };
        sh.tree().left(r).is_none()
            && sh
                .tree()
                .right(r)
                .is_some_and(|c| sh.tree().is_leaf(c))
    }

    /// Drop from every non-root subhull the points already stored in its
    /// parent's subhull, keeping only the increment private to that subtree.
    fn compress(&mut self) {
        if let Some(root) = self.tree.root() {
            self.compress_below(root, None);
        }
    }

    fn compress_below(&mut self, id: NodeId, parent: Option<NodeId>) {
        if let Some(left) = self.tree.left(id) {
            self.compress_below(left, Some(id));
        }
        if let Some(right) = self.tree.right(id) {
            self.compress_below(right, Some(id));
        }
        if let Some(parent) = parent {
            let covered = self.tree.data(parent).subhull.chain();
            let own = self.tree.data(id).subhull.chain();
            let kept: Vec<Point> = own.into_iter().filter(|p| !covered.contains(p)).collect();
            self.tree.get_mut(id).data.subhull = SubHull::from_sorted(&kept, false);
        }
    }

    /// Extension point for incremental insertion: intended to rebuild only
    /// the O(log n) ancestor subhulls of the new point. Not implemented; the
    /// call deliberately leaves the tree unchanged.
    pub fn insert(&mut self, _point: Point) {}

    /// Extension point for incremental deletion. Same contract as
    /// [`HullTree::insert`]: declared interface, no mutation.
    pub fn remove(&mut self, _point: Point) {}

    /// The upper hull: inorder point sequence of the root subhull.
    pub fn hull(&self) -> Vec<Point> {
        match self.tree.root() {
            Some(root) => self.tree.data(root).subhull.chain(),
            None => Vec::new(),
        }
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    #[inline]
    pub fn tree(&self) -> &BinTree<HullPayload> {
        &self.tree
    }
}

/// Build the upper hull of `points`. The optional `toggle` point routes to
/// the incremental extension points: removal if it is (approximately)
/// present in the input, insertion otherwise.
pub fn upper_hull(points: &[Point], toggle: Option<Point>) -> Result<Vec<Point>> {
    let mut tree = HullTree::build(points)?;
    if let Some(p) = toggle {
        if points.iter().any(|q| *q == p) {
            tree.remove(p);
        } else {
            tree.insert(p);
        }
    }
    Ok(tree.hull())
}

/// Walk both subhull trees toward their common supporting line, advancing
/// each pointer by its side's step table until neither moves. Returns the
/// stabilized (left, right) nodes.
fn tangent_walk(left: &SubHull, right: &SubHull) -> Result<(NodeId, NodeId)> {
    let (Some(mut n1), Some(mut n2)) = (left.root(), right.root()) else {
        return Err(Error::TangentWalkOverrun);
    };
    // Every move descends one tree level, so the walk stabilizes well within
    // the combined node count.
    let budget = left.len() + right.len() + 2;
    for _ in 0..budget {
        let ty1 = classify_in_chain(point_of(right, n2), left, n1)?;
        let ty2 = classify_in_chain(point_of(left, n1), right, n2)?;
        let m1 = step_left(left, n1, ty1)?;
        let m2 = step_right(right, n2, ty2)?;
        if m1 == n1 && m2 == n2 {
            return Ok((n1, n2));
        }
        n1 = m1;
        n2 = m2;
    }
    Err(Error::TangentWalkDiverged)
}

#[inline]
fn point_of(sh: &SubHull, id: NodeId) -> Point {
    *sh.tree().data(id)
}

fn classify_in_chain(source: Point, sh: &SubHull, id: NodeId) -> Result<PointType> {
    let prev = sh.prev(id).map(|i| point_of(sh, i));
    let next = sh.next(id).map(|i| point_of(sh, i));
    classify(source, point_of(sh, id), prev, next)
}

/// Step table for the left chain's pointer: the tangent point lies rightward
/// of a reflex node and leftward of a convex one.
fn step_left(sh: &SubHull, id: NodeId, ty: PointType) -> Result<NodeId> {
    match ty {
        PointType::Reflex => sh.tree().right(id).ok_or(Error::TangentWalkOverrun),
        PointType::RightSupporting => Ok(id),
        PointType::Convex => sh.tree().left(id).ok_or(Error::TangentWalkOverrun),
        PointType::LeftSupporting => Err(Error::TangentWalkOverrun),
    }
}

/// Step table for the right chain's pointer, mirror of [`step_left`].
fn step_right(sh: &SubHull, id: NodeId, ty: PointType) -> Result<NodeId> {
    match ty {
        PointType::Reflex => sh.tree().left(id).ok_or(Error::TangentWalkOverrun),
        PointType::LeftSupporting => Ok(id),
        PointType::Convex => sh.tree().right(id).ok_or(Error::TangentWalkOverrun),
        PointType::RightSupporting => Err(Error::TangentWalkOverrun),
    }
}
