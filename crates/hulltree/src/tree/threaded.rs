//! Inorder threading: non-owning neighbor links over a balanced tree.

use super::node::{BinTree, NodeId};

#[derive(Clone, Copy, Debug, Default)]
struct Links {
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A balanced tree plus a parallel link table giving O(1) neighbor access
/// along the inorder sequence. A node's `prev` reuses its left child when
/// present and otherwise points at its inorder predecessor; symmetrically
/// for `next`. Circular mode wraps the boundary links to the opposite end;
/// linear mode leaves them empty. The links are navigation aids, never
/// ownership edges.
#[derive(Clone, Debug)]
pub struct ThreadedTree<T> {
    tree: BinTree<T>,
    links: Vec<Links>,
}

impl<T: Clone> ThreadedTree<T> {
    /// Balanced medial-split tree over `items`, threaded in one inorder pass.
    pub fn from_sorted(items: &[T], circular: bool) -> Self {
        let tree = BinTree::from_sorted(items);
        let ids = tree.inorder();
        let mut links = vec![Links::default(); tree.slots()];
        let n = ids.len();
        for (i, &id) in ids.iter().enumerate() {
            let prev = tree.left(id).or(Some(ids[(i + n - 1) % n]));
            let next = tree.right(id).or(Some(ids[(i + 1) % n]));
            links[id.0] = Links { prev, next };
        }
        if !circular && n > 0 {
            links[ids[0].0].prev = None;
            links[ids[n - 1].0].next = None;
        }
        Self { tree, links }
    }
}

impl<T> ThreadedTree<T> {
    #[inline]
    pub fn tree(&self) -> &BinTree<T> {
        &self.tree
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.links[id.0].prev
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.links[id.0].next
    }

    /// First node of the inorder sequence.
    pub fn first(&self) -> Option<NodeId> {
        self.root().map(|r| self.tree.leftmost(r))
    }

    /// Last node of the inorder sequence.
    pub fn last(&self) -> Option<NodeId> {
        self.root().map(|r| self.tree.rightmost(r))
    }

    /// Inorder node sequence of the underlying tree.
    pub fn inorder(&self) -> Vec<NodeId> {
        self.tree.inorder()
    }
}

impl<T: Clone> ThreadedTree<T> {
    /// Inorder payload sequence.
    pub fn chain(&self) -> Vec<T> {
        self.inorder()
            .into_iter()
            .map(|id| self.tree.data(id).clone())
            .collect()
    }
}
