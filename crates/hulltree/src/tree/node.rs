//! Ordered binary tree core over an index arena.

/// Index of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// One tree node: payload, exclusively-held child links, cached height.
/// A leaf has height 0; a node with any child has height one above its
/// tallest present child, an absent child counting as height 0.
#[derive(Clone, Debug)]
pub struct BinNode<T> {
    pub data: T,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub height: usize,
}

impl<T> BinNode<T> {
    fn leaf(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
            height: 0,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Binary tree over an arena of nodes. Slots freed by deletion are recycled
/// through a free list; freed slots are unreachable from the root and keep
/// their stale payload until reuse.
#[derive(Clone, Debug)]
pub struct BinTree<T> {
    nodes: Vec<BinNode<T>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
}

impl<T> Default for BinTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
        }
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline]
    pub fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Arena slot count, including freed slots. Sizes overlay tables.
    #[inline]
    pub(crate) fn slots(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &BinNode<T> {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut BinNode<T> {
        &mut self.nodes[id.0]
    }

    #[inline]
    pub fn data(&self, id: NodeId) -> &T {
        &self.nodes[id.0].data
    }

    #[inline]
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].left
    }

    #[inline]
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].right
    }

    #[inline]
    pub fn height(&self, id: NodeId) -> usize {
        self.nodes[id.0].height
    }

    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).is_leaf()
    }

    /// Allocate a detached leaf.
    pub fn push(&mut self, data: T) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = BinNode::leaf(data);
                id
            }
            None => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(BinNode::leaf(data));
                id
            }
        }
    }

    pub fn set_children(&mut self, id: NodeId, left: Option<NodeId>, right: Option<NodeId>) {
        let node = self.get_mut(id);
        node.left = left;
        node.right = right;
    }

    /// Return a slot to the free list. The caller must have unlinked it.
    pub(crate) fn release(&mut self, id: NodeId) {
        self.free.push(id);
    }

    /// Leftmost descendant of `id`.
    pub fn leftmost(&self, id: NodeId) -> NodeId {
        let mut id = id;
        while let Some(l) = self.left(id) {
            id = l;
        }
        id
    }

    /// Rightmost descendant of `id`.
    pub fn rightmost(&self, id: NodeId) -> NodeId {
        let mut id = id;
        while let Some(r) = self.right(id) {
            id = r;
        }
        id
    }

    /// Right height minus left height, absent children counting 0.
    pub fn balance_factor(&self, id: NodeId) -> i32 {
        let lh = self.left(id).map_or(0, |l| self.height(l)) as i32;
        let rh = self.right(id).map_or(0, |r| self.height(r)) as i32;
        rh - lh
    }

    /// Recompute the cached height from the children's cached heights.
    pub fn update_height(&mut self, id: NodeId) {
        let node = self.get(id);
        let h = if node.is_leaf() {
            0
        } else {
            let lh = node.left.map_or(0, |l| self.height(l));
            let rh = node.right.map_or(0, |r| self.height(r));
            1 + lh.max(rh)
        };
        self.get_mut(id).height = h;
    }

    /// Overwrite `destination`'s payload and cached height with `source`'s,
    /// leaving both nodes' children untouched. Used by deletion to splice in
    /// an inorder successor without altering subtree shape.
    pub fn copy_contents_without_children(&mut self, source: NodeId, destination: NodeId)
    where
        T: Clone,
    {
        if source == destination {
            return;
        }
        let (data, height) = {
            let s = self.get(source);
            (s.data.clone(), s.height)
        };
        let d = self.get_mut(destination);
        d.data = data;
        d.height = height;
    }

    /// Inorder node sequence (explicit stack, no recursion).
    pub fn inorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = Vec::new();
        let mut cur = self.root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.left(id);
            }
            if let Some(id) = stack.pop() {
                out.push(id);
                cur = self.right(id);
            }
        }
        out
    }

    /// Preorder node sequence.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = Vec::new();
        if let Some(r) = self.root {
            stack.push(r);
        }
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(r) = self.right(id) {
                stack.push(r);
            }
            if let Some(l) = self.left(id) {
                stack.push(l);
            }
        }
        out
    }

    /// Postorder node sequence (reversed right-first preorder).
    pub fn postorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = Vec::new();
        if let Some(r) = self.root {
            stack.push(r);
        }
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(l) = self.left(id) {
                stack.push(l);
            }
            if let Some(r) = self.right(id) {
                stack.push(r);
            }
        }
        out.reverse();
        out
    }

    pub fn leaves_inorder(&self) -> Vec<NodeId> {
        self.inorder().into_iter().filter(|&id| self.is_leaf(id)).collect()
    }

    pub fn leaves_preorder(&self) -> Vec<NodeId> {
        self.preorder().into_iter().filter(|&id| self.is_leaf(id)).collect()
    }

    pub fn leaves_postorder(&self) -> Vec<NodeId> {
        self.postorder().into_iter().filter(|&id| self.is_leaf(id)).collect()
    }
}

impl<T: Clone> BinTree<T> {
    /// Balanced tree by recursive medial split: the middle element of each
    /// subrange becomes the node. Deterministic shape, logarithmic height.
    pub fn from_sorted(items: &[T]) -> Self {
        let mut tree = Self::new();
        tree.root = tree.build_range(items);
        tree
    }

    fn build_range(&mut self, items: &[T]) -> Option<NodeId> {
        if items.is_empty() {
            return None;
        }
        let mid = (items.len() - 1) / 2;
        let id = self.push(items[mid].clone());
        let left = self.build_range(&items[..mid]);
        let right = self.build_range(&items[mid + 1..]);
        self.set_children(id, left, right);
        self.update_height(id);
        Some(id)
    }
}

impl<T: PartialEq> BinTree<T> {
    /// Weak equality: payloads of the two nodes only, no structure.
    pub fn weak_eq(&self, id: NodeId, other: &Self, other_id: NodeId) -> bool {
        self.data(id) == other.data(other_id)
    }

    /// Strong equality: payloads and shape of both entire subtrees.
    pub fn subtree_eq(
        &self,
        id: Option<NodeId>,
        other: &Self,
        other_id: Option<NodeId>,
    ) -> bool {
        let mut stack = vec![(id, other_id)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if self.data(a) != other.data(b) {
                        return false;
                    }
                    stack.push((self.left(a), other.left(b)));
                    stack.push((self.right(a), other.right(b)));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: PartialEq> PartialEq for BinTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(self.root, other, other.root)
    }
}
