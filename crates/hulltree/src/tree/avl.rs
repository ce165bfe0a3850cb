//! Height-balanced insert and remove over the tree core.
//!
//! Standard AVL maintenance: recurse by comparison, recompute heights on the
//! way back up, and rotate wherever the balance factor leaves {−1, 0, 1}.
//! Both operations are total over empty and non-empty trees.

use std::cmp::Ordering;

use super::node::{BinTree, NodeId};

impl<T: Ord + Clone> BinTree<T> {
    /// Insert `data` at its ordered position, keeping the tree balanced.
    /// Equal payloads go to the right.
    pub fn insert(&mut self, data: T) {
        let root = self.root();
        let new_root = self.insert_at(root, data);
        self.set_root(Some(new_root));
    }

    /// Remove the first node matching `data` on the search path, if any,
    /// keeping the tree balanced.
    pub fn remove(&mut self, data: &T) {
        let root = self.root();
        let new_root = self.remove_at(root, data);
        self.set_root(new_root);
    }

    fn insert_at(&mut self, node: Option<NodeId>, data: T) -> NodeId {
        let Some(id) = node else {
            return self.push(data);
        };
        if data < *self.data(id) {
            let left = self.left(id);
            let left = self.insert_at(left, data);
            self.get_mut(id).left = Some(left);
        } else {
            let right = self.right(id);
            let right = self.insert_at(right, data);
            self.get_mut(id).right = Some(right);
        }
        self.update_height(id);
        self.rebalance(id)
    }

    fn remove_at(&mut self, node: Option<NodeId>, data: &T) -> Option<NodeId> {
        let id = node?;
        match data.cmp(self.data(id)) {
            Ordering::Less => {
                let left = self.left(id);
                let left = self.remove_at(left, data);
                self.get_mut(id).left = left;
            }
            Ordering::Greater => {
                let right = self.right(id);
                let right = self.remove_at(right, data);
                self.get_mut(id).right = right;
            }
            Ordering::Equal => match (self.left(id), self.right(id)) {
                (None, child) | (child, None) => {
                    self.release(id);
                    return child;
                }
                (Some(_), Some(right)) => {
                    // Replace this node's contents with its inorder successor,
                    // then delete the successor from the right subtree.
                    let successor = self.leftmost(right);
                    let successor_data = self.data(successor).clone();
                    self.copy_contents_without_children(successor, id);
                    let right = self.remove_at(Some(right), &successor_data);
                    self.get_mut(id).right = right;
                }
            },
        }
        self.update_height(id);
        Some(self.rebalance(id))
    }

    fn rebalance(&mut self, id: NodeId) -> NodeId {
        match self.balance_factor(id) {
            -2 => {
                if let Some(left) = self.left(id) {
                    if self.balance_factor(left) == 1 {
                        let left = self.rotate_left(left);
                        self.get_mut(id).left = Some(left);
                    }
                }
                self.rotate_right(id)
            }
            2 => {
                if let Some(right) = self.right(id) {
                    if self.balance_factor(right) == -1 {
                        let right = self.rotate_right(right);
                        self.get_mut(id).right = Some(right);
                    }
                }
                self.rotate_left(id)
            }
            _ => id,
        }
    }

    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let Some(heavy) = self.right(id) else {
            return id;
        };
        let swapped = self.left(heavy);
        self.get_mut(heavy).left = Some(id);
        self.get_mut(id).right = swapped;
        self.update_height(id);
        self.update_height(heavy);
        heavy
    }

    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let Some(heavy) = self.left(id) else {
            return id;
        };
        let swapped = self.right(heavy);
        self.get_mut(heavy).right = Some(id);
        self.get_mut(id).left = swapped;
        self.update_height(id);
        self.update_height(heavy);
        heavy
    }
}
