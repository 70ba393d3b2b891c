//! Arena-based district BST.
//!
//! Nodes are stored in a flat `Vec` slot arena and referenced by `NodeId`.
//! Freed slots are recycled. The tree is never rebalanced: ascending
//! insertion order degrades it to a chain, which is accepted.

use serde::Serialize;
use smallvec::SmallVec;

use super::node::{NodeId, TreeNode};
use crate::people::{District, DistrictId};

/// The parent slot a node hangs from.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// Binary search tree of districts keyed by `DistrictId`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DistrictTree {
    slots: Vec<Option<TreeNode>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl DistrictTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, if the tree is non-empty.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Get a live node by ID.
    ///
    /// Panics if `id` refers to a freed slot.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        self.slots[id.index()]
            .as_ref()
            .expect("NodeId refers to a freed slot")
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        self.slots[id.index()]
            .as_mut()
            .expect("NodeId refers to a freed slot")
    }

    /// Number of districts in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn alloc(&mut self, node: TreeNode) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId::new(self.slots.len() as u32);
                self.slots.push(Some(node));
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) -> TreeNode {
        let node = self.slots[id.index()]
            .take()
            .expect("NodeId refers to a freed slot");
        self.free.push(id);
        self.len -= 1;
        node
    }

    fn set_slot(&mut self, slot: Slot, child: Option<NodeId>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Left(parent) => self.node_mut(parent).left = child,
            Slot::Right(parent) => self.node_mut(parent).right = child,
        }
    }

    /// Insert a district.
    ///
    /// Descends left on smaller ids and right on larger ones, filling the
    /// first empty child slot. An id already in the tree is handed back
    /// unchanged in `Err`.
    pub fn insert(&mut self, district: District) -> Result<NodeId, District> {
        let id = district.id();
        let mut slot = Slot::Root;
        let mut current = self.root;

        while let Some(node_id) = current {
            let node = self.node(node_id);
            let here = node.district.id();
            if id < here {
                slot = Slot::Left(node_id);
                current = node.left;
            } else if id > here {
                slot = Slot::Right(node_id);
                current = node.right;
            } else {
                return Err(district);
            }
        }

        let new_id = self.alloc(TreeNode::leaf(district));
        self.set_slot(slot, Some(new_id));
        Ok(new_id)
    }

    /// Locate the node holding district `id`.
    pub fn find(&self, id: DistrictId) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(node_id) = current {
            let node = self.node(node_id);
            let here = node.district.id();
            tracing::trace!(district = %here, "checking district");
            current = match id.cmp(&here) {
                std::cmp::Ordering::Equal => return Some(node_id),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    #[must_use]
    pub fn contains(&self, id: DistrictId) -> bool {
        self.find(id).is_some()
    }

    /// The district with the given id.
    #[must_use]
    pub fn get(&self, id: DistrictId) -> Option<&District> {
        self.find(id).map(|n| &self.node(n).district)
    }

    /// The district with the given id, mutably.
    pub fn get_mut(&mut self, id: DistrictId) -> Option<&mut District> {
        let node_id = self.find(id)?;
        Some(&mut self.node_mut(node_id).district)
    }

    /// Delete district `id`, returning it.
    ///
    /// Leaves are detached, single children are spliced into the parent
    /// slot. A node with two children keeps its position: the in-order
    /// successor's district is moved into it and the successor node is
    /// unlinked instead.
    pub fn remove(&mut self, id: DistrictId) -> Option<District> {
        let mut slot = Slot::Root;
        let mut current = self.root;

        let target = loop {
            let node_id = current?;
            let node = self.node(node_id);
            let here = node.district.id();
            if id == here {
                break node_id;
            } else if id < here {
                slot = Slot::Left(node_id);
                current = node.left;
            } else {
                slot = Slot::Right(node_id);
                current = node.right;
            }
        };

        let (left, right) = {
            let node = self.node(target);
            (node.left, node.right)
        };

        match (left, right) {
            (None, None) => {
                self.set_slot(slot, None);
                Some(self.release(target).district)
            }
            (None, Some(child)) | (Some(child), None) => {
                self.set_slot(slot, Some(child));
                Some(self.release(target).district)
            }
            (Some(_), Some(right)) => {
                let mut successor_parent = target;
                let mut successor = right;
                while let Some(next) = self.node(successor).left {
                    successor_parent = successor;
                    successor = next;
                }

                let successor_right = self.node(successor).right;
                if successor_parent == target {
                    self.node_mut(target).right = successor_right;
                } else {
                    self.node_mut(successor_parent).left = successor_right;
                }

                let promoted = self.release(successor).district;
                Some(std::mem::replace(&mut self.node_mut(target).district, promoted))
            }
        }
    }

    /// Iterate districts in pre-order: node, then left subtree, then right.
    pub fn pre_order(&self) -> PreOrder<'_> {
        let mut stack = SmallVec::new();
        if let Some(root) = self.root {
            stack.push(root);
        }
        PreOrder { tree: self, stack }
    }

    /// District ids in pre-order.
    #[must_use]
    pub fn pre_order_ids(&self) -> Vec<DistrictId> {
        self.pre_order().map(District::id).collect()
    }

    /// District ids in ascending (in-order) order.
    #[must_use]
    pub fn in_order_ids(&self) -> Vec<DistrictId> {
        let mut ids = Vec::with_capacity(self.len);
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(node_id) = current {
                stack.push(node_id);
                current = self.node(node_id).left;
            }
            if let Some(node_id) = stack.pop() {
                let node = self.node(node_id);
                ids.push(node.district.id());
                current = node.right;
            }
        }
        ids
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((node_id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node(node_id);
            stack.extend(node.left.map(|c| (c, depth + 1)));
            stack.extend(node.right.map(|c| (c, depth + 1)));
        }
        deepest
    }
}

/// Pre-order iterator over a `DistrictTree`.
pub struct PreOrder<'a> {
    tree: &'a DistrictTree,
    stack: SmallVec<[NodeId; 32]>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a District;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node_id = self.stack.pop()?;
        let node = tree.node(node_id);
        // Right first so the left subtree is visited first
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.district)
    }
}
