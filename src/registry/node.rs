//! Tree node structures.
//!
//! Nodes live in the `DistrictTree` arena and refer to their children by
//! `NodeId` index. There are no parent links; deletion recomputes the
//! parent on its way down.

use serde::{Deserialize, Serialize};

use crate::people::District;

/// Index into the `DistrictTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A node in the district BST. Owns exactly one district.
#[derive(Clone, Debug, Serialize)]
pub struct TreeNode {
    pub(crate) district: District,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl TreeNode {
    /// Create a childless node.
    #[must_use]
    pub fn leaf(district: District) -> Self {
        Self {
            district,
            left: None,
            right: None,
        }
    }

    /// The district stored here.
    ///
    /// Two-child deletion copies the successor's district into the deleted
    /// node, so a node's district can change over its lifetime.
    #[must_use]
    pub fn district(&self) -> &District {
        &self.district
    }

    #[must_use]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
