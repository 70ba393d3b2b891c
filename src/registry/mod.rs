//! District registry.
//!
//! - `DistrictTree`: arena BST of active districts
//! - `DistrictRegistry`: staging list + tree, with add/find/eliminate

pub mod node;
pub mod tree;
#[allow(clippy::module_inception)]
pub mod registry;

pub use node::{NodeId, TreeNode};
pub use tree::{DistrictTree, PreOrder};
pub use registry::DistrictRegistry;
