//! Core tree abstraction for files and folders
//!
//! This module provides the item capability set (`Tree`), its explicit-stack
//! traversals (`TreeTraversal`) and the arena store (`ItemTree`).

mod arena;
mod error;
mod node;
mod options;
pub mod render;
#[cfg(feature = "serde")]
mod snapshot;
mod traits;

pub use arena::ItemTree;
pub use error::{Result, TreeError};
pub use node::{Node, NodeBody, NodeId, NodeKind};
pub use options::TreeOptions;
#[cfg(feature = "serde")]
pub use snapshot::ItemSnapshot;
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        ItemTree, Node, NodeId, NodeKind, TraversalOrder, Tree, TreeError, TreeOptions,
        TreeTraversal,
    };
}
