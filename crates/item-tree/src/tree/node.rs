//! Core node types for the item tree

use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle for a node stored in an [`ItemTree`](crate::tree::ItemTree)
///
/// Internally an index into the arena. A `NodeId` never owns the node it
/// points at; it stays valid for the lifetime of the tree that issued it,
/// whether the node is attached to a folder or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "#{}", _0)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The kind of an item in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A container holding an ordered list of children
    #[display(fmt = "Folder")]
    Folder,
    /// A leaf with a fixed size
    #[display(fmt = "File")]
    File,
}

impl NodeKind {
    /// Returns true if this is a folder
    pub const fn is_folder(self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Returns true if this is a file
    pub const fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// Kind-specific payload of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// Leaf payload. The size is fixed at construction.
    File { size: u64 },
    /// Container payload. Children keep insertion order.
    Folder { children: Vec<NodeId> },
}

/// A single item in the tree
///
/// The parent link is a lookup-only back-reference; membership is owned by
/// the parent's children list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The item's name (not full path)
    pub name: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) body: NodeBody,
}

impl Node {
    pub(crate) fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            parent: None,
            body: NodeBody::File { size },
        }
    }

    pub(crate) fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            body: NodeBody::Folder {
                children: Vec::new(),
            },
        }
    }

    /// The folder currently holding this item, if any
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn kind(&self) -> NodeKind {
        match self.body {
            NodeBody::File { .. } => NodeKind::File,
            NodeBody::Folder { .. } => NodeKind::Folder,
        }
    }

    /// Returns true if this is a folder
    pub fn is_folder(&self) -> bool {
        self.kind().is_folder()
    }

    /// Returns true if this is a file
    pub fn is_file(&self) -> bool {
        self.kind().is_file()
    }

    /// Children in insertion order (empty for files)
    pub fn children(&self) -> &[NodeId] {
        match &self.body {
            NodeBody::Folder { children } => children,
            NodeBody::File { .. } => &[],
        }
    }

    /// The stored size of a file, `None` for folders
    ///
    /// A folder's size is derived from its descendants, see
    /// [`Tree::get_size`](crate::tree::Tree::get_size).
    pub fn file_size(&self) -> Option<u64> {
        match self.body {
            NodeBody::File { size } => Some(size),
            NodeBody::Folder { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.body {
            NodeBody::Folder { children } => Some(children),
            NodeBody::File { .. } => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.name)
    }
}
