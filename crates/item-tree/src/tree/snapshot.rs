//! Owned, serializable copies of a subtree

use crate::tree::{ItemTree, Node, NodeBody, NodeId, NodeKind, Result, Tree};
use serde::{Deserialize, Serialize};

/// Nested copy of an item and everything below it
///
/// Folder sizes are recorded as computed at capture time; they are ignored
/// when restoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ItemSnapshot>,
}

impl ItemSnapshot {
    /// Copy the subtree rooted at `id`
    ///
    /// Returns `None` if the ID is invalid.
    pub fn capture<T: Tree + ?Sized>(tree: &T, id: NodeId) -> Option<Self> {
        let node: &Node = tree.get(id)?;
        let children = match node.body() {
            NodeBody::File { .. } => Vec::new(),
            NodeBody::Folder { children } => children
                .iter()
                .filter_map(|&child| Self::capture(tree, child))
                .collect(),
        };

        Some(Self {
            name: node.name.clone(),
            kind: node.kind(),
            size: tree.get_size(id),
            children,
        })
    }
}

impl ItemTree {
    /// Rebuild a snapshot as a new detached subtree
    ///
    /// Names go through the usual validation.
    pub fn restore(&mut self, snapshot: &ItemSnapshot) -> Result<NodeId> {
        match snapshot.kind {
            NodeKind::File => self.new_file(snapshot.name.as_str(), snapshot.size),
            NodeKind::Folder => {
                let folder = self.new_folder(snapshot.name.as_str())?;
                for child in &snapshot.children {
                    let child = self.restore(child)?;
                    self.add(folder, child)?;
                }
                Ok(folder)
            }
        }
    }
}
