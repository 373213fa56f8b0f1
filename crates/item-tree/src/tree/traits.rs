//! Core tree traits: the item capability set and traversal utilities

use crate::tree::{Node, NodeBody, NodeId, NodeKind};
use log::trace;
use smallvec::SmallVec;
use std::collections::{HashSet, VecDeque};

/// Read-only view over a hierarchy of files and folders
///
/// Implementations only provide node lookup; the item capabilities
/// (`get_size`, `search`, `get_path`) are derived from it recursively and
/// never cache anything, so they always reflect the current tree shape.
///
/// Queries on an id the tree does not know return neutral values (size 0, no
/// matches, empty path) rather than failing.
///
/// # Example
///
/// ```ignore
/// fn report<T: Tree>(tree: &T, id: NodeId) {
///     println!("{} = {}", tree.get_path(id), tree.get_size(id));
/// }
/// ```
pub trait Tree {
    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is invalid.
    fn get(&self, id: NodeId) -> Option<&Node>;

    /// Count nodes stored in the tree, attached or not
    fn node_count(&self) -> usize;

    /// Separator placed between names by [`Tree::get_path`]
    fn separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }

    /// Get the parent of a node
    ///
    /// Returns `None` for parentless nodes or invalid IDs.
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children of a node in insertion order
    ///
    /// Empty for files or invalid IDs.
    fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// Get the name of a node
    fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(Node::kind)
    }

    /// Returns false for invalid IDs.
    fn is_file(&self, id: NodeId) -> bool {
        self.get(id).map(Node::is_file).unwrap_or(false)
    }

    /// Returns false for invalid IDs.
    fn is_folder(&self, id: NodeId) -> bool {
        self.get(id).map(Node::is_folder).unwrap_or(false)
    }

    /// Aggregate size of an item
    ///
    /// A file reports its stored size, a folder the sum over its current
    /// children (0 when empty). Totals saturate at `u64::MAX`.
    fn get_size(&self, id: NodeId) -> u64 {
        match self.get(id).map(Node::body) {
            Some(NodeBody::File { size }) => *size,
            Some(NodeBody::Folder { children }) => children
                .iter()
                .fold(0u64, |total, &child| total.saturating_add(self.get_size(child))),
            None => 0,
        }
    }

    /// Every item named `name` in the subtree rooted at `id`, inclusive
    ///
    /// Results come in pre-order: the node itself, then each child's subtree
    /// in insertion order.
    fn search(&self, id: NodeId, name: &str) -> Vec<NodeId> {
        trace!("search {:?} from {}", name, id);
        let mut results = Vec::new();
        collect_matches(self, id, name, &mut results);
        results
    }

    /// Names from the outermost parentless ancestor down to `id`
    ///
    /// A parentless node yields its own name; an invalid ID an empty string.
    fn get_path(&self, id: NodeId) -> String {
        let mut segments: SmallVec<[&str; 8]> = SmallVec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            match self.get(node_id) {
                Some(node) => {
                    segments.push(node.name.as_str());
                    current = node.parent();
                }
                None => break,
            }
        }

        segments.reverse();
        let mut separator = [0u8; 4];
        segments.join(&*self.separator().encode_utf8(&mut separator))
    }

    /// Get the depth of a node (parentless = 0)
    fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Get all ancestors of a node, from parent outwards
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// The outermost parentless ancestor of a node (itself when parentless)
    fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }

    /// Check if `target` is `from` itself or listed anywhere below it
    ///
    /// Follows children lists rather than parent links and visits each
    /// node once, so it terminates even on cyclic trees.
    fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if visited.insert(current) {
                stack.extend_from_slice(self.children(current));
            }
        }
        false
    }

    /// Check if a node is a strict ancestor of another
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.parent(parent_id);
        }
        false
    }
}

fn collect_matches<T: Tree + ?Sized>(tree: &T, id: NodeId, name: &str, out: &mut Vec<NodeId>) {
    let Some(node) = tree.get(id) else {
        return;
    };
    if node.name == name {
        out.push(id);
    }
    for &child in node.children() {
        collect_matches(tree, child, name, out);
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Explicit-stack counterparts of the recursive queries
///
/// Automatically implemented for every `Tree`. Use these for trees deep
/// enough to exhaust the call stack.
pub trait TreeTraversal: Tree {
    /// Walk the subtree rooted at `start` in the given order
    fn walk(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// Same result as [`Tree::search`], without recursion
    fn search_iter(&self, start: NodeId, name: &str) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.find(start, |node| node.name == name)
    }

    /// Same result as [`Tree::get_size`], without recursion
    fn size_iter(&self, start: NodeId) -> u64
    where
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .filter_map(|id| self.get(id).and_then(Node::file_size))
            .fold(0u64, u64::saturating_add)
    }

    /// All files below `start`, in pre-order
    fn files(&self, start: NodeId) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.find(start, Node::is_file)
    }

    /// All folders below `start` (inclusive), in pre-order
    fn folders(&self, start: NodeId) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.find(start, Node::is_folder)
    }

    /// Find nodes matching a predicate, in pre-order
    fn find<F>(&self, start: NodeId, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node) -> bool,
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }

    /// Find the first node with the given name (pre-order)
    fn find_first(&self, start: NodeId, name: &str) -> Option<NodeId>
    where
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .find(|&id| self.name(id) == Some(name))
    }

    /// Resolve a separator-joined path relative to `start`
    ///
    /// The first segment must be `start`'s own name, mirroring what
    /// [`Tree::get_path`] produces for a parentless node. Each following
    /// segment picks the first child with that name.
    fn find_by_path(&self, start: NodeId, path: &str) -> Option<NodeId> {
        let mut segments = path.split(self.separator());
        if segments.next()? != self.name(start)? {
            return None;
        }

        let mut current = start;
        for segment in segments.filter(|s| !s.is_empty()) {
            current = self
                .children(current)
                .iter()
                .copied()
                .find(|&id| self.name(id) == Some(segment))?;
        }
        Some(current)
    }
}

impl<T: Tree> TreeTraversal for T {}

/// Iterator for traversing a subtree in different orders
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    /// Pending nodes; the flag marks post-order entries whose children are
    /// already queued
    pending: VecDeque<(NodeId, bool)>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new tree walker starting from the given node
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        if tree.get(start).is_some() {
            pending.push_back((start, false));
        }
        Self {
            tree,
            order,
            pending,
        }
    }

    fn next_preorder(&mut self) -> Option<NodeId> {
        let (current, _) = self.pending.pop_back()?;

        // Push children in reverse so they're popped in insertion order
        for &child in self.tree.children(current).iter().rev() {
            self.pending.push_back((child, false));
        }

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some((current, expanded)) = self.pending.pop_back() {
            if expanded {
                return Some(current);
            }

            self.pending.push_back((current, true));
            for &child in self.tree.children(current).iter().rev() {
                self.pending.push_back((child, false));
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        let (current, _) = self.pending.pop_front()?;

        for &child in self.tree.children(current) {
            self.pending.push_back((child, false));
        }

        Some(current)
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
