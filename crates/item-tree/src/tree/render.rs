//! Plain-text rendering of items and subtrees

use crate::tree::{NodeId, NodeKind, Tree};
use std::fmt;

/// Indented outline of a subtree, one item per line
///
/// Folders end with the tree's separator and show their aggregate size;
/// files show their stored size.
///
/// ```text
/// root/ (150)
///   file01 (40)
///   folder1/ (10)
///     file11 (10)
/// ```
pub struct Outline<'a, T: Tree + ?Sized> {
    tree: &'a T,
    start: NodeId,
}

impl<'a, T: Tree + ?Sized> Outline<'a, T> {
    pub fn new(tree: &'a T, start: NodeId) -> Self {
        Self { tree, start }
    }
}

impl<T: Tree + ?Sized> fmt::Display for Outline<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Depth is tracked on the stack rather than read from parent links,
        // which may disagree with listings after a re-parenting add.
        let mut stack = vec![(self.start, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            let indent = depth * 2;
            match node.kind() {
                NodeKind::Folder => writeln!(
                    f,
                    "{:indent$}{}{} ({})",
                    "",
                    node.name,
                    self.tree.separator(),
                    self.tree.get_size(id),
                    indent = indent
                )?,
                NodeKind::File => writeln!(
                    f,
                    "{:indent$}{} ({})",
                    "",
                    node.name,
                    self.tree.get_size(id),
                    indent = indent
                )?,
            }

            for &child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}

/// Render the subtree rooted at `start` as an indented outline
pub fn render<T: Tree + ?Sized>(tree: &T, start: NodeId) -> String {
    Outline::new(tree, start).to_string()
}

/// Format a list of items as `[File(a), Folder(b)]`
///
/// Unknown handles are shown by id.
pub fn describe<T: Tree + ?Sized>(tree: &T, ids: &[NodeId]) -> String {
    let items: Vec<String> = ids
        .iter()
        .map(|&id| match tree.get(id) {
            Some(node) => node.to_string(),
            None => id.to_string(),
        })
        .collect();
    format!("[{}]", items.join(", "))
}
