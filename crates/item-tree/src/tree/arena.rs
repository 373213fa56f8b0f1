//! Arena-backed item tree with parent back-references

use crate::tree::{Node, NodeId, Result, Tree, TreeError, TreeOptions};
use log::{debug, info, warn};

/// An in-memory tree of files and folders
///
/// Every node lives in a single arena and is addressed by a [`NodeId`].
/// Folders own the membership of their children; a child only keeps a
/// lookup handle back to its folder. Detaching a node never drops it, so a
/// removed subtree can be queried or attached somewhere else later.
///
/// Several parentless nodes may coexist; each is the root of its own tree.
///
/// # Example
///
/// ```ignore
/// let mut tree = ItemTree::new();
/// let root = tree.new_folder("root")?;
/// let file = tree.new_file("notes", 12)?;
/// tree.add(root, file)?;
/// assert_eq!(tree.get_size(root), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemTree {
    /// Arena storage for nodes
    nodes: Vec<Node>,
    options: TreeOptions,
}

impl ItemTree {
    /// Create an empty tree with default options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            nodes: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Create a detached file with a fixed size
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidArgument`] if name validation is enabled
    /// and the name is empty or contains the path separator.
    pub fn new_file(&mut self, name: impl Into<String>, size: u64) -> Result<NodeId> {
        let name = name.into();
        self.check_name(&name)?;
        Ok(self.insert(Node::file(name, size)))
    }

    /// Create a detached, empty folder
    ///
    /// # Errors
    ///
    /// Same validation as [`ItemTree::new_file`].
    pub fn new_folder(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        self.check_name(&name)?;
        Ok(self.insert(Node::folder(name)))
    }

    /// Append `item` to `folder` and point its parent at `folder`
    ///
    /// Any previous parent is overwritten but that folder keeps its (now
    /// stale) entry; use [`ItemTree::move_item`] for a clean move. Names are
    /// not checked for uniqueness, and adding the same item twice lists it
    /// twice.
    ///
    /// # Errors
    ///
    /// - [`TreeError::UnknownNode`] if either handle is not from this tree
    /// - [`TreeError::NotAFolder`] if `folder` is a file
    /// - [`TreeError::CycleDetected`] if the cycle guard is on and `folder`
    ///   is `item` itself or listed anywhere below it
    pub fn add(&mut self, folder: NodeId, item: NodeId) -> Result<()> {
        self.check_attach(folder, item)?;

        info!("Creating item {} in {}", self.nodes[item.get()], self.nodes[folder.get()]);
        if let Some(old) = self.nodes[item.get()].parent.filter(|&p| p != folder) {
            debug!("{} re-parented away from {}", item, old);
        }

        self.nodes[item.get()].parent = Some(folder);
        self.children_mut(folder)?.push(item);
        Ok(())
    }

    /// Remove the first child of `folder` whose name equals `item`'s name
    ///
    /// Matching is by name, not identity: when names collide the node removed
    /// may differ from the one passed in. The removed node is returned and its
    /// parent link cleared; `Ok(None)` means nothing matched and the folder is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownNode`] for foreign handles and
    /// [`TreeError::NotAFolder`] if `folder` is a file.
    pub fn remove(&mut self, folder: NodeId, item: NodeId) -> Result<Option<NodeId>> {
        let name = self.node(item)?.name.clone();
        self.remove_named(folder, &name)
    }

    /// Remove the first child of `folder` called `name`
    ///
    /// Same semantics as [`ItemTree::remove`] without needing a handle.
    pub fn remove_named(&mut self, folder: NodeId, name: &str) -> Result<Option<NodeId>> {
        self.expect_folder(folder)?;

        let position = self
            .children(folder)
            .iter()
            .position(|&child| self.nodes[child.get()].name == name);

        let Some(position) = position else {
            debug!("Nothing named {:?} in {}", name, self.nodes[folder.get()]);
            return Ok(None);
        };

        let removed = self.children_mut(folder)?.remove(position);
        info!("Removing the item {}", self.nodes[removed.get()]);

        // A stale entry left behind by a re-parenting add must not clear the
        // link to the folder that really holds the node.
        let node = &mut self.nodes[removed.get()];
        if node.parent == Some(folder) {
            node.parent = None;
        }
        Ok(Some(removed))
    }

    /// Detach `item` from its current folder (by identity) and add it to
    /// `folder`
    ///
    /// Validation happens before anything is detached, so on error the tree
    /// is unchanged.
    pub fn move_item(&mut self, item: NodeId, folder: NodeId) -> Result<()> {
        self.check_attach(folder, item)?;

        if let Some(old) = self.nodes[item.get()].parent {
            if let Some(children) = self.nodes[old.get()].children_mut() {
                if let Some(position) = children.iter().position(|&c| c == item) {
                    children.remove(position);
                }
            }
            self.nodes[item.get()].parent = None;
            debug!("Detached {} from {}", item, old);
        }

        self.add(folder, item)
    }

    /// Current children of `folder`, in insertion order
    ///
    /// Files and unknown handles have no content.
    pub fn list_content(&self, folder: NodeId) -> &[NodeId] {
        self.children(folder)
    }

    /// All parentless nodes, in creation order
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| NodeId::new(index))
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        debug!("Allocated {} for {}", id, node);
        self.nodes.push(node);
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.get()).ok_or(TreeError::UnknownNode(id))
    }

    fn expect_folder(&self, id: NodeId) -> Result<()> {
        if self.node(id)?.is_folder() {
            Ok(())
        } else {
            Err(TreeError::NotAFolder(id))
        }
    }

    fn children_mut(&mut self, folder: NodeId) -> Result<&mut Vec<NodeId>> {
        self.nodes
            .get_mut(folder.get())
            .ok_or(TreeError::UnknownNode(folder))?
            .children_mut()
            .ok_or(TreeError::NotAFolder(folder))
    }

    fn check_attach(&self, folder: NodeId, item: NodeId) -> Result<()> {
        self.expect_folder(folder)?;
        self.node(item)?;

        // Membership is decided by children lists, which may still hold stale
        // entries after a re-parenting add, so parent links are not enough.
        if self.options.guard_cycles && self.reaches(item, folder) {
            warn!("Refusing to add {} to {}: cycle", item, folder);
            return Err(TreeError::CycleDetected { folder, item });
        }
        Ok(())
    }

    fn check_name(&self, name: &str) -> Result<()> {
        if !self.options.validate_names {
            return Ok(());
        }
        if name.is_empty() {
            return Err(TreeError::InvalidArgument("item name is empty".into()));
        }
        if name.contains(self.options.separator) {
            return Err(TreeError::InvalidArgument(format!(
                "item name {:?} contains the path separator {:?}",
                name, self.options.separator
            )));
        }
        Ok(())
    }
}

impl Tree for ItemTree {
    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.get())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn separator(&self) -> char {
        self.options.separator
    }
}
