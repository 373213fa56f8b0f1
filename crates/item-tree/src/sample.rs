//! The demonstration structure used by the walkthrough binary

use crate::tree::{ItemTree, NodeId, Result};

/// Build the sample hierarchy and return its root
///
/// ```text
/// root/
/// ├── file01      (40)
/// ├── file02      (50)
/// ├── folder1
/// │   └── file11  (10)
/// └── folder2
///     ├── file21  (20)
///     └── folder21
///         └── file22 (30)
/// ```
pub fn load_structure(tree: &mut ItemTree) -> Result<NodeId> {
    let root = tree.new_folder("root")?;

    let folder1 = tree.new_folder("folder1")?;
    let folder2 = tree.new_folder("folder2")?;
    let folder21 = tree.new_folder("folder21")?;

    let file11 = tree.new_file("file11", 10)?;
    tree.add(folder1, file11)?;
    let file21 = tree.new_file("file21", 20)?;
    tree.add(folder2, file21)?;
    tree.add(folder2, folder21)?;
    let file22 = tree.new_file("file22", 30)?;
    tree.add(folder21, file22)?;

    let file01 = tree.new_file("file01", 40)?;
    tree.add(root, file01)?;
    let file02 = tree.new_file("file02", 50)?;
    tree.add(root, file02)?;
    tree.add(root, folder1)?;
    tree.add(root, folder2)?;

    Ok(root)
}
