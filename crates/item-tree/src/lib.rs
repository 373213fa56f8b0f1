//! Item Tree Library
//!
//! An in-memory hierarchy of files and folders with size aggregation,
//! name search and path reconstruction through parent back-references.
//!
//! # Core Concepts
//!
//! - **Tree**: the item capability set (size, search, path) over node handles
//! - **Node**: a file (fixed size) or a folder (ordered children)
//! - **ItemTree**: arena store owning every node and its folder links
//!
//! # Example
//!
//! ```
//! use item_tree::prelude::*;
//!
//! let mut tree = ItemTree::with_options(TreeOptions::new().separator('/'));
//! let root = tree.new_folder("root")?;
//! let docs = tree.new_folder("docs")?;
//! let readme = tree.new_file("readme", 12)?;
//! tree.add(docs, readme)?;
//! tree.add(root, docs)?;
//!
//! assert_eq!(tree.get_size(root), 12);
//! assert_eq!(tree.search(root, "readme"), vec![readme]);
//! assert_eq!(tree.get_path(readme), "root/docs/readme");
//! # Ok::<(), TreeError>(())
//! ```

pub mod sample;
pub mod tree;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::tree::prelude::*;
}
