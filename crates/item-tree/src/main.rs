//! Walkthrough of the item tree on the sample structure
//!
//! Usage:
//!   item-tree [name]
//!
//! Builds the sample hierarchy, prints sizes, search results and paths, then
//! detaches an item. With a name argument, also lists every match for it.
//! Set `RUST_LOG=debug` to see every mutation.

use anyhow::{Context, Result};
use item_tree::prelude::*;
use item_tree::sample::load_structure;
use item_tree::tree::render::{describe, render};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let query = std::env::args().nth(1);

    let mut tree = ItemTree::with_options(TreeOptions::default());
    let root = load_structure(&mut tree).context("Failed to build the sample structure")?;

    println!("root.get_size {}", tree.get_size(root));
    println!("root content: {}", describe(&tree, tree.list_content(root)));

    let found_files = tree.search(root, "file11");
    println!(
        "Found items for name \"file11\": {}",
        describe(&tree, &found_files)
    );

    let folder21 = first_match(&tree, root, "folder21")?;
    println!(
        "folder21 content: {}",
        describe(&tree, tree.list_content(folder21))
    );
    println!("Size of folder21: {}", tree.get_size(folder21));
    println!("folder21 path: {}", tree.get_path(folder21));

    let file22 = first_match(&tree, root, "file22")?;
    println!("file22 path: {}", tree.get_path(file22));

    println!();
    print!("{}", render(&tree, root));
    println!();

    if let Some(name) = query {
        let matches = tree.search(root, &name);
        println!("Found {} item(s) named {:?}", matches.len(), name);
        for id in matches {
            println!("  {} ({})", tree.get_path(id), tree.get_size(id));
        }
        println!();
    }

    let file01 = first_match(&tree, root, "file01")?;
    info!("Detaching {}", tree.get_path(file01));
    tree.remove(root, file01).context("Failed to detach file01")?;
    println!(
        "root.get_size after removing file01: {}",
        tree.get_size(root)
    );
    println!("file01 path after removal: {}", tree.get_path(file01));

    Ok(())
}

fn first_match(tree: &ItemTree, root: NodeId, name: &str) -> Result<NodeId> {
    tree.search(root, name)
        .first()
        .copied()
        .with_context(|| format!("No item named {:?} under {}", name, tree.get_path(root)))
}
