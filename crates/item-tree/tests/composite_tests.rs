use item_tree::prelude::*;
use item_tree::sample::load_structure;
use pretty_assertions::assert_eq;

fn sample() -> (ItemTree, NodeId) {
    let mut tree = ItemTree::with_options(TreeOptions::new().separator('/'));
    let root = load_structure(&mut tree).unwrap();
    (tree, root)
}

fn names(tree: &ItemTree, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .map(|&id| tree.name(id).unwrap().to_string())
        .collect()
}

#[test]
fn test_root_size_is_sum_of_files() {
    let (tree, root) = sample();
    assert_eq!(tree.get_size(root), 150);
    assert_eq!(tree.size_iter(root), 150);
}

#[test]
fn test_folder_sizes() {
    let (tree, root) = sample();
    let folder1 = tree.search(root, "folder1")[0];
    let folder2 = tree.search(root, "folder2")[0];
    let folder21 = tree.search(root, "folder21")[0];

    assert_eq!(tree.get_size(folder1), 10);
    assert_eq!(tree.get_size(folder2), 50);
    assert_eq!(tree.get_size(folder21), 30);
}

#[test]
fn test_empty_folder_has_zero_size() {
    let mut tree = ItemTree::new();
    let empty = tree.new_folder("empty").unwrap();
    assert_eq!(tree.get_size(empty), 0);
}

#[test]
fn test_root_content_in_insertion_order() {
    let (tree, root) = sample();
    assert_eq!(
        names(&tree, tree.list_content(root)),
        vec!["file01", "file02", "folder1", "folder2"]
    );
}

#[test]
fn test_search_finds_exact_item() {
    let (tree, root) = sample();
    let found = tree.search(root, "file11");
    assert_eq!(found.len(), 1);
    assert_eq!(tree.get(found[0]).unwrap().to_string(), "File(file11)");
    assert_eq!(tree.get_size(found[0]), 10);
}

#[test]
fn test_search_without_match_is_empty() {
    let (tree, root) = sample();
    assert!(tree.search(root, "nonexistent").is_empty());
    assert!(tree.search_iter(root, "nonexistent").is_empty());
}

#[test]
fn test_search_includes_start_node() {
    let (tree, root) = sample();
    assert_eq!(tree.search(root, "root"), vec![root]);
}

#[test]
fn test_search_is_preorder() {
    let mut tree = ItemTree::new();
    let root = tree.new_folder("x").unwrap();
    let a = tree.new_folder("x").unwrap();
    let a_file = tree.new_file("x", 1).unwrap();
    let b_file = tree.new_file("x", 2).unwrap();
    tree.add(a, a_file).unwrap();
    tree.add(root, a).unwrap();
    tree.add(root, b_file).unwrap();

    let expected = vec![root, a, a_file, b_file];
    assert_eq!(tree.search(root, "x"), expected);
    assert_eq!(tree.search_iter(root, "x"), expected);
}

#[test]
fn test_folder2_lists_children_in_order() {
    let (tree, root) = sample();
    let folder2 = tree.search(root, "folder2")[0];
    assert_eq!(
        names(&tree, tree.list_content(folder2)),
        vec!["file21", "folder21"]
    );
}

#[test]
fn test_paths() {
    let (tree, root) = sample();
    let file22 = tree.search(root, "file22")[0];
    let folder21 = tree.search(root, "folder21")[0];

    assert_eq!(tree.get_path(file22), "root/folder2/folder21/file22");
    assert_eq!(tree.get_path(folder21), "root/folder2/folder21");
    assert_eq!(tree.get_path(root), "root");
    assert_eq!(
        tree.find_by_path(root, "root/folder2/folder21/file22"),
        Some(file22)
    );
}

#[test]
fn test_path_uses_configured_separator() {
    let mut tree = ItemTree::with_options(TreeOptions::new().separator('\\'));
    let root = load_structure(&mut tree).unwrap();
    let file22 = tree.search(root, "file22")[0];
    assert_eq!(tree.get_path(file22), r"root\folder2\folder21\file22");
}

#[test]
fn test_add_keeps_parent_consistent() {
    let (mut tree, root) = sample();
    let folder1 = tree.search(root, "folder1")[0];
    let extra = tree.new_file("extra", 5).unwrap();

    tree.add(folder1, extra).unwrap();

    assert_eq!(tree.parent(extra), Some(folder1));
    assert_eq!(tree.list_content(folder1).last(), Some(&extra));
    assert_eq!(tree.get_path(extra), "root/folder1/extra");
    assert_eq!(tree.get_size(root), 155);
}

#[test]
fn test_remove_missing_name_is_noop() {
    let (mut tree, root) = sample();
    let before = tree.list_content(root).to_vec();
    let stranger = tree.new_file("stranger", 1).unwrap();

    assert_eq!(tree.remove(root, stranger).unwrap(), None);
    assert_eq!(tree.list_content(root), before.as_slice());
    assert_eq!(tree.get_size(root), 150);
}

#[test]
fn test_remove_detaches_subtree() {
    let (mut tree, root) = sample();
    let folder2 = tree.search(root, "folder2")[0];
    let file22 = tree.search(root, "file22")[0];

    assert_eq!(tree.remove(root, folder2).unwrap(), Some(folder2));

    assert_eq!(tree.parent(folder2), None);
    assert_eq!(tree.get_path(folder2), "folder2");
    assert_eq!(tree.get_size(root), 100);
    assert!(tree.search(root, "file22").is_empty());

    // The detached subtree is still intact and queryable
    assert_eq!(tree.get_size(folder2), 50);
    assert_eq!(tree.get_path(file22), "folder2/folder21/file22");
}

#[test]
fn test_detached_item_can_be_reattached() {
    let (mut tree, root) = sample();
    let folder1 = tree.search(root, "folder1")[0];
    let file01 = tree.search(root, "file01")[0];

    tree.remove(root, file01).unwrap();
    tree.add(folder1, file01).unwrap();

    assert_eq!(tree.get_path(file01), "root/folder1/file01");
    assert_eq!(tree.get_size(root), 150);
}

#[test]
fn test_walk_orders_on_sample() {
    let (tree, root) = sample();

    let pre: Vec<_> = tree.walk(root, TraversalOrder::PreOrder).collect();
    assert_eq!(
        names(&tree, &pre),
        vec![
            "root", "file01", "file02", "folder1", "file11", "folder2", "file21", "folder21",
            "file22"
        ]
    );

    let post: Vec<_> = tree.walk(root, TraversalOrder::PostOrder).collect();
    assert_eq!(post.last(), Some(&root));
    assert_eq!(post.len(), pre.len());

    assert_eq!(tree.files(root).len(), 5);
    assert_eq!(tree.folders(root).len(), 4);
}
