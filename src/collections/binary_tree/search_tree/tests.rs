#![cfg(test)]

use super::*;

#[test]
fn test_inorder_traversal() {
    let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();

    assert_eq!(tree.inorder_traversal(), [&1, &3, &4, &5, &8]);
    assert_eq!(tree.len(), 5);
    assert_eq!(
        tree.inorder_traversal(), tree.inorder_traversal(),
        "Traversal should be repeatable."
    );

    let empty = BinarySearchTree::<i32>::new();
    assert!(empty.inorder_traversal().is_empty());
    assert!(empty.is_empty());
    assert_eq!(empty.height(), 0);
}

#[test]
fn test_shape() {
    let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();

    let root = tree.root.0.as_deref().expect("tree isn't empty");
    assert_eq!(root.value, 5, "The first value inserted should become the root.");
    assert_eq!(root.left.0.as_ref().map(|n| n.value), Some(3));
    assert_eq!(root.right.0.as_ref().map(|n| n.value), Some(8));
    assert_eq!(tree.height(), 3);
}

#[test]
fn test_duplicates_go_right() {
    let mut dupes = BinarySearchTree::new();
    dupes.extend([7, 7, 7]);
    assert_eq!(dupes.inorder_traversal(), [&7, &7, &7], "Duplicates should all be kept.");
    assert_eq!(dupes.height(), 3, "Each duplicate should become the right child of the last.");

    let root = dupes.root.0.as_deref().expect("tree isn't empty");
    assert!(root.left.0.is_none());
    assert!(root.right.0.is_some());
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Keyed {
    key: u8,
    // Excluded from ordering so that equal keys can still be told apart.
    tag: Tag,
}

#[derive(Debug)]
struct Tag(&'static str);

impl PartialEq for Tag {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for Tag {}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, _: &Self) -> std::cmp::Ordering {
        std::cmp::Ordering::Equal
    }
}

#[test]
fn test_duplicates_keep_insertion_order() {
    let tree: BinarySearchTree<Keyed> = [(2, "a"), (1, "b"), (2, "c"), (3, "d"), (2, "e")]
        .into_iter()
        .map(|(key, tag)| Keyed { key, tag: Tag(tag) })
        .collect();

    let tags: Vec<&str> = tree.iter().map(|k| k.tag.0).collect();
    assert_eq!(
        tags, ["b", "a", "c", "e", "d"],
        "Equal values should be traversed after the ones inserted before them."
    );
}

#[test]
fn test_contains_first_last() {
    let tree: BinarySearchTree<String> = ["pear", "apple", "fig", "quince"]
        .into_iter()
        .map(String::from)
        .collect();

    assert!(tree.contains("fig"));
    assert!(!tree.contains("grape"));
    assert_eq!(tree.first().map(String::as_str), Some("apple"));
    assert_eq!(tree.last().map(String::as_str), Some("quince"));

    let empty = BinarySearchTree::<String>::default();
    assert_eq!(empty.first(), None);
    assert!(!empty.contains("fig"));
}

#[test]
fn test_into_iter() {
    let tree: BinarySearchTree<i32> = [3, -1, 4, 1, -5, 9, 2, 6].into_iter().collect();
    let iter = tree.into_iter();
    assert_eq!(iter.len(), 8);
    assert_eq!(iter.collect::<Vec<_>>(), [-5, -1, 1, 2, 3, 4, 6, 9]);

    let tree: BinarySearchTree<i32> = (0..100).rev().collect();
    let mut iter = tree.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.len(), 99, "Dropping a partially consumed iterator should be fine.");
}

#[test]
fn test_equality_ignores_shape() {
    let a: BinarySearchTree<i32> = [1, 2, 3].into_iter().collect();
    let b: BinarySearchTree<i32> = [2, 3, 1].into_iter().collect();
    let c: BinarySearchTree<i32> = [2, 3, 3].into_iter().collect();

    assert_ne!(a.height(), b.height());
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(format!("{b:?}"), "[1, 2, 3]");
}

#[test]
fn test_deep_tree() {
    // Sorted input degenerates into a chain, which must not exhaust the call stack.
    let tree: BinarySearchTree<u32> = (0..20_000).collect();

    assert_eq!(tree.height(), 20_000);
    assert_eq!(tree.iter().len(), 20_000);
    assert!(tree.iter().copied().eq(0..20_000));
    assert!(tree.contains(&19_999));
}
