//! Tree-based collections. Currently this is only [`BinarySearchTree`], an unbalanced tree which
//! keeps every inserted value, duplicates included.

pub mod search_tree;

#[doc(inline)]
pub use search_tree::BinarySearchTree;
