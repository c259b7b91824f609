//! A module containing [`BinarySearchTree`] and its in-order iterators.
//!
//! The tree never recurses: insertion walks down with a cursor, while traversal and dropping keep
//! an explicit stack of nodes. Sorted input produces a tree that is really a linked list, and that
//! shouldn't be able to overflow the call stack.

mod binary_search_tree;
mod iter;
mod node;
mod tests;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
