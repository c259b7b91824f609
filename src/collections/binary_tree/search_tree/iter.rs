use std::iter::FusedIterator;
use std::mem;

use super::{BinarySearchTree, Branch, Node};

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.len(),
        };
        iter.descend_left(self.root.0.as_deref());
        iter
    }
}

/// A borrowed, in-order iterator over a [`BinarySearchTree`].
///
/// The stack holds the path of nodes whose left subtree has been (or is being) visited, but which
/// haven't been yielded themselves.
pub struct Iter<'a, T: Ord> {
    stack: Vec<&'a Node<T>>,
    len: usize,
}

impl<'a, T: Ord> Iter<'a, T> {
    fn descend_left(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.0.as_deref();
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.0.as_deref());
        self.len -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: Ord> ExactSizeIterator for Iter<'_, T> {}

impl<T: Ord> FusedIterator for Iter<'_, T> {}

/// An owned, in-order iterator over a [`BinarySearchTree`].
///
/// Nodes are detached from the tree as they are pushed, so each one is freed as soon as its value
/// is yielded.
pub struct IntoIter<T: Ord> {
    stack: Vec<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> IntoIter<T> {
    pub(crate) fn new(root: Branch<T>, len: usize) -> IntoIter<T> {
        let mut iter = IntoIter {
            stack: Vec::new(),
            len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut branch: Branch<T>) {
        while let Some(mut node) = branch.0.take() {
            branch = mem::take(&mut node.left);
            self.stack.push(node);
        }
    }
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let right = mem::take(&mut node.right);
        self.descend_left(right);
        self.len -= 1;

        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

impl<T: Ord> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Draining frees the remaining nodes one at a time.
        self.by_ref().for_each(drop);
    }
}
