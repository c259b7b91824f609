use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{Branch, IntoIter, Iter};

/// An unbalanced binary search tree over values of a totally ordered type.
///
/// For every node, all values in its left subtree are less than its own value, and all values in
/// its right subtree are greater than or equal to it. Ties go right, so inserting a duplicate never
/// replaces anything: the tree behaves like a sorted multiset, and equal values come out of an
/// in-order traversal in the order they were inserted.
///
/// There is no rebalancing and no removal. The shape of the tree depends entirely on insertion
/// order, e.g. sorted input produces a tree with a height equal to its length.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the tree.
/// - `h`: The height of the tree, between `log2 n` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `first/last` | `O(h)` |
/// | `inorder_traversal` | `O(n)` |
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree, counting duplicates.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` into the tree as a new leaf. If the tree is empty, the value becomes the
    /// root.
    pub fn insert(&mut self, value: T) {
        self.root.insert(value);
        self.len += 1;
    }

    /// Returns every value in the tree in non-decreasing order. The traversal is recomputed on
    /// every call.
    pub fn inorder_traversal(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns true if the tree contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.contains(value)
    }

    /// Returns the smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the largest value in the tree. With duplicates, this is the last one inserted.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 for an empty
    /// tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns an in-order iterator over the values in the tree, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Takes the root out of the tree, leaving it empty.
    pub(crate) fn take_root(&mut self) -> Branch<T> {
        self.len = 0;
        mem::take(&mut self.root)
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.root.clear();
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees with the same values can have different shapes, depending on insertion order.
        // The in-order traversal doesn't depend on shape, so compare that instead.
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Ord> Eq for BinarySearchTree<T> {}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.take_root(), len)
    }
}
