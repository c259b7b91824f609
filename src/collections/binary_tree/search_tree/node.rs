use std::borrow::Borrow;
use std::cmp::Ordering;

/// An optional, owned subtree. Parents own their children outright and there are no parent
/// pointers, so the structure can't contain cycles.
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Node<T> {
    pub const fn leaf(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }
}

impl<T: Ord> Branch<T> {
    /// Attaches `value` as a new leaf. Smaller values go left, while equal or greater values go
    /// right, so duplicates end up after the equal values already in the tree.
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.0;

        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left.0
            } else {
                &mut node.right.0
            };
        }

        *slot = Some(Box::new(Node::leaf(value)));
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.0.as_deref();

        while let Some(node) = current {
            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.0.as_deref(),
                Ordering::Greater => node.right.0.as_deref(),
                Ordering::Equal => return true,
            };
        }

        false
    }

    /// Returns the leftmost (smallest) value.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the rightmost (largest) value.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Returns the number of nodes on the longest path from this branch to a leaf.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        stack.extend(self.0.as_deref().map(|n| (n, 1)));

        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.left.0.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.0.as_deref().map(|n| (n, depth + 1)));
        }

        max
    }

    /// Tears the branch down one node at a time. Letting `Box` drop a long chain of nodes would
    /// recurse once per level.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<T: Ord> Default for Branch<T> {
    fn default() -> Self {
        Branch(None)
    }
}
