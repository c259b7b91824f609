//! A last-in first-out [`Stack`].

use std::fmt::{self, Debug, Formatter};
use std::iter::Rev;
use std::slice;

use crate::collections::error::EmptyStack;

/// A last-in first-out collection, stored in a [`Vec`] with the top of the stack at the end.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* Amortized, the buffer occasionally reallocates.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }

    /// Returns the number of items on the Stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Stack contains no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes `item` onto the top of the Stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the item on top of the Stack.
    ///
    /// # Errors
    /// Returns [`EmptyStack`] if there are no items.
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        self.items.pop().ok_or(EmptyStack)
    }

    /// Returns a reference to the item on top of the Stack, without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyStack`] if there are no items.
    pub fn peek(&self) -> Result<&T, EmptyStack> {
        self.items.last().ok_or(EmptyStack)
    }

    /// Returns a mutable reference to the item on top of the Stack, without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyStack`] if there are no items.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyStack> {
        self.items.last_mut().ok_or(EmptyStack)
    }

    /// Returns an iterator over the items from the top of the Stack to the bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
