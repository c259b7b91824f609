//! A first-in first-out [`Queue`].

use std::collections::{vec_deque, VecDeque};
use std::fmt::{self, Debug, Formatter};

use crate::collections::error::EmptyQueue;

/// A first-in first-out collection.
///
/// Items are stored in a ring buffer ([`VecDeque`]) rather than a plain [`Vec`], so that removing
/// from the front doesn't have to shift every remaining item.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
///
/// \* Amortized, the buffer occasionally reallocates.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Returns the number of items in the Queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Queue contains no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `item` to the back of the Queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the Queue.
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] if there are no items.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        self.items.pop_front().ok_or(EmptyQueue)
    }

    /// Returns a reference to the item at the front of the Queue, without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] if there are no items.
    pub fn peek(&self) -> Result<&T, EmptyQueue> {
        self.items.front().ok_or(EmptyQueue)
    }

    /// Returns a mutable reference to the item at the front of the Queue, without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] if there are no items.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyQueue> {
        self.items.front_mut().ok_or(EmptyQueue)
    }

    /// Returns an iterator over the items from the front of the Queue to the back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Enqueues every item in order, so the first one ends up at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
