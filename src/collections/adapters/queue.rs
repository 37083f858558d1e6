use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::DoublyLinkedList;
use crate::util::error::EmptyContainer;

/// A first-in-first-out collection. Values are pushed onto the back of the inner
/// [`DoublyLinkedList`] and popped off its front.
///
/// # Examples
/// ```
/// # use seq_containers::collections::adapters::Queue;
/// let mut queue = Queue::new();
/// queue.insert_many_back([1, 2, 3]);
/// assert_eq!(queue.front(), Ok(&1));
/// assert_eq!(queue.back(), Ok(&3));
/// assert_eq!(queue.pop(), Ok(1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Queue<T> {
    pub(crate) inner: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            inner: DoublyLinkedList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a reference to the oldest value, which will be popped next.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.inner.front()
    }

    /// Returns a reference to the most recently pushed value.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        self.inner.back()
    }

    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Removes and returns the oldest value.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.inner.pop_front()
    }

    /// Exchanges the contents of two Queues in `O(1)`.
    pub fn swap(&mut self, other: &mut Queue<T>) {
        self.inner.swap(&mut other.inner);
    }

    /// Pushes every value from `values` in order, so the first one will be popped first.
    pub fn insert_many_back<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        Queue {
            inner: DoublyLinkedList::from(value),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("inner", &self.inner)
            .finish()
    }
}
