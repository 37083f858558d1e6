use std::fmt::{self, Debug, Formatter};

use crate::collections::linked::DoublyLinkedList;
use crate::util::error::EmptyContainer;

/// A last-in-first-out collection. Values are pushed onto and popped off the back of the inner
/// [`DoublyLinkedList`].
///
/// # Examples
/// ```
/// # use seq_containers::collections::adapters::Stack;
/// let mut stack = Stack::from([1, 2]);
/// stack.push(3);
/// assert_eq!(stack.top(), Ok(&3));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.pop(), Ok(2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Stack<T> {
    pub(crate) inner: DoublyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty Stack.
    pub const fn new() -> Stack<T> {
        Stack {
            inner: DoublyLinkedList::new(),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a reference to the most recently pushed value.
    pub fn top(&self) -> Result<&T, EmptyContainer> {
        self.inner.back()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value);
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        self.inner.pop_back()
    }

    /// Exchanges the contents of two Stacks in `O(1)`.
    pub fn swap(&mut self, other: &mut Stack<T>) {
        self.inner.swap(&mut other.inner);
    }

    /// Pushes every value from `values` in order, so the last one ends up on top.
    pub fn insert_many_front<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        Stack {
            inner: DoublyLinkedList::from(value),
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("inner", &self.inner)
            .finish()
    }
}
