use crate::collections::linked::list::{DoublyLinkedList, Link};

/// A read-only position within a [`DoublyLinkedList`]. See the [module docs](super) for how
/// positions wrap around the end sentinel.
pub struct Cursor<'a, T> {
    pub(crate) list: &'a DoublyLinkedList<T>,
    pub(crate) pos: Link<T>,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the element under the cursor, or [`None`] at the end sentinel.
    pub fn current(&self) -> Option<&'a T> {
        self.pos.map(|node| node.value())
    }

    /// Returns true if the cursor is at the end sentinel.
    pub const fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    /// Moves the cursor to the next position. From the last element this is the end sentinel and
    /// from the end sentinel it is the first element.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => *node.next(),
            None => self.list.head(),
        };
        self
    }

    /// Moves the cursor to the previous position. From the first element this is the end sentinel
    /// and from the end sentinel it is the last element.
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => *node.prev(),
            None => self.list.tail(),
        };
        self
    }

    /// Returns the list that the cursor points into.
    pub const fn list(&self) -> &'a DoublyLinkedList<T> {
        self.list
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    /// Cursors are equal when they point at the same position of the same list.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}
