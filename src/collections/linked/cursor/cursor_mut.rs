use super::Cursor;
use crate::collections::linked::list::{DoublyLinkedList, Link};
use crate::util::error::InvalidPosition;

/// A position within a [`DoublyLinkedList`] which allows the list to be modified around it in
/// `O(1)`.
///
/// # Examples
/// ```
/// # use seq_containers::collections::linked::DoublyLinkedList;
/// let mut list = DoublyLinkedList::from([1, 2, 4]);
/// let mut cursor = list.begin_mut();
/// cursor.move_next().move_next();
/// cursor.insert(3);
/// assert_eq!(cursor.current(), Some(&3));
/// cursor.move_next();
/// assert_eq!(cursor.erase(), Ok(4));
/// assert!(cursor.is_end());
/// assert!(cursor.erase().is_err());
/// assert_eq!(list, DoublyLinkedList::from([1, 2, 3]));
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut DoublyLinkedList<T>,
    pub(crate) pos: Link<T>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns the element under the cursor, or [`None`] at the end sentinel.
    pub fn current(&self) -> Option<&T> {
        self.pos.map(|node| node.value())
    }

    /// Returns a mutable reference to the element under the cursor, or [`None`] at the end
    /// sentinel.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.pos.map(|node| node.value_mut())
    }

    /// Returns true if the cursor is at the end sentinel.
    pub const fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    /// Moves the cursor to the next position, wrapping from the end sentinel to the first
    /// element.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => *node.next(),
            None => self.list.head(),
        };
        self
    }

    /// Moves the cursor to the previous position, wrapping from the end sentinel to the last
    /// element.
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => *node.prev(),
            None => self.list.tail(),
        };
        self
    }

    /// Links a new node holding `value` immediately before the cursor and moves the cursor onto
    /// it. At the first element the new node becomes the head, at the end sentinel it becomes the
    /// tail.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub fn insert(&mut self, value: T) -> &mut Self {
        self.pos = Some(self.list.link_before(self.pos, value));
        self
    }

    /// Inserts every value from `values` in order immediately before the cursor's position. The
    /// cursor finishes on the last inserted element, or stays where it is if `values` is empty.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 5]);
    /// let mut cursor = list.begin_mut();
    /// cursor.move_next();
    /// cursor.insert_many([2, 3, 4]);
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(list, DoublyLinkedList::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> &mut Self {
        let anchor = self.pos;
        for value in values {
            self.pos = Some(self.list.link_before(anchor, value));
        }
        self
    }

    /// Unlinks the element under the cursor and returns it, moving the cursor to the following
    /// position.
    ///
    /// # Errors
    /// Returns [`InvalidPosition`] without modifying the list if the cursor is at the end
    /// sentinel, which is always the case for an empty list.
    pub fn erase(&mut self) -> Result<T, InvalidPosition> {
        let node = self.pos.ok_or(InvalidPosition)?;
        self.pos = *node.next();
        Ok(self.list.unlink(node))
    }

    /// Moves every element of `other`, in order, to sit immediately before the cursor, leaving
    /// `other` empty. The cursor keeps pointing at the same position. No nodes are allocated or
    /// copied.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 4]);
    /// let mut other = DoublyLinkedList::from([2, 3]);
    /// list.begin_mut().move_next().splice(&mut other);
    /// assert_eq!(list, DoublyLinkedList::from([1, 2, 3, 4]));
    /// assert!(other.is_empty());
    /// ```
    pub fn splice(&mut self, other: &mut DoublyLinkedList<T>) -> &mut Self {
        log::trace!("splicing list of {} into list of {}", other.len(), self.list.len());
        self.list.splice_before(self.pos, other);
        self
    }

    /// Returns a read-only [`Cursor`] at the same position, borrowing from this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: &*self.list,
            pos: self.pos,
        }
    }
}
