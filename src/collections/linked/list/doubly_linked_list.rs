use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::{Iter, IterMut, Length, Link, Node, NodePtr, ONE};
use crate::collections::linked::cursor::{Cursor, CursorMut};
use crate::util::error::{CapacityOverflow, EmptyContainer};
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`Cursor`] and [`CursorMut`], which act as
/// position handles for traversal and `O(1)` insertion and removal anywhere in the list.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `m`: The number of items in the other DoublyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `CursorMut::insert` | `O(1)` |
/// | `CursorMut::erase` | `O(1)` |
/// | `CursorMut::splice` | `O(1)` |
/// | `append` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `unique` | `O(n)` |
/// | `sort` | `O(n^2)`*, `O(n)` |
/// | `merge` | `O((n+m)^2)`* |
/// | `contains` | `O(n)` |
///
/// \* `sort` is an insertion sort that relinks nodes rather than moving values, so it never
/// allocates. Already sorted input is handled in `O(n)`.
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(n)` operations will consist
/// primarily of cache misses. For this reason, [`Vector`](crate::collections::contiguous::Vector)
/// should be preferred for most applications unless the `O(1)` cursor methods are being heavily
/// utilized.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Returns the largest number of nodes that could theoretically be allocated.
    pub const fn max_len(&self) -> usize {
        isize::MAX as usize / size_of::<Node<T>>()
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let list = DoublyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.front(), Ok(&1));
    /// assert!(DoublyLinkedList::<u8>::new().front().is_err());
    /// ```
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        match self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        match self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { head, .. }) => Ok(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        match self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        match self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { tail, .. }) => Ok(tail.value_mut()),
        }
    }

    /// Returns a [`Cursor`] pointing at the first element, or at the end sentinel if the list is
    /// empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor {
            pos: self.head(),
            list: self,
        }
    }

    /// Returns a [`Cursor`] pointing at the end sentinel, one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor {
            pos: None,
            list: self,
        }
    }

    /// Returns a [`CursorMut`] pointing at the first element, or at the end sentinel if the list
    /// is empty.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            pos: self.head(),
            list: self,
        }
    }

    /// Returns a [`CursorMut`] pointing at the end sentinel, one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            pos: None,
            list: self,
        }
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head(), value);
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Ok(2));
    /// assert!(list.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, EmptyContainer> {
        match self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { head, .. }) => Ok(self.unlink(head)),
        }
    }

    /// Removes the last element from the list and returns it.
    pub fn pop_back(&mut self) -> Result<T, EmptyContainer> {
        match self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { tail, .. }) => Ok(self.unlink(tail)),
        }
    }

    /// Pushes every value from `values` onto the back of the list, in order.
    pub fn insert_many_back<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }

    /// Pushes every value from `values` onto the front of the list, in order. Because every value
    /// becomes the new head, they end up in reverse order.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([4]);
    /// list.insert_many_front([3, 2, 1]);
    /// assert_eq!(list, DoublyLinkedList::from([1, 2, 3, 4]));
    /// ```
    pub fn insert_many_front<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_front(value);
        }
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Exchanges the contents of two lists without touching any nodes.
    pub fn swap(&mut self, other: &mut DoublyLinkedList<T>) {
        mem::swap(&mut self.state, &mut other.state);
    }

    /// Moves every element of `other` onto the back of self, leaving `other` empty. No nodes are
    /// allocated or copied.
    pub fn append(&mut self, other: &mut DoublyLinkedList<T>) {
        self.splice_before(None, other);
    }

    /// Reverses the order of the list in place by swapping the links of every node.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list, DoublyLinkedList::from([3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut curr = Some(contents.head);
            while let Some(node) = curr {
                let next = *node.next();
                *node.next_mut() = *node.prev();
                *node.prev_mut() = next;
                curr = next;
            }
            mem::swap(&mut contents.head, &mut contents.tail);
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T: Default> DoublyLinkedList<T> {
    /// Creates a list holding `len` default values.
    pub fn repeat_default(len: usize) -> DoublyLinkedList<T> {
        (0..len).map(|_| T::default()).collect()
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) const fn head(&self) -> Link<T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        }
    }

    pub(crate) const fn tail(&self) -> Link<T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail),
        }
    }

    /// Allocates a node for `value` and links it immediately before `next`, or at the back of the
    /// list if `next` is the end sentinel. Returns the new node.
    ///
    /// `next` must be a node of this list.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    pub(crate) fn link_before(&mut self, next: Link<T>, value: T) -> NodePtr<T> {
        let contents = match &mut self.state {
            Empty => {
                let node = NodePtr::from_node(Node {
                    value,
                    prev: None,
                    next: None,
                });
                self.state = Full(ListContents {
                    len: ONE,
                    head: node,
                    tail: node,
                });
                return node;
            },
            Full(contents) => contents,
        };

        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let prev = match next {
            Some(next) => *next.prev(),
            None => Some(contents.tail),
        };
        let node = NodePtr::from_node(Node {
            value,
            prev,
            next,
        });

        match prev {
            Some(prev) => *prev.next_mut() = Some(node),
            None => contents.head = node,
        }
        match next {
            Some(next) => *next.prev_mut() = Some(node),
            None => contents.tail = node,
        }

        node
    }

    /// Unlinks `node` from the list, deallocates it and returns its value.
    ///
    /// `node` must be a node of this list, which means the list can't be empty.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> T {
        let Full(contents) = &mut self.state else {
            unreachable!("a node was unlinked from an empty list");
        };

        // SAFETY: node belongs to this list and is removed from it below, so no other NodePtr to it
        // will be used again.
        let node = unsafe { node.take_node() };

        match contents.len.checked_sub(1) {
            None => self.state = Empty,
            Some(new_len) => {
                contents.len = new_len;

                match node.prev {
                    Some(prev) => *prev.next_mut() = node.next,
                    None => {
                        // The head of a list with more than one element always has a next node.
                        if let Some(next) = node.next {
                            contents.head = next;
                        }
                    },
                }
                match node.next {
                    Some(next) => *next.prev_mut() = node.prev,
                    None => {
                        if let Some(prev) = node.prev {
                            contents.tail = prev;
                        }
                    },
                }
            },
        }

        node.value
    }

    /// Moves every node of `other`, in order, to sit immediately before `next` (or at the back if
    /// `next` is the end sentinel). `other` is left empty.
    ///
    /// # Panics
    /// Panics if the combined length would overflow.
    pub(crate) fn splice_before(&mut self, next: Link<T>, other: &mut DoublyLinkedList<T>) {
        let total = self.len().checked_add(other.len()).ok_or(CapacityOverflow).throw();

        let Full(donor) = mem::take(&mut other.state) else {
            return;
        };

        let contents = match &mut self.state {
            Empty => {
                self.state = Full(donor);
                return;
            },
            Full(contents) => contents,
        };

        // Both lists are populated, so total is non-zero.
        if let Some(len) = Length::new(total) {
            contents.len = len;
        }

        let prev = match next {
            Some(next) => *next.prev(),
            None => Some(contents.tail),
        };

        *donor.head.prev_mut() = prev;
        *donor.tail.next_mut() = next;

        match prev {
            Some(prev) => *prev.next_mut() = Some(donor.head),
            None => contents.head = donor.head,
        }
        match next {
            Some(next) => *next.prev_mut() = Some(donor.tail),
            None => contents.tail = donor.tail,
        }
    }

    /// Walks the list in both directions, asserting that every link is mirrored and that the
    /// stored length is correct.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, tail, len }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                assert!(tail.next().is_none(), "The tail shouldn't have a next node.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = *curr.next() {
                    assert!(*next.prev() == Some(curr), "Every next link should be mirrored.");
                    curr = next;
                    count += 1;
                }
                assert!(tail == curr, "Following next links should end at the tail.");
                assert_eq!(count, len.get(), "The stored length should match the node count.");
            },
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head();
        while let Some(ptr) = curr {
            // SAFETY: Every node reachable from head is owned by this list and visited once.
            let node = unsafe { ptr.take_node() };
            curr = node.next;
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.insert_many_back(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_many_back(iter);
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: A DoublyLinkedList uniquely owns all of its nodes, so sending it sends every T with it.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access to a DoublyLinkedList only hands out shared references to its values.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a DoublyLinkedList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("DoublyLinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        match iter.next() {
            None => write!(f, "()"),
            Some(first) => {
                write!(f, "({first:?})")?;
                for value in iter {
                    write!(f, " -> ({value:?})")?;
                }
                Ok(())
            },
        }
    }
}
