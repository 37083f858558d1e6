use std::cmp::Ordering;

use super::{DoublyLinkedList, ListState};
use crate::util::error::EmptyContainer;

use ListState::*;

impl<T: Ord> DoublyLinkedList<T> {
    /// Sorts the list in ascending order. The sort is stable: equal elements keep their relative
    /// order. Size 0 and 1 lists are left untouched.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([8, 3, 2, 10, 7, 4, 6, 1, 9, 5]);
    /// list.sort();
    /// assert_eq!(list, DoublyLinkedList::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
    /// ```
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }

    /// Moves every element of `other` onto the back of self and then sorts the result, leaving
    /// `other` empty. Neither list has to be sorted beforehand.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut odd = DoublyLinkedList::from([1, 3, 5]);
    /// let mut even = DoublyLinkedList::from([2, 4, 6]);
    /// odd.merge(&mut even);
    /// assert_eq!(odd, DoublyLinkedList::from([1, 2, 3, 4, 5, 6]));
    /// assert!(even.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut DoublyLinkedList<T>) {
        log::trace!("merging list of {} into list of {}", other.len(), self.len());
        self.append(other);
        self.sort();
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Removes every element that is equal to the element immediately before it, so that each run
    /// of consecutive equal elements is reduced to its first element. Equal elements which aren't
    /// adjacent are all kept.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] without modifying the list if it has fewer than two elements.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([1, 1, 2, 2, 3, 3, 1]);
    /// list.unique().unwrap();
    /// assert_eq!(list, DoublyLinkedList::from([1, 2, 3, 1]));
    /// ```
    pub fn unique(&mut self) -> Result<(), EmptyContainer> {
        if self.len() < 2 {
            return Err(EmptyContainer);
        }

        let mut curr = self.head();
        while let Some(node) = curr {
            match *node.next() {
                Some(next) if next.value() == node.value() => drop(self.unlink(next)),
                next => curr = next,
            }
        }

        Ok(())
    }
}

impl<T> DoublyLinkedList<T> {
    /// Sorts the list with the provided comparison function. The sort is stable.
    ///
    /// The list is kept as a single chain: a sorted prefix followed by the unsorted rest. Each
    /// node after the prefix is compared against it, scanning backwards from the end of the
    /// prefix, and then relinked immediately after the last element that doesn't compare greater.
    /// No values are moved and nothing is allocated.
    ///
    /// Every comparison happens while the list is fully linked, so if `compare` panics the list
    /// is left valid, holding all of its elements in an unspecified order.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let Full(contents) = &mut self.state else {
            return;
        };
        if contents.len.get() < 2 {
            return;
        }

        log::trace!("sorting list of {}", contents.len.get());

        let mut sorted_tail = contents.head;
        while let Some(node) = *sorted_tail.next() {
            if compare(node.value(), sorted_tail.value()) != Ordering::Less {
                sorted_tail = node;
                continue;
            }

            // Scan backwards so that equal elements land after those already placed.
            let mut after = *sorted_tail.prev();
            while let Some(candidate) = after {
                if compare(node.value(), candidate.value()) == Ordering::Less {
                    after = *candidate.prev();
                } else {
                    break;
                }
            }

            let next = *node.next();
            *sorted_tail.next_mut() = next;
            match next {
                Some(next) => *next.prev_mut() = Some(sorted_tail),
                None => contents.tail = sorted_tail,
            }

            // after lies before sorted_tail, so the node following it always exists.
            let before = match after {
                Some(prev) => *prev.next(),
                None => Some(contents.head),
            };
            *node.prev_mut() = after;
            *node.next_mut() = before;
            match after {
                Some(prev) => *prev.next_mut() = Some(node),
                None => contents.head = node,
            }
            if let Some(before) = before {
                *before.prev_mut() = Some(node);
            }
        }
    }
}
