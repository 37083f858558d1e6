//! Position handles for a [`DoublyLinkedList`](super::DoublyLinkedList).
//!
//! A cursor points either at an element or at the end sentinel, a 'ghost' position one past the
//! last element. Moving forward from the sentinel wraps around to the first element and moving
//! backward from it reaches the last, so every position of the list can be visited in both
//! directions.
//!
//! [`Cursor`] borrows its list immutably, so any number of them may coexist. [`CursorMut`] borrows
//! its list mutably, which guarantees that no other handle can observe a node that it removes.

mod cursor;
mod cursor_mut;
mod tests;

pub use cursor::*;
pub use cursor_mut::*;
