//! Restricted views over a [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList).
//!
//! Both adapters own exactly one list and forward every operation to it, so they share its
//! complexity and error behaviour.

mod queue;
mod stack;

#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
