use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned by checked index access when `index >= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfRange {}

/// Returned by operations that need at least one element (two for
/// [`unique`](crate::collections::linked::DoublyLinkedList::unique)) when the collection doesn't
/// have them.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Operation requires a non-empty collection!")]
pub struct EmptyContainer;

/// Returned when a position handle doesn't refer to an element that can be removed, such as the
/// end sentinel.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Position doesn't refer to an element!")]
pub struct InvalidPosition;

/// Raised when a length or capacity calculation would exceed the limits of the allocator.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Every error produced by this crate's collections, for callers that would rather deal with a
/// single type.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// See [`IndexOutOfRange`].
    IndexOutOfRange(IndexOutOfRange),
    /// See [`EmptyContainer`].
    EmptyContainer(EmptyContainer),
    /// See [`InvalidPosition`].
    InvalidPosition(InvalidPosition),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}
