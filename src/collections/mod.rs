//! Sequence containers and the errors they report.
//!
//! # Method
//! [`Vector`](contiguous::Vector) and [`Array`](contiguous::Array) implement
//! [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which provides slice functionality such
//! as iteration and sorting without repeating it here. The linked list can't do that, so it carries
//! its own iterators and algorithms.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, ContainerError, EmptyContainer, IndexOutOfRange, InvalidPosition,
};
