//! Hand-managed sequence containers: a growable [`Vector`](collections::contiguous::Vector), a
//! [`DoublyLinkedList`](collections::linked::DoublyLinkedList) with cursor-based positions and the
//! [`Stack`](collections::adapters::Stack) and [`Queue`](collections::adapters::Queue) adapters
//! built on top of it.
//!
//! # Method
//! Every container here manages its own memory. [`Vector`](collections::contiguous::Vector) sits on
//! a raw allocation that it grows by doubling, and the list allocates one node per element, linking
//! them with [`NonNull`](std::ptr::NonNull) pointers. Neither type is built on [`Vec`] or
//! [`LinkedList`](std::collections::LinkedList).
//!
//! # Error Handling
//! Recoverable conditions are reported through small, strongly typed error structs (usually ZSTs)
//! that implement [`Error`](std::error::Error), along with a
//! [`ContainerError`](collections::ContainerError) enum that any of them converts into. Where a
//! failure is almost always a programming mistake, such as inserting past the end of a Vector, the
//! plain method panics and a `try_` variant returns the [`Result`] instead.
//!
//! # Logging
//! Reallocations and the list's bulk operations (sorting, merging and splicing) emit `trace` level
//! records through the [`log`] facade. Nothing is printed unless the caller installs a logger.
//!
//! # Features
//! - `contiguous`: [`Vector`](collections::contiguous::Vector) and
//!   [`Array`](collections::contiguous::Array).
//! - `linked`: [`DoublyLinkedList`](collections::linked::DoublyLinkedList) and its cursors.
//! - `adapters`: [`Stack`](collections::adapters::Stack) and
//!   [`Queue`](collections::adapters::Queue), which need `linked`.
//!
//! All of them are enabled by default through `collections-all`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
