//! A module containing [`Array`], a collection with a length fixed at compile time.
//!
//! Owned iteration uses [`std::array::IntoIter`] and borrowed iteration uses the types from
//! [`std::slice`].
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
