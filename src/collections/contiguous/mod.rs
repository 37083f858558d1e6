//! Contiguous collection types. Namely [`Vector`] for a contiguous collection that varies in size at
//! runtime and [`Array`] for one with a length fixed at compile time.
#![warn(missing_docs)]

pub mod array;
pub(crate) mod buffer;
pub mod vector;

#[doc(inline)]
pub use array::Array;
pub(crate) use buffer::Buffer;
#[doc(inline)]
pub use vector::Vector;
