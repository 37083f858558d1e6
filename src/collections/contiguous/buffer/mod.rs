//! A module containing [`Buffer`], the raw storage behind [`Vector`](super::Vector).

mod buffer;
mod tests;

pub use buffer::*;
