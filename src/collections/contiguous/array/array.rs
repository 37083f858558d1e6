use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};

use crate::util::error::{EmptyContainer, IndexOutOfRange};

/// A collection holding exactly `N` values inline. Nothing is ever allocated, so all methods are
/// `O(1)` except for [`fill`](Array::fill) and [`swap`](Array::swap), which are `O(N)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    pub(crate) inner: [T; N],
}

impl<T: Default, const N: usize> Array<T, N> {
    /// Creates an Array holding `N` default values.
    pub fn new() -> Array<T, N> {
        Array {
            inner: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> Array<T, N> {
    /// Returns the length of the Array, which is always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the largest length this Array could have, which is also `N`.
    pub const fn max_len(&self) -> usize {
        N
    }

    /// Returns true if `N` is 0.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index >= N`.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.at(0), Ok(&1));
    /// assert!(arr.at(3).is_err());
    /// ```
    pub const fn at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        if index < N {
            Ok(&self.inner[index])
        } else {
            Err(IndexOutOfRange { index, len: N })
        }
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index >= N`.
    pub const fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        if index < N {
            Ok(&mut self.inner[index])
        } else {
            Err(IndexOutOfRange { index, len: N })
        }
    }

    /// Returns a reference to the first element, which only fails for a zero-length Array.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.inner.first().ok_or(EmptyContainer)
    }

    /// Returns a reference to the last element, which only fails for a zero-length Array.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        self.inner.last().ok_or(EmptyContainer)
    }

    /// Returns a raw pointer to the first element.
    pub const fn as_ptr(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// Exchanges the elements of two Arrays, one by one.
    pub fn swap(&mut self, other: &mut Array<T, N>) {
        self.inner.swap_with_slice(&mut other.inner);
    }

    /// Unwraps the Array into the underlying fixed size array.
    pub fn into_inner(self) -> [T; N] {
        self.inner
    }
}

impl<T: Clone, const N: usize> Array<T, N> {
    /// Overwrites every element with a clone of `value`.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Array;
    /// let mut arr = Array::from([1, 2, 3]);
    /// arr.fill(&7);
    /// assert_eq!(&*arr, &[7, 7, 7]);
    /// ```
    pub fn fill(&mut self, value: &T) {
        self.inner.fill(value.clone());
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(value: [T; N]) -> Self {
        Array { inner: value }
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;

    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Debug, const N: usize> Debug for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.inner)
            .field("len", &N)
            .finish()
    }
}

impl<T: Debug, const N: usize> Display for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
