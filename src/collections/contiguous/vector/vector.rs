use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Buffer;
use crate::util::error::{CapacityOverflow, EmptyContainer, IndexOutOfRange};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;
const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, backed by a [`Buffer<T>`] that it grows by doubling.
///
/// Positions within a Vector are plain `usize` offsets. Any method which reallocates or shifts
/// elements may leave an offset pointing at a different element than before, so only the offset
/// returned by the most recent call should be relied upon. Every positional method re-checks the
/// offset against the current length.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `k`: The number of items being inserted.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)`*, `O(n)` |
/// | `insert_many` | `O(k(n-i))` |
/// | `erase` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `swap` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, it has to reallocate, which
/// takes `O(n)`. Doubling keeps the total cost of `n` pushes at `O(n)`.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is always exactly the value
    /// produced by the growth policy or requested through [`reserve`](Vector::reserve) and
    /// [`shrink_to_fit`](Vector::shrink_to_fit).
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// for (i, cap) in [1, 2, 4, 4, 8].into_iter().enumerate() {
    ///     vec.push_back(i);
    ///     assert_eq!(vec.cap(), cap);
    /// }
    /// ```
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the largest length a Vector of `T` could theoretically reach.
    pub const fn max_len(&self) -> usize {
        match size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if `index` is out of range.
    ///
    /// Unchecked access is available through indexing (`vec[index]`), which panics rather than
    /// returning an error.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if `index` is out of
    /// range.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Returns a reference to the first element.
    pub fn front(&self) -> Result<&T, EmptyContainer> {
        self.first().ok_or(EmptyContainer)
    }

    /// Returns a mutable reference to the first element.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.first_mut().ok_or(EmptyContainer)
    }

    /// Returns a reference to the last element.
    pub fn back(&self) -> Result<&T, EmptyContainer> {
        self.last().ok_or(EmptyContainer)
    }

    /// Returns a mutable reference to the last element.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyContainer> {
        self.last_mut().ok_or(EmptyContainer)
    }

    /// Push the provided value onto the end of the Vector, growing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.buf.ptr().add(self.len).write(value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1]);
    /// assert_eq!(vec.pop_back(), Ok(1));
    /// assert_eq!(vec.pop_back(), Ok(0));
    /// assert!(vec.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }

        self.len -= 1;
        // SAFETY: len has just been decremented and the slot it indexes is initialized. Reading it
        // moves the value out, the slot is treated as uninitialized from now on.
        Ok(unsafe { self.buf.ptr().add(self.len).read() })
    }

    /// Inserts the provided value at `index`, shifting every following element one slot to the
    /// right and doubling the capacity first if the Vector is full. Returns the index of the
    /// inserted value. `index` may be equal to the length, which appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at `index`, returning an [`Err`] without modifying the Vector if
    /// `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, IndexOutOfRange> {
        self.check_position(index)?;

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source and destination ranges lie within the
        // allocation. ptr::copy handles the overlap.
        unsafe {
            let at = self.buf.ptr().as_ptr().add(index);
            ptr::copy(at, at.add(1), self.len - index);
            at.write(value);
        }
        self.len += 1;

        Ok(index)
    }

    /// Inserts every value from `values` in order, starting at `index`. Each value is inserted
    /// individually, so the Vector may reallocate several times. Returns the index immediately
    /// after the inserted block.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 5]);
    /// let after = vec.insert_many(1, [2, 3, 4]);
    /// assert_eq!(after, 4);
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> usize {
        self.try_insert_many(index, values).throw()
    }

    /// Inserts every value from `values` in order, starting at `index`, returning an [`Err`]
    /// without modifying the Vector if `index > len`.
    pub fn try_insert_many<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        values: I,
    ) -> Result<usize, IndexOutOfRange> {
        self.check_position(index)?;

        let mut pos = index;
        for value in values {
            pos = self.insert(pos, value) + 1;
        }
        Ok(pos)
    }

    /// Pushes every value from `values` onto the end of the Vector, in order.
    pub fn insert_many_back<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push_back(value);
        }
    }

    /// Removes and returns the element at `index`, moving all following values to fill in the
    /// gap. If `index` isn't the position of an element, the Vector is left unchanged and [`None`]
    /// is returned.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.erase(1), Some('e'));
    /// assert_eq!(vec.erase(4), Some(' '));
    /// assert_eq!(vec.erase(10), None);
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn erase(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        // SAFETY: index < len, so the read is of an initialized value and the shifted range
        // [index + 1, len) lies within the initialized part of the allocation.
        unsafe {
            let at = self.buf.ptr().as_ptr().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            self.len -= 1;
            Some(value)
        }
    }

    /// Ensures that the capacity of the Vector is at least `cap`. Does nothing if it already is.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, cap: usize) {
        if cap > self.cap() {
            self.buf.realloc(cap);
        }
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Drops every element, leaving the Vector empty. The capacity is kept.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        let elements = ptr::slice_from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len);
        // Zero len first so that a panicking drop can't lead to a double drop.
        self.len = 0;
        // SAFETY: The slice covers exactly the previously initialized elements, which are no
        // longer reachable through self.
        unsafe { ptr::drop_in_place(elements) }
    }

    /// Exchanges the contents of two Vectors, including their capacities, without moving any
    /// elements.
    pub fn swap(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Grows the Buffer to allow for the insertion of at least one more element. Starts at
    /// [`MIN_CAP`] and doubles from there.
    ///
    /// # Panics
    /// Panics if the new capacity overflows.
    pub(crate) fn grow(&mut self) {
        let new_cap = match self.cap() {
            0 => MIN_CAP,
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
        };
        self.buf.realloc(new_cap);
    }

    /// Checks that `index` refers to an element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfRange { index, len: self.len })
        }
    }

    /// Checks that `index` refers to an element or the end of the Vector.
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index <= self.len {
            Ok(())
        } else {
            Err(IndexOutOfRange { index, len: self.len })
        }
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector holding `len` default values, with capacity `len`.
    ///
    /// # Examples
    /// ```
    /// # use seq_containers::collections::contiguous::Vector;
    /// let vec = Vector::<u8>::repeat_default(3);
    /// assert_eq!(&*vec, &[0, 0, 0]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn repeat_default(len: usize) -> Vector<T> {
        let mut vec = Vector::with_cap(len);
        for _ in 0..len {
            // SAFETY: vec was created with capacity for len values.
            unsafe { vec.push_unchecked(T::default()) }
        }
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);
        for item in value {
            // SAFETY: vec was created with capacity for all N values.
            unsafe { vec.push_unchecked(item) }
        }
        vec
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push_back(item);
        }

        vec
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.insert_many_back(iter);
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Drop the initialized values in place, the Buffer deallocates itself afterwards.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within the Buffer.
        unsafe { slice::from_raw_parts(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and the mutable borrow of self prevents any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr().as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
