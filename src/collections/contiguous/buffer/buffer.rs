use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned heap allocation of `cap` slots of `T`, none of which are considered initialized.
///
/// Buffer only manages memory. Tracking which slots hold live values (and dropping them) is the
/// responsibility of the owner, which for this crate is [`Vector`](super::super::Vector).
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `cap` | `O(1)` |
/// | `with_cap` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to grow or shrink in place, in which case nothing is
/// copied.
pub struct Buffer<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with capacity 0. Nothing is allocated.
    pub const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a Buffer with exactly `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Buffer<T> {
        let mut buf = Buffer::new();
        buf.realloc(cap);
        buf
    }

    /// Returns the number of slots in the Buffer.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a pointer to the first slot. The pointer is dangling if nothing is allocated.
    pub const fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// Changes the number of slots to `new_cap` as a single step: a new allocation is made, the
    /// contents of the first `min(cap, new_cap)` slots are carried over and the old allocation is
    /// released. Zero-sized types are never allocated and a capacity of 0 frees the allocation.
    ///
    /// Values in slots beyond `new_cap` are not dropped, the owner has to drop them first.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize) {
        let old_cap = self.cap;

        if size_of::<T>() == 0 {
            // Nothing to allocate, the dangling pointer stays valid for every slot.
            self.cap = new_cap;
            return;
        }

        let new_ptr = match (old_cap, new_cap) {
            (old, new) if old == new => return,
            (0, new) => {
                let layout = Buffer::<T>::make_layout(new);
                // SAFETY: Layout has non-zero size because both zero capacity and zero-sized types
                // are guarded against.
                let raw_ptr = unsafe { alloc::alloc(layout) };
                NonNull::new(raw_ptr.cast())
                    .unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
            (old, 0) => {
                // SAFETY: ptr was allocated in the global allocator with the layout for old, which
                // is non-zero in size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Buffer::<T>::make_layout(old)) }
                NonNull::dangling()
            },
            (old, new) => {
                let old_layout = Buffer::<T>::make_layout(old);
                let new_layout = Buffer::<T>::make_layout(new);
                // SAFETY: ptr was allocated with old_layout in the global allocator, the new size
                // is non-zero and was checked by Layout::array not to overflow isize::MAX.
                let raw_ptr = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };
                NonNull::new(raw_ptr.cast())
                    .unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        log::trace!(
            "buffer of {} reallocated: {old_cap} -> {new_cap} slots",
            std::any::type_name::<T>()
        );

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Creates the [`Layout`] for `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        if size_of::<T>() != 0 && self.cap != 0 {
            // SAFETY: ptr is allocated in the global allocator with the layout for cap, which is
            // non-zero in size.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Buffer::<T>::make_layout(self.cap)) }
        }
    }
}

impl<T> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}

// SAFETY: A Buffer uniquely owns its allocation, so it can be sent when T can.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: Buffer has no interior mutability, the allocation is only reachable through &mut self for
// writes.
unsafe impl<T: Sync> Sync for Buffer<T> {}
