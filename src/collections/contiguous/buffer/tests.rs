#![cfg(test)]

use std::ptr::NonNull;

use super::*;
use crate::util::panic::assert_panics;
use crate::util::testing::ZeroSizedType;

#[test]
fn test_realloc_preserves_contents() {
    let mut buf = Buffer::<usize>::with_cap(4);
    for i in 0..4 {
        // SAFETY: All slots below cap are allocated.
        unsafe { buf.ptr().add(i).write(i * 10) }
    }

    buf.realloc(16);
    assert_eq!(buf.cap(), 16);
    for i in 0..4 {
        assert_eq!(
            // SAFETY: The first four slots were written before growing.
            unsafe { buf.ptr().add(i).read() },
            i * 10,
            "Growing should carry over every existing slot."
        );
    }

    buf.realloc(2);
    assert_eq!(buf.cap(), 2);
    for i in 0..2 {
        assert_eq!(
            // SAFETY: The first two slots survive shrinking.
            unsafe { buf.ptr().add(i).read() },
            i * 10,
            "Shrinking should keep the leading slots."
        );
    }
}

#[test]
fn test_realloc_to_zero() {
    let mut buf = Buffer::<u64>::with_cap(8);
    let old_ptr = buf.ptr();

    buf.realloc(8);
    assert_eq!(buf.ptr(), old_ptr, "Reallocating to the same size shouldn't move the buffer.");

    buf.realloc(0);
    assert_eq!(buf.cap(), 0);
    assert_eq!(buf.ptr(), NonNull::dangling(), "An empty buffer should hold a dangling pointer.");

    buf.realloc(3);
    assert_ne!(buf.ptr(), NonNull::dangling(), "Growing from zero should allocate again.");
}

#[test]
fn test_zst_never_allocates() {
    let mut buf = Buffer::<ZeroSizedType>::new();
    buf.realloc(1000);
    assert_eq!(buf.cap(), 1000);
    assert_eq!(buf.ptr(), NonNull::dangling(), "Zero-sized types shouldn't be allocated.");
}

#[test]
fn test_capacity_overflow() {
    assert_panics!({
        Buffer::<u32>::with_cap(isize::MAX as usize);
    });
}
