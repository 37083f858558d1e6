#![cfg(test)]

use std::mem;

use super::*;
use crate::util::error::{EmptyContainer, IndexOutOfRange};
use crate::util::panic::assert_panics;
use crate::util::testing::{CountedDrop, ZeroSizedType};

#[test]
fn test_growth_policy() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    for k in 1..=100_usize {
        vec.push_back(k);
        assert_eq!(
            vec.cap(),
            k.next_power_of_two(),
            "Capacity after the k-th push should be the smallest power of two >= k."
        );
        assert!(vec.cap() >= vec.len());
    }
}

#[test]
fn test_push_pop_round_trip() {
    let mut vec = Vector::new();
    for i in 0..50 {
        vec.push_back(i);
    }
    for i in (0..50).rev() {
        assert_eq!(vec.pop_back(), Ok(i));
    }
    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.pop_back(), Err(EmptyContainer));
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.at(0), Ok(&1));
    assert_eq!(
        vec.at(vec.len()),
        Err(IndexOutOfRange { index: 3, len: 3 }),
        "Access at the length should be out of range."
    );
    *vec.at_mut(1).unwrap() = 20;
    assert_eq!(vec[1], 20);

    assert_eq!(vec.front(), Ok(&1));
    assert_eq!(vec.back(), Ok(&3));

    let empty = Vector::<u8>::new();
    assert_eq!(empty.at(0), Err(IndexOutOfRange { index: 0, len: 0 }));
    assert_eq!(empty.front(), Err(EmptyContainer));
    assert_eq!(empty.back(), Err(EmptyContainer));
}

#[test]
fn test_construction() {
    let vec = Vector::<i32>::repeat_default(4);
    assert_eq!(&*vec, &[0, 0, 0, 0]);
    assert_eq!(vec.cap(), 4);

    let vec = Vector::from(['a', 'b', 'c']);
    assert_eq!(&*vec, &['a', 'b', 'c']);
    assert_eq!(vec.cap(), 3, "Literal construction should allocate exactly what it needs.");

    let vec: Vector<_> = (0..5).collect();
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_insert() {
    let mut vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.cap(), 3);

    assert_eq!(vec.insert(0, 0), 0);
    assert_eq!(vec.cap(), 6, "Inserting into a full Vector should double its capacity.");
    assert_eq!(vec.insert(4, 4), 4, "Inserting at the end should append.");
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);

    assert_eq!(
        vec.try_insert(6, 6),
        Err(IndexOutOfRange { index: 6, len: 5 })
    );
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "A failed insert shouldn't change the Vector.");

    assert_panics!({
        let mut vec = Vector::from([1]);
        vec.insert(2, 0);
    });

    let mut vec = Vector::new();
    vec.insert(0, 'x');
    assert_eq!(vec.cap(), 1, "Inserting into an empty Vector should allocate one slot.");
}

#[test]
fn test_insert_many() {
    let mut vec = Vector::from([1, 2, 3, 4]);
    let after = vec.insert_many(2, ['a' as i32, 'b' as i32, 'c' as i32]);
    assert_eq!(vec.len(), 7);
    assert_eq!(after, 5, "The returned index should follow the inserted block.");
    assert_eq!(&vec[2..5], &['a' as i32, 'b' as i32, 'c' as i32]);
    assert_eq!(vec[after], 3);

    let end = vec.len();
    assert_eq!(vec.insert_many(end, [8, 9]), end + 2);
    assert_eq!(vec.back(), Ok(&9));

    assert_eq!(vec.insert_many(0, []), 0, "Inserting nothing should return the same index.");

    let len = vec.len();
    assert!(vec.try_insert_many(len + 1, [0]).is_err());
    assert_eq!(vec.len(), len);

    let mut vec = Vector::<u8>::new();
    vec.insert_many_back([1, 2, 3]);
    assert_eq!(&*vec, &[1, 2, 3]);
    assert_eq!(vec.cap(), 4);
}

#[test]
fn test_erase() {
    let mut vec = Vector::from([0, 1, 2, 3, 4]);
    assert_eq!(vec.erase(0), Some(0));
    assert_eq!(vec.erase(3), Some(4));
    assert_eq!(&*vec, &[1, 2, 3]);

    assert_eq!(vec.erase(3), None, "Erasing at the end should do nothing.");
    assert_eq!(vec.erase(usize::MAX), None);
    assert_eq!(&*vec, &[1, 2, 3]);
    assert_eq!(vec.cap(), 5, "Erasing shouldn't change the capacity.");
}

#[test]
fn test_capacity_management() {
    let mut vec = Vector::from([1, 2, 3]);

    vec.reserve(10);
    assert_eq!(vec.cap(), 10);
    vec.reserve(4);
    assert_eq!(vec.cap(), 10, "Reserving less than the capacity should do nothing.");
    assert_eq!(&*vec, &[1, 2, 3]);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3]);

    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 3, "Clearing should keep the capacity.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0);
}

#[test]
fn test_swap() {
    let mut a = Vector::from([1, 2, 3]);
    let mut b = Vector::with_cap(10);
    b.push_back(9);

    a.swap(&mut b);
    assert_eq!(&*a, &[9]);
    assert_eq!(a.cap(), 10);
    assert_eq!(&*b, &[1, 2, 3]);
    assert_eq!(b.cap(), 3);
}

#[test]
fn test_copy_and_move() {
    let original = Vector::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    assert_eq!(copy.cap(), original.cap());

    copy[0].push('!');
    copy.push_back(String::from("c"));
    assert_eq!(&*original, &["a", "b"], "Modifying a copy shouldn't affect the original.");

    let mut donor = copy;
    let taken = mem::take(&mut donor);
    assert_eq!(donor.len(), 0);
    assert_eq!(donor.cap(), 0, "A moved-from Vector should hold no storage.");
    assert_eq!(&*taken, &["a!", "b", "c"]);
}

#[test]
fn test_drops() {
    let (values, drops) = CountedDrop::batch(10);
    let mut vec: Vector<_> = values.collect();

    drop(vec.erase(0));
    assert_eq!(drops.get(), 1);
    drop(vec.pop_back());
    assert_eq!(drops.get(), 2);

    vec.clear();
    assert_eq!(drops.get(), 10, "Clearing should drop every element.");

    let (values, drops) = CountedDrop::batch(6);
    let vec: Vector<_> = values.collect();
    let mut iter = vec.into_iter();
    assert_eq!(iter.next().map(|v| v.id), Some(0));
    assert_eq!(iter.next_back().map(|v| v.id), Some(5));
    assert_eq!(iter.len(), 4);
    drop(iter);
    assert_eq!(drops.get(), 6, "Dropping a partially consumed IntoIter should drop the rest.");

    let (values, drops) = CountedDrop::batch(4);
    drop(values.collect::<Vector<_>>());
    assert_eq!(drops.get(), 4);
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..20 {
        vec.push_back(ZeroSizedType);
    }
    assert_eq!(vec.len(), 20);
    assert_eq!(vec.buf.ptr(), std::ptr::NonNull::dangling());
    assert_eq!(vec.into_iter().count(), 20);
}

#[test]
fn test_formatting() {
    let vec = Vector::from([1, 2]);
    assert_eq!(format!("{vec}"), "[1, 2]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 2 }");
}

#[test]
fn test_error_conversion() {
    use crate::util::error::ContainerError;

    let vec = Vector::<u8>::new();
    let err: ContainerError = vec.at(2).unwrap_err().into();
    assert!(err.is_index_out_of_range());
    assert_eq!(err.to_string(), "Index 2 out of range for collection with 0 elements!");

    let err = ContainerError::from(vec.back().unwrap_err());
    assert!(err.is_empty_container());
    assert!(matches!(EmptyContainer::try_from(err), Ok(EmptyContainer)));
}
