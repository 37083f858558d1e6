#![cfg(test)]

use super::*;
use crate::util::error::{EmptyContainer, IndexOutOfRange};

#[test]
fn test_checked_access() {
    let mut arr = Array::from([10, 20, 30]);
    assert_eq!(arr.at(1), Ok(&20));
    assert_eq!(
        arr.at(3),
        Err(IndexOutOfRange { index: 3, len: 3 }),
        "Access at the length should be out of range."
    );

    *arr.at_mut(0).unwrap() = 11;
    assert_eq!(arr.front(), Ok(&11));
    assert_eq!(arr.back(), Ok(&30));

    let empty = Array::<u8, 0>::new();
    assert!(empty.is_empty());
    assert_eq!(empty.front(), Err(EmptyContainer));
    assert_eq!(empty.back(), Err(EmptyContainer));
}

#[test]
fn test_fill_and_swap() {
    let mut a = Array::<u8, 4>::new();
    assert_eq!(&*a, &[0, 0, 0, 0]);
    a.fill(&3);

    let mut b = Array::from([1, 2, 3, 4]);
    a.swap(&mut b);
    assert_eq!(&*a, &[1, 2, 3, 4]);
    assert_eq!(&*b, &[3, 3, 3, 3]);
    assert_eq!(a.len(), a.max_len());
}

#[test]
fn test_copy_independence() {
    let original = Array::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    copy[0].push('!');
    assert_eq!(original[0], "a", "Modifying a copy shouldn't affect the original.");
    assert_eq!(copy.into_inner(), [String::from("a!"), String::from("b")]);
}
