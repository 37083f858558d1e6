#![cfg(test)]

use crate::collections::linked::DoublyLinkedList;
use crate::util::error::InvalidPosition;

#[cfg(feature = "contiguous")]
use crate::collections::contiguous::Vector;
#[cfg(not(feature = "contiguous"))]
type Vector<T> = Vec<T>;

fn contents<T: Clone>(list: &DoublyLinkedList<T>) -> Vector<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_traversal() {
    let list = DoublyLinkedList::from([1, 2, 3]);

    let mut cursor = list.begin();
    assert_eq!(cursor.current(), Some(&1));
    cursor.move_next().move_next();
    assert_eq!(cursor.current(), Some(&3));
    cursor.move_next();
    assert!(cursor.is_end());
    assert!(cursor == list.end(), "Moving past the tail should reach the end sentinel.");
    assert_eq!(cursor.current(), None);

    cursor.move_next();
    assert_eq!(cursor.current(), Some(&1), "Moving forward from the sentinel should wrap.");

    let mut cursor = list.end();
    cursor.move_prev();
    assert_eq!(cursor.current(), Some(&3));
    cursor.move_prev().move_prev().move_prev();
    assert!(cursor.is_end(), "Moving back from the head should reach the end sentinel.");

    let empty = DoublyLinkedList::<u8>::new();
    assert!(empty.begin() == empty.end(), "An empty list should begin at its end.");
}

#[test]
fn test_insert() {
    let mut list = DoublyLinkedList::from([2, 4]);

    let mut cursor = list.begin_mut();
    cursor.insert(1);
    assert_eq!(cursor.current(), Some(&1), "The cursor should move to the inserted element.");

    cursor.move_next().move_next();
    cursor.insert(3);
    cursor.move_next().move_next();
    assert!(cursor.is_end());
    cursor.insert(5);

    assert_eq!(*contents(&list), [1, 2, 3, 4, 5]);
    assert_eq!(list.front(), Ok(&1), "Inserting at begin should replace the head.");
    assert_eq!(list.back(), Ok(&5), "Inserting at end should replace the tail.");
    list.verify_double_links();

    let mut empty = DoublyLinkedList::new();
    empty.end_mut().insert('a');
    assert_eq!(*contents(&empty), ['a']);
    empty.verify_double_links();
}

#[test]
fn test_erase() {
    let mut list = DoublyLinkedList::from([1, 2, 3, 4]);

    let mut cursor = list.begin_mut();
    assert_eq!(cursor.erase(), Ok(1));
    assert_eq!(cursor.current(), Some(&2), "Erasing should move the cursor to the next element.");

    cursor.move_next();
    assert_eq!(cursor.erase(), Ok(3));
    assert_eq!(cursor.erase(), Ok(4));
    assert!(cursor.is_end());
    assert_eq!(cursor.erase(), Err(InvalidPosition), "The end sentinel can't be erased.");

    assert_eq!(*contents(&list), [2]);
    assert_eq!(list.back(), Ok(&2));
    list.verify_double_links();

    assert_eq!(list.begin_mut().erase(), Ok(2));
    assert!(list.is_empty());
    assert_eq!(
        list.begin_mut().erase(),
        Err(InvalidPosition),
        "Erasing begin on an empty list should fail."
    );
}

#[test]
fn test_insert_many() {
    let mut list = DoublyLinkedList::from([1, 5]);

    let mut cursor = list.end_mut();
    cursor.move_prev();
    cursor.insert_many([2, 3, 4]);
    assert_eq!(cursor.current(), Some(&4), "The cursor should finish on the last inserted value.");
    cursor.insert_many([]);
    assert_eq!(cursor.current(), Some(&4), "Inserting nothing shouldn't move the cursor.");

    assert_eq!(*contents(&list), [1, 2, 3, 4, 5]);
    list.verify_double_links();

    list.begin_mut().insert_many([-1, 0]);
    list.end_mut().insert_many([6, 7]);
    assert_eq!(*contents(&list), [-1, 0, 1, 2, 3, 4, 5, 6, 7]);
    list.verify_double_links();
}

#[test]
fn test_splice() {
    let mut list = DoublyLinkedList::from([1, 5]);
    let mut middle = DoublyLinkedList::from([2, 3, 4]);

    let mut cursor = list.begin_mut();
    cursor.move_next();
    cursor.splice(&mut middle);
    assert_eq!(cursor.current(), Some(&5), "Splicing shouldn't move the cursor.");

    assert_eq!(*contents(&list), [1, 2, 3, 4, 5]);
    assert!(middle.is_empty(), "The donor list should be left empty.");
    list.verify_double_links();

    let mut front = DoublyLinkedList::from([-1, 0]);
    let mut back = DoublyLinkedList::from([6]);
    list.begin_mut().splice(&mut front);
    list.end_mut().splice(&mut back);
    assert_eq!(*contents(&list), [-1, 0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(list.front(), Ok(&-1));
    assert_eq!(list.back(), Ok(&6));
    list.verify_double_links();

    let mut empty = DoublyLinkedList::new();
    empty.begin_mut().splice(&mut list);
    assert_eq!(empty.len(), 8);
    assert!(list.is_empty());
    empty.verify_double_links();
}

#[test]
fn test_handles_survive_unrelated_removal() {
    let mut list = DoublyLinkedList::from([1, 2, 3, 4]);

    let mut cursor = list.begin_mut();
    cursor.move_next().move_next();
    assert_eq!(cursor.current(), Some(&3));

    cursor.list.pop_front().unwrap();
    cursor.list.pop_back().unwrap();
    assert_eq!(
        cursor.current(),
        Some(&3),
        "Removing other nodes shouldn't affect the node under the cursor."
    );

    *cursor.current_mut().unwrap() = 30;
    assert_eq!(cursor.as_cursor().current(), Some(&30));
    assert_eq!(*contents(&list), [2, 30]);
}
