//! Helpers shared by the unit tests of each collection.

use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized type, for checking that collections never allocate for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// A value which increments a shared counter when dropped, for checking that every element is
/// dropped exactly once.
#[derive(Debug)]
pub struct CountedDrop {
    pub id: usize,
    pub drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    /// Creates `count` values sharing a single drop counter, returning them alongside the
    /// counter.
    pub fn batch(count: usize) -> (impl Iterator<Item = CountedDrop>, Rc<Cell<usize>>) {
        let drops = Rc::new(Cell::new(0));
        let shared = Rc::clone(&drops);
        (
            (0..count).map(move |id| CountedDrop { id, drops: Rc::clone(&shared) }),
            drops,
        )
    }
}

impl Clone for CountedDrop {
    fn clone(&self) -> Self {
        CountedDrop {
            id: self.id,
            drops: Rc::clone(&self.drops),
        }
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// A value ordered only by `key`, so that sort stability can be observed through `tag`.
#[derive(Debug, Clone, Copy)]
pub struct Keyed {
    pub key: u32,
    pub tag: char,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}
