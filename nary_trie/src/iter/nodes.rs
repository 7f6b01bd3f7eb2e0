use super::Cursor;
use crate::key::Key;
use std::iter::FusedIterator;
use std::rc::Rc;

/// Iterates over every node of a [`Trie`](crate::Trie), the root and the
/// payload-less interior nodes included, in pre-order by ascending child
/// slot, yielding each node's key and payload slot.
///
/// Invoke [`Trie::nodes`](crate::Trie::nodes) to create an instance.
pub struct Nodes<Data, const N: usize> {
    cursor: Cursor<Data, N>,
    exhausted: bool,
}

impl<Data, const N: usize> Nodes<Data, N> {
    pub(crate) fn new(cursor: Cursor<Data, N>) -> Self {
        Self {
            cursor,
            exhausted: false,
        }
    }
}

impl<Data, const N: usize> Iterator for Nodes<Data, N> {
    type Item = (Key<N>, Option<Rc<Data>>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        self.cursor.move_next();
        if self.cursor.is_exhausted() {
            // Stepping again would wrap around to the root; stay finished.
            self.exhausted = true;
            return None;
        }
        Some((self.cursor.key().clone(), self.cursor.data()))
    }
}

impl<Data, const N: usize> FusedIterator for Nodes<Data, N> {}

/// Iterates over every node of a [`Trie`](crate::Trie) in the exact mirror
/// of [`Nodes`]' order.
///
/// Invoke [`Trie::nodes_rev`](crate::Trie::nodes_rev) to create an instance.
pub struct RevNodes<Data, const N: usize> {
    cursor: Cursor<Data, N>,
    exhausted: bool,
}

impl<Data, const N: usize> RevNodes<Data, N> {
    pub(crate) fn new(cursor: Cursor<Data, N>) -> Self {
        Self {
            cursor,
            exhausted: false,
        }
    }
}

impl<Data, const N: usize> Iterator for RevNodes<Data, N> {
    type Item = (Key<N>, Option<Rc<Data>>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        self.cursor.move_prev();
        if self.cursor.is_exhausted() {
            self.exhausted = true;
            return None;
        }
        Some((self.cursor.key().clone(), self.cursor.data()))
    }
}

impl<Data, const N: usize> FusedIterator for RevNodes<Data, N> {}
