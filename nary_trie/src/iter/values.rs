use super::{Cursor, Nodes, RevNodes};
use crate::key::Key;
use std::iter::FusedIterator;
use std::rc::Rc;

/// Iterates over the payload-carrying nodes of a [`Trie`](crate::Trie) in
/// forward node order, yielding key/payload pairs.
///
/// Nodes without a payload, the interior of the tree, are skipped.
///
/// Invoke [`Trie::values`](crate::Trie::values) to create an instance.
pub struct Values<Data, const N: usize> {
    nodes: Nodes<Data, N>,
}

impl<Data, const N: usize> Values<Data, N> {
    pub(crate) fn new(cursor: Cursor<Data, N>) -> Self {
        Self {
            nodes: Nodes::new(cursor),
        }
    }
}

impl<Data, const N: usize> Iterator for Values<Data, N> {
    type Item = (Key<N>, Rc<Data>);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .by_ref()
            .find_map(|(key, data)| data.map(|data| (key, data)))
    }
}

impl<Data, const N: usize> FusedIterator for Values<Data, N> {}

/// Iterates over the payload-carrying nodes of a [`Trie`](crate::Trie) in
/// reverse node order.
///
/// Invoke [`Trie::values_rev`](crate::Trie::values_rev) to create an
/// instance.
pub struct RevValues<Data, const N: usize> {
    nodes: RevNodes<Data, N>,
}

impl<Data, const N: usize> RevValues<Data, N> {
    pub(crate) fn new(cursor: Cursor<Data, N>) -> Self {
        Self {
            nodes: RevNodes::new(cursor),
        }
    }
}

impl<Data, const N: usize> Iterator for RevValues<Data, N> {
    type Item = (Key<N>, Rc<Data>);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes
            .by_ref()
            .find_map(|(key, data)| data.map(|data| (key, data)))
    }
}

impl<Data, const N: usize> FusedIterator for RevValues<Data, N> {}
