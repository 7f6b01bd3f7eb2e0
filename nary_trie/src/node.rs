/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

use crate::key::Key;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared owning handle to a node.
///
/// Child slots, subtrie views and merge's in-flight extraction stack may all
/// hold a handle to the same node; the node (and everything below it) is
/// freed when the last handle is dropped. The graph reachable from any
/// single root stays a strict tree: no parent links, no sharing between two
/// slots of the same root.
pub(crate) type NodeRef<Data, const N: usize> = Rc<RefCell<Node<Data, N>>>;

/// A single trie vertex: exactly `N` child slots plus an optional payload.
///
/// A node has no behavior beyond slot and payload access; every tree
/// algorithm lives on [`Trie`](crate::Trie) or in [`iter`](crate::iter).
#[derive(PartialEq)]
pub(crate) struct Node<Data, const N: usize> {
    children: [Option<NodeRef<Data, N>>; N],
    data: Option<Rc<Data>>,
}

impl<Data, const N: usize> Default for Node<Data, N> {
    fn default() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            data: None,
        }
    }
}

impl<Data, const N: usize> Node<Data, N> {
    /// Allocate a fresh node with an empty payload and all slots empty.
    pub(crate) fn new_ref() -> NodeRef<Data, N> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// A handle to the child at `element`, if the slot is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `element as usize >= N`.
    pub(crate) fn child(&self, element: u8) -> Option<NodeRef<Data, N>> {
        self.children[element as usize].clone()
    }

    /// Occupy the slot at `element`.
    pub(crate) fn set_child(&mut self, element: u8, node: NodeRef<Data, N>) {
        self.children[element as usize] = Some(node);
    }

    /// Detach and return the child at `element`, leaving the slot empty.
    ///
    /// Ownership of the whole subtree below the slot moves to the caller.
    pub(crate) fn take_child(&mut self, element: u8) -> Option<NodeRef<Data, N>> {
        self.children[element as usize].take()
    }

    /// A handle to the payload, if the node carries one.
    pub(crate) fn data(&self) -> Option<Rc<Data>> {
        self.data.clone()
    }

    /// Whether the node carries a payload.
    pub(crate) fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Replace the payload slot, returning its previous occupant.
    pub(crate) fn set_data(&mut self, data: Option<Rc<Data>>) -> Option<Rc<Data>> {
        std::mem::replace(&mut self.data, data)
    }

    /// The least occupied slot with index `>= from`, scanning forward.
    pub(crate) fn first_child_from(&self, from: usize) -> Option<(u8, NodeRef<Data, N>)> {
        self.children
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(i, child)| child.as_ref().map(|c| (i as u8, Rc::clone(c))))
    }

    /// The greatest occupied slot with index `<= up_to`, scanning backward.
    pub(crate) fn last_child_up_to(&self, up_to: usize) -> Option<(u8, NodeRef<Data, N>)> {
        self.children[..=up_to.min(N - 1)]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, child)| child.as_ref().map(|c| (i as u8, Rc::clone(c))))
    }
}

/// Relocate the node at `key` by replaying the key from `root`, one child
/// slot per element. Returns `None` the first time a required slot is empty.
///
/// This is the shared descent primitive: lookups use it directly and the
/// cursors use it to reconstruct a parent after an upward step, since nodes
/// store no parent links.
pub(crate) fn descend<Data, const N: usize>(
    root: &NodeRef<Data, N>,
    key: &Key<N>,
) -> Option<NodeRef<Data, N>> {
    let mut node = Rc::clone(root);
    for i in 0..key.len() {
        let child = node.borrow().child(key.element(i))?;
        node = child;
    }
    Some(node)
}
