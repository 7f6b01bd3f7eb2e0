/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

use crate::{
    error::TrieError,
    iter::{Cursor, LendingValues, Nodes, RevNodes, RevValues, Values},
    key::Key,
    node::{Node, NodeRef, descend},
};
use std::fmt;
use std::rc::Rc;

/// An in-memory map from bit-packed [`Key`]s to shared payloads, organized
/// as a prefix tree with exactly `N` child slots per node.
///
/// The arity `N` is a type-level parameter (legal values 2, 4, 16, 256, see
/// [`Key`]); two tries of different arity are different types and cannot be
/// merged or compared.
///
/// Nodes are owned through shared handles, which is what makes two of the
/// container's distinguishing operations well-defined:
///
/// * [`Trie::subtrie`] returns a second trie *aliasing* the subtree at a
///   key; mutations through either trie are visible through the other.
/// * [`Trie::merge`] moves whole subtrees out of another trie while both
///   containers stay structurally valid.
///
/// Payloads are held behind `Rc<Data>` handles, so [`Trie::clone`] copies
/// the node structure but shares the payloads with the original.
///
/// The container is single-threaded by construction (`Rc` is not `Send`);
/// callers that alias subtrees are responsible for not mutating a trie
/// while holding borrows obtained through one of its aliases.
pub struct Trie<Data, const N: usize> {
    root: NodeRef<Data, N>,
}

impl<Data, const N: usize> Default for Trie<Data, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Data, const N: usize> Trie<Data, N> {
    /// Create an empty trie.
    ///
    /// The root node is allocated eagerly: a fresh trie is a single node
    /// with an empty payload and all child slots empty.
    pub fn new() -> Self {
        Self {
            root: Node::new_ref(),
        }
    }

    /// A trie rooted at an existing node. Used by [`Trie::subtrie`].
    pub(crate) fn from_root(root: NodeRef<Data, N>) -> Self {
        Self { root }
    }

    /// The node at `key`, or `None` the first time a slot on the path is
    /// empty.
    pub(crate) fn get_node(&self, key: &Key<N>) -> Option<NodeRef<Data, N>> {
        descend(&self.root, key)
    }

    /// The node at `key`, allocating a fresh node for every empty slot
    /// along the path.
    pub(crate) fn add_node(&mut self, key: &Key<N>) -> NodeRef<Data, N> {
        let mut node = Rc::clone(&self.root);
        for i in 0..key.len() {
            let element = key.element(i);
            let child = {
                let mut slot_owner = node.borrow_mut();
                match slot_owner.child(element) {
                    Some(child) => child,
                    None => {
                        let child = Node::new_ref();
                        slot_owner.set_child(element, Rc::clone(&child));
                        child
                    }
                }
            };
            node = child;
        }
        node
    }

    /// Whether a node exists at `key`.
    ///
    /// The node may or may not carry a payload; see [`Trie::at`] for the
    /// distinction.
    pub fn has_node(&self, key: &Key<N>) -> bool {
        self.get_node(key).is_some()
    }

    /// The payload slot of the node at `key`.
    ///
    /// * `Err(NodeNotFound)` — no node exists at `key`.
    /// * `Ok(None)` — the node exists but carries no payload.
    /// * `Ok(Some(data))` — the node exists and carries `data`.
    pub fn at(&self, key: &Key<N>) -> Result<Option<Rc<Data>>, TrieError> {
        let node = self.get_node(key).ok_or(TrieError::NodeNotFound)?;
        let data = node.borrow().data();
        Ok(data)
    }

    /// The payload stored at `key`, if any.
    ///
    /// Collapses the two absence cases of [`Trie::at`] into `None`.
    pub fn get(&self, key: &Key<N>) -> Option<Rc<Data>> {
        self.at(key).ok().flatten()
    }

    /// Insert a payload at `key`, materializing the path to it.
    ///
    /// Returns `false` and leaves the existing payload untouched if the
    /// destination node already carries one; existing entries are never
    /// overwritten. Use [`Trie::insert_with`] to rewrite a payload slot.
    pub fn insert(&mut self, key: &Key<N>, value: impl Into<Rc<Data>>) -> bool {
        let node = self.add_node(key);
        let mut node = node.borrow_mut();
        if node.has_data() {
            return false;
        }
        node.set_data(Some(value.into()));
        true
    }

    /// Rewrite the payload slot at `key` through a callback, materializing
    /// the path to it.
    ///
    /// The callback receives the current payload handle (shared with any
    /// clones of this trie) and its return value becomes the new payload.
    pub fn insert_with<F>(&mut self, key: &Key<N>, f: F)
    where
        F: FnOnce(Option<Rc<Data>>) -> Rc<Data>,
    {
        let node = self.add_node(key);
        let mut node = node.borrow_mut();
        let current = node.set_data(None);
        node.set_data(Some(f(current)));
    }

    /// Detach the node at `key`, dropping the whole subtree below it in one
    /// step.
    ///
    /// Returns `false` if any node along the path, the target included,
    /// is missing. The root is not addressable by this operation: removing
    /// the empty key returns `false` (use [`Trie::clear`] to reset the
    /// trie).
    ///
    /// Ancestors of the removed node are left in place even when the
    /// removal leaves them with no payload and no children; such nodes
    /// still show up in node-level iteration and [`Trie::n_nodes`] until a
    /// later `remove`, [`Trie::merge`] or [`Trie::clear`] reclaims them.
    pub fn remove(&mut self, key: &Key<N>) -> bool {
        let mut parent_key = key.clone();
        let Some(element) = parent_key.pop() else {
            return false;
        };
        let Some(parent) = self.get_node(&parent_key) else {
            return false;
        };
        let detached = parent.borrow_mut().take_child(element);
        detached.is_some()
    }

    /// A view over the subtree rooted at the node at `key`.
    ///
    /// The returned trie shares the underlying nodes with `self`: this is
    /// an aliasing view, not a copy. Inserting through the view is visible
    /// through `self` at the concatenated key, and vice versa. The shared
    /// subgraph stays alive as long as either trie owns it.
    pub fn subtrie(&self, key: &Key<N>) -> Result<Self, TrieError> {
        let root = self.get_node(key).ok_or(TrieError::NodeNotFound)?;
        Ok(Self::from_root(root))
    }

    /// Move every subtree of `source` whose key path is absent in `self`
    /// into `self`, leaving exactly the colliding subset behind in
    /// `source`.
    ///
    /// The walk over `source` runs in reverse node order, so a node is
    /// always detached before any of its ancestors is considered and an
    /// extraction can never orphan an already-collected descendant. The
    /// collected nodes are then spliced into `self` in forward order:
    /// ancestors first, each one re-created by an allocate-on-demand
    /// descent before its slots and payload are moved in wholesale.
    ///
    /// Keys that already have a node in `self` are left untouched on both
    /// sides: existing payloads in `self` are never overwritten, and the
    /// colliding node (payload included) remains in `source`.
    ///
    /// This is an asymmetric, destructive merge, not a union, and it is not
    /// transactional: callers that must tolerate failure mid-way should
    /// clone the inputs first.
    pub fn merge(&mut self, source: &mut Self) {
        let mut pending: Vec<(Key<N>, NodeRef<Data, N>)> = Vec::new();

        let mut cursor = Cursor::new(Rc::clone(&source.root));
        loop {
            cursor.move_prev();
            if cursor.is_exhausted() {
                break;
            }
            let key = cursor.key().clone();
            if self.has_node(&key) {
                continue;
            }
            // The empty key is the source root, which self always has.
            let mut parent_key = key.clone();
            let Some(element) = parent_key.pop() else {
                continue;
            };
            let Some(parent) = source.get_node(&parent_key) else {
                continue;
            };
            let Some(detached) = parent.borrow_mut().take_child(element) else {
                continue;
            };
            pending.push((key, detached));
        }

        while let Some((key, node)) = pending.pop() {
            let destination = self.add_node(&key);
            if Rc::ptr_eq(&destination, &node) {
                continue;
            }
            let contents = std::mem::take(&mut *node.borrow_mut());
            *destination.borrow_mut() = contents;
        }
    }

    /// Replace the root with a fresh empty node, releasing ownership of the
    /// previous subtree.
    ///
    /// Subtrie views created earlier keep the old nodes alive; `self`
    /// simply stops referencing them.
    pub fn clear(&mut self) {
        self.root = Node::new_ref();
    }

    /// Number of payload-carrying nodes.
    ///
    /// Computed by full traversal, O(n) by design: nodes can be shared
    /// with subtrie views, so a cached counter could be invalidated by
    /// mutation through an alias.
    pub fn len(&self) -> usize {
        self.values().count()
    }

    /// Whether the trie stores no payloads at all.
    pub fn is_empty(&self) -> bool {
        self.values().next().is_none()
    }

    /// Total node count, the root included. O(n).
    pub fn n_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// A bidirectional node-level cursor, starting at the outside position
    /// before the root.
    pub fn cursor(&self) -> Cursor<Data, N> {
        Cursor::new(Rc::clone(&self.root))
    }

    /// Iterate over every node in pre-order by ascending child slot,
    /// yielding each node's key and (possibly absent) payload handle.
    pub fn nodes(&self) -> Nodes<Data, N> {
        Nodes::new(self.cursor())
    }

    /// Iterate over every node in the mirror of [`Trie::nodes`]' order.
    pub fn nodes_rev(&self) -> RevNodes<Data, N> {
        RevNodes::new(self.cursor())
    }

    /// Iterate over the payload-carrying nodes in forward node order,
    /// yielding key/payload pairs.
    pub fn values(&self) -> Values<Data, N> {
        Values::new(self.cursor())
    }

    /// Iterate over the payload-carrying nodes in reverse node order.
    pub fn values_rev(&self) -> RevValues<Data, N> {
        RevValues::new(self.cursor())
    }

    /// Iterate over the payload-carrying nodes, borrowing the current key
    /// from the iterator instead of cloning it for every entry.
    pub fn lending_values(&self) -> LendingValues<Data, N> {
        LendingValues::new(self.cursor())
    }
}

impl<Data, const N: usize> Clone for Trie<Data, N> {
    /// Deep-copy the node structure by walking every node of `self` and
    /// re-creating it in a fresh trie.
    ///
    /// Payloads are *not* deep-copied: the clone holds handles to the same
    /// payload objects as the original. The structures are fully
    /// independent: inserting into or removing from one never changes the
    /// other.
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        for (key, data) in self.nodes() {
            let node = clone.add_node(&key);
            node.borrow_mut().set_data(data);
        }
        clone
    }
}

impl<Data: PartialEq, const N: usize> PartialEq for Trie<Data, N> {
    /// Structural equality: same node shape, payloads compared by value.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.root, &other.root) || *self.root.borrow() == *other.root.borrow()
    }
}

impl<Data: Eq, const N: usize> Eq for Trie<Data, N> {}

impl<Data: fmt::Debug, const N: usize> fmt::Debug for Trie<Data, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, data) in self.values() {
            let hex = key.to_hex();
            map.entry(&hex, &data);
        }
        map.finish()
    }
}

impl<'t, Data, const N: usize> IntoIterator for &'t Trie<Data, N> {
    type Item = (Key<N>, Rc<Data>);
    type IntoIter = Values<Data, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
