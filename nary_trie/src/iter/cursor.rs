/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

use crate::{
    error::TrieError,
    key::Key,
    node::{NodeRef, descend},
};
use std::rc::Rc;

/// A bidirectional position over every node reachable from a trie root.
///
/// Besides the nodes themselves there is a single "outside" position,
/// reachable from both ends: stepping forward from the last node or
/// backward from the root lands on it, stepping forward from it enters at
/// the root, stepping backward from it enters at the deepest last
/// descendant. A freshly created cursor starts outside.
///
/// Nodes store no parent links, so the cursor cannot follow a pointer
/// upward. Instead, every upward step pops the last element off the current
/// key, re-descends from the root to relocate the structural parent, and
/// resumes the slot scan next to the popped element. This trades O(depth)
/// work per ascent for a strictly acyclic ownership graph — the property
/// that keeps subtrie aliasing and cloning well-defined.
///
/// Stepping is reversible: `move_next` followed by `move_prev` (or the
/// other way around) returns the cursor to a position equal to the prior
/// one, with the same key.
///
/// The cursor holds an owning handle to its root and to the current node,
/// so the nodes it sits on cannot be freed under it. Structural growth
/// ahead of the cursor is tolerated; removing nodes on the cursor's own
/// path is not (the re-descent would cut the traversal short).
pub struct Cursor<Data, const N: usize> {
    root: NodeRef<Data, N>,
    node: Option<NodeRef<Data, N>>,
    key: Key<N>,
    /// Child slot at which the next forward scan resumes.
    resume: usize,
}

impl<Data, const N: usize> Cursor<Data, N> {
    pub(crate) fn new(root: NodeRef<Data, N>) -> Self {
        Self {
            root,
            node: None,
            key: Key::new(),
            resume: 0,
        }
    }

    /// Whether the cursor sits on the outside position.
    pub fn is_exhausted(&self) -> bool {
        self.node.is_none()
    }

    /// Key of the current node. Empty at the root and at the outside
    /// position.
    pub fn key(&self) -> &Key<N> {
        &self.key
    }

    /// Payload handle of the current node, if the cursor sits on a node and
    /// that node carries a payload.
    pub fn data(&self) -> Option<Rc<Data>> {
        self.node.as_ref().and_then(|node| node.borrow().data())
    }

    /// Handle to the current node.
    pub(crate) fn node(&self) -> Option<&NodeRef<Data, N>> {
        self.node.as_ref()
    }

    /// Position equality: both outside, or sitting on the identical node.
    ///
    /// Fails with [`TrieError::CursorMismatch`] when the cursors were not
    /// obtained from the same trie root.
    pub fn try_eq(&self, other: &Self) -> Result<bool, TrieError> {
        if !Rc::ptr_eq(&self.root, &other.root) {
            return Err(TrieError::CursorMismatch);
        }
        Ok(match (&self.node, &other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        })
    }

    /// Step to the next node in pre-order, or to the outside position after
    /// the last node. From the outside position, enters at the root.
    pub fn move_next(&mut self) {
        loop {
            let Some(node) = self.node.clone() else {
                self.node = Some(Rc::clone(&self.root));
                self.key.clear();
                self.resume = 0;
                return;
            };

            let next = node.borrow().first_child_from(self.resume);
            if let Some((slot, child)) = next {
                self.key.push(slot);
                self.resume = 0;
                self.node = Some(child);
                return;
            }

            if Rc::ptr_eq(&node, &self.root) {
                self.park();
                return;
            }

            // No unvisited slot here: relocate the parent by replaying the
            // shortened key from the root, and resume the scan one past the
            // slot we came down through.
            let Some(element) = self.key.pop() else {
                self.park();
                return;
            };
            self.resume = element as usize + 1;
            match descend(&self.root, &self.key) {
                Some(parent) => self.node = Some(parent),
                None => {
                    self.park();
                    return;
                }
            }
        }
    }

    /// Step to the previous node in pre-order, or to the outside position
    /// before the root. From the outside position, enters at the deepest
    /// last descendant.
    pub fn move_prev(&mut self) {
        // Highest slot the downward scan may still take on the current
        // level; `None` when every slot below the one we ascended from is
        // known to be empty.
        let mut limit: Option<usize>;

        match self.node.clone() {
            None => {
                self.node = Some(Rc::clone(&self.root));
                self.key.clear();
                limit = Some(N - 1);
            }
            Some(node) if Rc::ptr_eq(&node, &self.root) => {
                self.park();
                return;
            }
            Some(_) => {
                let Some(element) = self.key.pop() else {
                    self.park();
                    return;
                };
                limit = (element > 0).then(|| element as usize - 1);
                match descend(&self.root, &self.key) {
                    Some(parent) => self.node = Some(parent),
                    None => {
                        self.park();
                        return;
                    }
                }
            }
        }

        // Dive to the deepest last descendant within the slot limit.
        while let Some(up_to) = limit {
            let Some(node) = self.node.clone() else {
                break;
            };
            let next = node.borrow().last_child_up_to(up_to);
            match next {
                Some((slot, child)) => {
                    self.key.push(slot);
                    self.node = Some(child);
                    limit = Some(N - 1);
                }
                None => break,
            }
        }

        // Forward scans resume where the downward scan stopped. Clamped at
        // zero: every slot below it is known empty, so a following
        // `move_next` still lands on the correct sibling.
        self.resume = limit.unwrap_or(0);
    }

    /// Move to the outside position.
    fn park(&mut self) {
        self.node = None;
        self.key.clear();
        self.resume = 0;
    }
}

impl<Data, const N: usize> Clone for Cursor<Data, N> {
    fn clone(&self) -> Self {
        Self {
            root: Rc::clone(&self.root),
            node: self.node.clone(),
            key: self.key.clone(),
            resume: self.resume,
        }
    }
}

impl<Data, const N: usize> PartialEq for Cursor<Data, N> {
    /// Position equality, as defined by [`Cursor::try_eq`].
    ///
    /// # Panics
    ///
    /// Panics if the cursors were obtained from different tries; comparing
    /// such cursors is a programming error, not a normal `false`.
    fn eq(&self, other: &Self) -> bool {
        match self.try_eq(other) {
            Ok(eq) => eq,
            Err(err) => panic!("{err}"),
        }
    }
}
