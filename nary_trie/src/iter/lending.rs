/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

use super::Cursor;
use crate::key::Key;
use lending_iterator::prelude::*;
use std::rc::Rc;

/// Iterates over the payload-carrying nodes in forward node order, with
/// minimal cloning.
///
/// Unlike [`Values`](super::Values), this iterator lets you borrow the
/// current key, rather than having to clone it for every entry.
///
/// Invoke [`Trie::lending_values`](crate::Trie::lending_values) to create an
/// instance.
pub struct LendingValues<Data, const N: usize> {
    cursor: Cursor<Data, N>,
    exhausted: bool,
}

impl<Data, const N: usize> LendingValues<Data, N> {
    pub(crate) fn new(cursor: Cursor<Data, N>) -> Self {
        Self {
            cursor,
            exhausted: false,
        }
    }
}

// The [`LendingIterator`] trait allows us to hand out a reference to the
// key kept inside the cursor; the [`Iterator`] trait cannot express an
// `Item` that borrows from the iterator itself.
#[gat]
impl<Data, const N: usize> LendingIterator for LendingValues<Data, N> {
    type Item<'next>
    where
        Self: 'next,
    = (&'next Key<N>, Rc<Data>);

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if self.exhausted {
            return None;
        }
        loop {
            self.cursor.move_next();
            if self.cursor.is_exhausted() {
                self.exhausted = true;
                return None;
            }
            if let Some(data) = self.cursor.data() {
                return Some((self.cursor.key(), data));
            }
        }
    }
}
