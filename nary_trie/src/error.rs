/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

use thiserror::Error;

/// Failures surfaced by [`Key`](crate::Key), [`Trie`](crate::Trie) and
/// [`Cursor`](crate::iter::Cursor) operations.
///
/// All failures are reported synchronously to the caller of the operation
/// that detected them; none of them are transient, so nothing is retried
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// A key element accessor was given an index past the end of the key.
    ///
    /// Always a caller programming error.
    #[error("element index {index} is out of range for a key of {len} elements")]
    ElementOutOfRange {
        /// The requested element index.
        index: usize,
        /// The key's element count.
        len: usize,
    },

    /// No node exists at the requested key.
    ///
    /// Recoverable: callers typically treat this as plain absence. Note the
    /// distinction with a node that exists but carries no payload, which is
    /// not an error.
    #[error("no node exists at the requested key")]
    NodeNotFound,

    /// Two cursors obtained from different tries were compared.
    ///
    /// Always a caller programming error.
    #[error("cursors were not obtained from the same trie")]
    CursorMismatch,
}
