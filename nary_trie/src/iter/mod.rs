/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

//! Cursors and iterators over a [`Trie`](crate::Trie)'s node graph.
//!
//! All of them share one traversal contract: nodes are visited in pre-order
//! by ascending child slot (root first, then slot 0's whole subtree, then
//! slot 1's, and so on); reverse traversal visits the exact mirror order.
//! None of them rely on parent links (the node graph has none); instead
//! they reconstruct ancestor positions by re-descending from the root.

mod cursor;
mod lending;
mod nodes;
mod values;

pub use cursor::Cursor;
pub use lending::LendingValues;
pub use nodes::{Nodes, RevNodes};
pub use values::{RevValues, Values};
