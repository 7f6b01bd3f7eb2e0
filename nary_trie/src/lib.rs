/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

//! A fixed-arity, bit-packed prefix tree ("trie") mapping byte-sequence
//! keys to shared payloads.
//!
//! The arity (the number of child slots per node, and the radix of the key
//! elements) is a type-level parameter with four legal values: 2, 4, 16
//! and 256. [`Key`] packs key elements into bytes at 1, 2, 4 or 8 bits per
//! element accordingly, so the same byte string addresses a deeper,
//! narrower tree the smaller the arity gets.
//!
//! Beyond point lookup, insertion and removal, the container supports:
//!
//! * [`Trie::subtrie`] — extract a whole subtree as an *aliased view*:
//!   both tries share the node subgraph and see each other's mutations.
//! * [`Trie::clone`] — deep-copy the structure while sharing the payloads.
//! * [`Trie::merge`] — destructively move every non-colliding subtree from
//!   one trie into another, leaving the colliding subset behind.
//! * [`iter`] — ordered, bidirectional node- and value-level traversal that
//!   works without parent links, by re-descending from the root after every
//!   upward step.
//!
//! Nodes are owned through shared, reference-counted handles
//! (`Rc<RefCell<_>>`): the node graph reachable from one root is a strict
//! ownership tree, while distinct roots (a trie and its subtrie views)
//! may alias the same subgraph. The container is single-threaded by
//! construction; it never performs I/O and none of its operations block.
//!
//! ```
//! use nary_trie::{Key16, Trie16};
//!
//! let mut trie = Trie16::new();
//! assert!(trie.insert(&Key16::from("ABC"), "abc".to_string()));
//! assert!(!trie.insert(&Key16::from("ABC"), "clobber".to_string()));
//!
//! let sub = trie.subtrie(&Key16::from("AB")).unwrap();
//! assert_eq!(sub.get(&Key16::from("C")).as_deref().map(String::as_str), Some("abc"));
//! ```

mod error;
pub mod iter;
mod key;
mod node;
mod trie;

pub use error::TrieError;
pub use key::Key;
pub use trie::Trie;

/// Key packed for arity 2 (one bit per element).
pub type Key2 = Key<2>;
/// Key packed for arity 4 (two bits per element).
pub type Key4 = Key<4>;
/// Key packed for arity 16 (one nibble per element, low nibble first).
pub type Key16 = Key<16>;
/// Key packed for arity 256 (one byte per element).
pub type Key256 = Key<256>;

/// Trie with 2 child slots per node.
pub type Trie2<Data> = Trie<Data, 2>;
/// Trie with 4 child slots per node.
pub type Trie4<Data> = Trie<Data, 4>;
/// Trie with 16 child slots per node.
pub type Trie16<Data> = Trie<Data, 16>;
/// Trie with 256 child slots per node.
pub type Trie256<Data> = Trie<Data, 256>;
