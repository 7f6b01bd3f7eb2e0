/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

use crate::error::TrieError;
use std::fmt;

/// A trie key: a finite sequence of elements, each in `[0, N)`, bit-packed
/// into a byte buffer.
///
/// `N` is the trie arity and must be one of 2, 4, 16 or 256; any other value
/// fails to compile at the first use of the key. One backing byte holds
/// `8 / log2(N)` elements:
///
/// | arity | bits per element | elements per byte | packing order           |
/// |-------|------------------|-------------------|-------------------------|
/// | 2     | 1                | 8                 | most significant first  |
/// | 4     | 2                | 4                 | most significant first  |
/// | 16    | 4                | 2                 | **low nibble first**    |
/// | 256   | 8                | 1                 | whole byte              |
///
/// The arity-16 low-nibble-first order is inherited from the wire layout of
/// earlier implementations and is kept for compatibility.
///
/// The logical length is tracked separately from the buffer, so a key built
/// from raw bytes and a key built by pushing the same elements one by one
/// compare equal even when the final byte is only partially occupied.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Key<const N: usize> {
    bytes: Vec<u8>,
    len: usize,
}

impl<const N: usize> Key<N> {
    /// Bits occupied by one element. Rejects illegal arities at compile time.
    const BITS: usize = match N {
        2 => 1,
        4 => 2,
        16 => 4,
        256 => 8,
        _ => panic!("unsupported arity: the only legal values are 2, 4, 16 and 256"),
    };

    /// Elements packed into one backing byte.
    const PER_BYTE: usize = 8 / Self::BITS;

    /// Bit mask selecting a single element once shifted into place.
    const MASK: u8 = (N - 1) as u8;

    /// An empty key.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Build a key from raw bytes.
    ///
    /// The bytes are adopted verbatim; every byte contributes
    /// `8 / log2(N)` elements.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * Self::PER_BYTE,
        }
    }

    /// The trie arity this key is packed for.
    pub const fn arity() -> usize {
        N
    }

    /// Number of elements in the key.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the key has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.len = 0;
    }

    /// The backing byte buffer.
    ///
    /// If the element count is not a multiple of the per-byte capacity, the
    /// final byte is only partially occupied; vacated slots are kept zeroed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The element at `index`, or [`TrieError::ElementOutOfRange`] if the
    /// index is past the end of the key.
    pub fn try_element(&self, index: usize) -> Result<u8, TrieError> {
        if index >= self.len {
            return Err(TrieError::ElementOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.unpack(index))
    }

    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`; use [`Key::try_element`] for a
    /// fallible variant.
    pub fn element(&self, index: usize) -> u8 {
        match self.try_element(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// Extract the element at an in-range index.
    fn unpack(&self, index: usize) -> u8 {
        let byte = self.bytes[index / Self::PER_BYTE];
        if N == 16 {
            // Low nibble first, high nibble second.
            if index % 2 == 0 { byte & 0x0F } else { byte >> 4 }
        } else {
            let shift = (Self::PER_BYTE - 1 - index % Self::PER_BYTE) * Self::BITS;
            (byte >> shift) & Self::MASK
        }
    }

    /// The bit pattern of `element` when stored at slot `slot` of a byte.
    fn packed(element: u8, slot: usize) -> u8 {
        if N == 16 {
            (element & Self::MASK) << (4 * slot)
        } else {
            (element & Self::MASK) << ((Self::PER_BYTE - 1 - slot) * Self::BITS)
        }
    }

    /// Append one element.
    ///
    /// Allocates one more backing byte only when the current byte's slots
    /// are full. Values `>= N` are masked to the element width.
    pub fn push(&mut self, element: u8) {
        debug_assert!(
            (element as usize) < N,
            "element {element} is not in [0, {N})"
        );
        let slot = self.len % Self::PER_BYTE;
        let bits = Self::packed(element, slot);
        if slot == 0 {
            self.bytes.push(bits);
        } else if let Some(last) = self.bytes.last_mut() {
            *last |= bits;
        }
        self.len += 1;
    }

    /// Remove and return the last element, or `None` if the key is empty.
    ///
    /// The vacated slot is masked back to zero so that sibling elements
    /// packed into the same byte are untouched; the backing byte is dropped
    /// only once it holds no elements at all.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        let element = self.unpack(self.len - 1);
        self.len -= 1;
        if self.len % Self::PER_BYTE == 0 {
            self.bytes.pop();
        } else if let Some(last) = self.bytes.last_mut() {
            let slot = self.len % Self::PER_BYTE;
            *last &= !Self::packed(Self::MASK, slot);
        }
        Some(element)
    }

    /// Diagnostic hexadecimal rendering of the backing bytes.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + 2 * self.bytes.len());
        out.push_str("0x");
        for byte in &self.bytes {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }
}

impl<const N: usize> From<&[u8]> for Key<N> {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&str> for Key<N> {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl<const N: usize> fmt::Display for Key<N> {
    /// Lossy rendering of the backing bytes as UTF-8. Diagnostic only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

impl<const N: usize> fmt::Debug for Key<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key<{N}>({}, {} elements)", self.to_hex(), self.len)
    }
}
