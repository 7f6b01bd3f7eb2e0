//! Supporting types and functions for benchmarking trie operations.
pub use bencher::OperationBencher;

pub mod bencher;
pub mod corpus;

// Convenient aliases for the trie configuration under benchmark:
// arity 16, string payloads.
pub type WordTrie = nary_trie::Trie16<String>;
pub type WordKey = nary_trie::Key16;
