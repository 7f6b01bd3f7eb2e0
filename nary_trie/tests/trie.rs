use nary_trie::{Key16, Key256, Trie16, Trie256, TrieError};
use std::collections::BTreeMap;
use std::rc::Rc;

#[test]
fn insert_then_lookup() {
    let mut trie: Trie16<i64> = Trie16::new();
    assert!(trie.insert(&Key16::from("foo"), 1));
    assert_eq!(trie.get(&Key16::from("foo")).as_deref(), Some(&1));
    assert_eq!(trie.get(&Key16::from("bar")), None);
    assert_eq!(trie.len(), 1);
}

#[test]
fn insert_refuses_to_overwrite() {
    let mut trie: Trie16<i64> = Trie16::new();
    let key = Key16::from("foo");
    assert!(trie.insert(&key, 1));
    assert!(!trie.insert(&key, 2));
    assert_eq!(trie.get(&key).as_deref(), Some(&1));
    assert_eq!(trie.len(), 1);
}

#[test]
fn insert_with_rewrites_the_payload_slot() {
    let mut trie: Trie16<i64> = Trie16::new();
    let key = Key16::from("foo");
    trie.insert(&key, 1);
    trie.insert_with(&key, |current| {
        Rc::new(current.as_deref().copied().unwrap_or(0) + 41)
    });
    assert_eq!(trie.get(&key).as_deref(), Some(&42));
}

#[test]
fn at_distinguishes_missing_node_from_missing_payload() {
    let mut trie: Trie16<i64> = Trie16::new();
    trie.insert(&Key16::from("ABC"), 7);

    // "AB" exists as an interior node, but carries no payload.
    assert_eq!(trie.at(&Key16::from("AB")), Ok(None));
    assert_eq!(trie.at(&Key16::from("ABC")).unwrap().as_deref(), Some(&7));
    assert_eq!(trie.at(&Key16::from("ZZ")), Err(TrieError::NodeNotFound));
    assert!(trie.has_node(&Key16::from("AB")));
    assert!(!trie.has_node(&Key16::from("ZZ")));
}

#[test]
fn remove_detaches_the_whole_subtree() {
    let mut trie: Trie16<i64> = Trie16::new();
    trie.insert(&Key16::from("AB"), 1);
    trie.insert(&Key16::from("ABC"), 2);
    trie.insert(&Key16::from("ABCD"), 3);
    trie.insert(&Key16::from("AX"), 4);

    assert!(trie.remove(&Key16::from("AB")));
    assert!(!trie.has_node(&Key16::from("AB")));
    assert!(!trie.has_node(&Key16::from("ABC")));
    assert!(!trie.has_node(&Key16::from("ABCD")));
    assert_eq!(trie.get(&Key16::from("AX")).as_deref(), Some(&4));
    assert_eq!(trie.len(), 1);

    // Nothing left to detach.
    assert!(!trie.remove(&Key16::from("AB")));
}

#[test]
fn remove_of_a_missing_key_is_false() {
    let mut trie: Trie16<i64> = Trie16::new();
    trie.insert(&Key16::from("AB"), 1);
    assert!(!trie.remove(&Key16::from("ABC")));
    assert!(!trie.remove(&Key16::from("ZZ")));
    assert_eq!(trie.len(), 1);
}

#[test]
fn remove_of_the_empty_key_is_false() {
    let mut trie: Trie16<i64> = Trie16::new();
    trie.insert(&Key16::new(), 1);
    assert!(!trie.remove(&Key16::new()));
    assert_eq!(trie.get(&Key16::new()).as_deref(), Some(&1));
}

#[test]
fn remove_leaves_dead_ancestors_in_place() {
    let mut trie: Trie16<i64> = Trie16::new();
    // "ABC" is 6 elements at arity 16: root + 6 nodes.
    trie.insert(&Key16::from("ABC"), 7);
    assert_eq!(trie.n_nodes(), 7);

    assert!(trie.remove(&Key16::from("ABC")));
    assert_eq!(trie.len(), 0);
    // The 5 payload-less ancestors stay until something reclaims them.
    assert_eq!(trie.n_nodes(), 6);
    assert!(trie.has_node(&Key16::from("AB")));
}

#[test]
fn clear_resets_to_a_single_empty_root() {
    let mut trie: Trie16<i64> = Trie16::new();
    trie.insert(&Key16::from("ABC"), 1);
    trie.insert(&Key16::from("DEF"), 2);
    trie.clear();
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.n_nodes(), 1);
    assert!(trie.is_empty());
    assert!(!trie.has_node(&Key16::from("A")));
}

#[test]
fn subtrie_is_an_aliasing_view() {
    let mut trie: Trie16<String> = Trie16::new();
    trie.insert(&Key16::from("ABC"), "abc".to_string());

    let mut sub = trie.subtrie(&Key16::from("AB")).unwrap();
    assert_eq!(sub.get(&Key16::from("C")).unwrap().as_str(), "abc");

    // Mutations through the view are visible in the original...
    sub.insert(&Key16::from("D"), "abd".to_string());
    assert_eq!(trie.get(&Key16::from("ABD")).unwrap().as_str(), "abd");

    // ...and mutations through the original are visible in the view.
    trie.insert(&Key16::from("ABE"), "abe".to_string());
    assert_eq!(sub.get(&Key16::from("E")).unwrap().as_str(), "abe");

    assert!(sub.remove(&Key16::from("C")));
    assert!(!trie.has_node(&Key16::from("ABC")));
}

#[test]
fn subtrie_of_a_missing_key_fails() {
    let trie: Trie16<i64> = Trie16::new();
    assert!(matches!(
        trie.subtrie(&Key16::from("A")),
        Err(TrieError::NodeNotFound)
    ));
}

#[test]
fn clone_is_structurally_independent() {
    let mut trie: Trie16<String> = Trie16::new();
    trie.insert(&Key16::from("ABC"), "abc".to_string());
    trie.insert(&Key16::from("DEF"), "def".to_string());

    let mut copy = trie.clone();
    assert_eq!(copy, trie);
    assert_eq!(copy.n_nodes(), trie.n_nodes());

    copy.insert(&Key16::from("GHI"), "ghi".to_string());
    copy.remove(&Key16::from("ABC"));
    assert_eq!(trie.get(&Key16::from("ABC")).unwrap().as_str(), "abc");
    assert!(!trie.has_node(&Key16::from("GHI")));

    trie.remove(&Key16::from("DEF"));
    assert_eq!(copy.get(&Key16::from("DEF")).unwrap().as_str(), "def");
}

#[test]
fn clone_shares_the_payload_objects() {
    let mut trie: Trie16<String> = Trie16::new();
    trie.insert(&Key16::from("ABC"), "abc".to_string());
    let copy = trie.clone();

    let original = trie.get(&Key16::from("ABC")).unwrap();
    let cloned = copy.get(&Key16::from("ABC")).unwrap();
    assert!(Rc::ptr_eq(&original, &cloned));
}

#[test]
fn merge_moves_non_colliding_subtrees_only() {
    let mut a: Trie16<String> = Trie16::new();
    a.insert(&Key16::from("ABC"), "a".to_string());
    a.insert(&Key16::from("DEF"), "d".to_string());

    let mut b: Trie16<String> = Trie16::new();
    b.insert(&Key16::from("DEF"), "d2".to_string());
    b.insert(&Key16::from("MNO"), "m".to_string());

    a.merge(&mut b);

    // The colliding key keeps the destination's payload...
    assert_eq!(a.get(&Key16::from("ABC")).unwrap().as_str(), "a");
    assert_eq!(a.get(&Key16::from("DEF")).unwrap().as_str(), "d");
    assert_eq!(a.get(&Key16::from("MNO")).unwrap().as_str(), "m");
    assert_eq!(a.len(), 3);

    // ...and the colliding node is all that remains in the source.
    assert_eq!(b.get(&Key16::from("DEF")).unwrap().as_str(), "d2");
    assert_eq!(b.len(), 1);
    assert!(!b.has_node(&Key16::from("MN")));
}

#[test]
fn merging_an_empty_trie_changes_nothing() {
    let mut a: Trie16<String> = Trie16::new();
    a.insert(&Key16::from("ABC"), "a".to_string());
    let snapshot = a.clone();

    let mut empty: Trie16<String> = Trie16::new();
    a.merge(&mut empty);

    assert_eq!(a, snapshot);
    assert_eq!(a.n_nodes(), snapshot.n_nodes());
    assert!(empty.is_empty());
}

#[test]
fn merging_into_an_empty_trie_moves_everything() {
    let mut a: Trie16<String> = Trie16::new();
    let mut b: Trie16<String> = Trie16::new();
    b.insert(&Key16::from("ABC"), "abc".to_string());
    b.insert(&Key16::from("ABD"), "abd".to_string());
    b.insert(&Key16::from("Z"), "z".to_string());

    a.merge(&mut b);

    assert_eq!(a.len(), 3);
    assert_eq!(a.get(&Key16::from("ABC")).unwrap().as_str(), "abc");
    assert_eq!(a.get(&Key16::from("ABD")).unwrap().as_str(), "abd");
    assert_eq!(a.get(&Key16::from("Z")).unwrap().as_str(), "z");
    assert!(b.is_empty());
}

#[test]
fn merge_twice_drains_the_source_once_the_collision_is_gone() {
    // Once the colliding key is removed from the destination, a second
    // merge empties the source.
    let mut data: Trie16<String> = Trie16::new();
    for key in ["ABC", "DEF", "GHI", "JKL", "PQR", "VWX"] {
        data.insert(&Key16::from(key), key.to_string());
    }
    let mut second: Trie16<String> = Trie16::new();
    for key in ["DEF", "MNO", "STU", "YZ "] {
        second.insert(&Key16::from(key), key.to_string());
    }

    data.merge(&mut second);
    assert_eq!(data.len(), 9);
    assert_eq!(second.len(), 1);
    assert_eq!(second.get(&Key16::from("DEF")).unwrap().as_str(), "DEF");

    data.remove(&Key16::from("DEF"));
    data.merge(&mut second);
    assert_eq!(data.len(), 9);
    assert_eq!(data.get(&Key16::from("DEF")).unwrap().as_str(), "DEF");
    assert!(second.is_empty());
}

#[test]
fn equality_is_structural() {
    let mut a: Trie16<i64> = Trie16::new();
    let mut b: Trie16<i64> = Trie16::new();
    a.insert(&Key16::from("AB"), 1);
    b.insert(&Key16::from("AB"), 1);
    assert_eq!(a, b);

    b.insert(&Key16::from("CD"), 2);
    assert_ne!(a, b);
}

#[derive(proptest_derive::Arbitrary, Debug)]
/// Operations applied to both the trie under test and a model `BTreeMap`.
enum TrieOperation {
    Insert(
        #[proptest(strategy = "proptest::collection::vec(97..=122u8, 0..8)")] Vec<u8>,
        i32,
    ),
    // Removal detaches a whole subtree, so the model drops every key the
    // removed one is a prefix of. The empty key is excluded: it addresses
    // the root, which `remove` refuses to detach.
    Remove(#[proptest(strategy = "proptest::collection::vec(97..=122u8, 1..8)")] Vec<u8>),
}

proptest::proptest! {
    #[test]
    /// At arity 256 node order is lexicographic byte order, so the trie
    /// must report the same entries as a `BTreeMap<Vec<u8>, i32>` driven
    /// with matching no-overwrite / remove-prefix semantics.
    fn behaves_like_a_btreemap(ops: Vec<TrieOperation>) {
        let mut trie: Trie256<i32> = Trie256::new();
        let mut model: BTreeMap<Vec<u8>, i32> = BTreeMap::new();

        for op in ops {
            match op {
                TrieOperation::Insert(bytes, value) => {
                    let key = Key256::from(bytes.as_slice());
                    let inserted = trie.insert(&key, value);
                    assert_eq!(inserted, !model.contains_key(&bytes));
                    model.entry(bytes).or_insert(value);
                }
                TrieOperation::Remove(bytes) => {
                    let key = Key256::from(bytes.as_slice());
                    trie.remove(&key);
                    model.retain(|stored, _| !stored.starts_with(&bytes));
                }
            }
        }

        let trie_entries: Vec<(Vec<u8>, i32)> = trie
            .values()
            .map(|(key, value)| (key.as_bytes().to_vec(), *value))
            .collect();
        let model_entries: Vec<(Vec<u8>, i32)> = model
            .iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect();
        assert_eq!(trie_entries, model_entries);
    }
}
