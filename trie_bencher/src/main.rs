/*
 * Copyright (c) the nary_trie contributors.
 * All rights reserved.
 *
 * Licensed under the MIT license; see the LICENSE file in the repository
 * root for the full text.
*/

use trie_bencher::corpus;
use trie_bencher::{WordKey, bencher};

fn main() {
    compute_and_report_trie_statistics();
}

/// Build a trie from a key/value data file and report to stdout how many
/// pairs it stores and how many nodes it takes to store them.
///
/// The file path is the first command line argument, `data/pairs.txt` by
/// default. When no readable file is found, a deterministic synthetic
/// corpus stands in, so the binary always has something to report on.
fn compute_and_report_trie_statistics() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/pairs.txt".to_owned());
    let pairs = match corpus::load_pairs(&path) {
        Ok(pairs) => pairs,
        Err(error) => {
            eprintln!("{error}; falling back to a synthetic corpus");
            corpus::synthetic_pairs(10_000, 42)
        }
    };

    let raw_size: usize = pairs
        .iter()
        .map(|(key, value)| key.len() + value.len())
        .sum();
    let trie = bencher::load(&pairs);

    // Sanity check
    for (key, _) in &pairs {
        assert!(
            trie.get(&WordKey::from(key.as_str())).is_some(),
            "{key} not found after insertion"
        );
    }

    let mut nodes = 0;
    let mut stored = 0;
    for (_, data) in trie.nodes() {
        nodes += 1;
        if data.is_some() {
            stored += 1;
        }
    }
    println!(
        r#"Statistics:
- Raw corpus size: {:.3} MBs
- Pairs parsed: {}
- Pairs stored: {stored}
- Trie nodes:   {nodes}"#,
        raw_size as f64 / 1024. / 1024.,
        pairs.len(),
    );
}
