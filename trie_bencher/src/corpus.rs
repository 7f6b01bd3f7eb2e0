//! Corpus loading and generation for the benchmarks and the stats binary.

use rand::{Rng, SeedableRng, distributions::Alphanumeric, rngs::StdRng};
use std::io;
use std::path::Path;

/// Read key/value pairs from a loosely JSON-like text file.
///
/// See [`parse_pairs`] for the accepted format.
pub fn load_pairs(path: impl AsRef<Path>) -> io::Result<Vec<(String, String)>> {
    Ok(parse_pairs(&fs_err::read_to_string(path.as_ref())?))
}

/// Extract key/value pairs from loosely JSON-like text.
///
/// Each line contributes at most one pair: the first double-quoted string
/// on the line is the key, the second is the value, everything around and
/// between them is ignored. Lines with fewer than two quoted strings are
/// skipped. A `*.json` file of `"key": "value"` members qualifies, but so
/// does much sloppier input.
pub fn parse_pairs(contents: &str) -> Vec<(String, String)> {
    contents.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let mut fragments = line.split('"');
    fragments.next()?;
    let key = fragments.next()?;
    fragments.next()?;
    let value = fragments.next()?;
    Some((key.to_owned(), value.to_owned()))
}

/// Generate a deterministic corpus of alphanumeric words, for benchmarks
/// that must not depend on a data file being present.
///
/// The same `count` and `seed` always produce the same pairs.
pub fn synthetic_pairs(count: usize, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let len = rng.gen_range(1..=12);
            let word: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(len)
                .map(char::from)
                .collect();
            (word, format!("value-{i}"))
        })
        .collect()
}
