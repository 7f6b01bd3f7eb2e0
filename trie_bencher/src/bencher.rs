use crate::{WordKey, WordTrie};
use criterion::{BatchSize, BenchmarkGroup, Criterion, measurement::Measurement};
use std::hint::black_box;

/// A helper struct for benchmarking operations against a trie built from a
/// fixed corpus of key/value pairs.
pub struct OperationBencher {
    label: String,
    trie: WordTrie,
    pairs: Vec<(String, String)>,
}

impl OperationBencher {
    /// Initialize a new bencher by loading the corpus into a trie once;
    /// mutation benchmarks work on clones of it.
    pub fn new(label: String, pairs: Vec<(String, String)>) -> Self {
        let trie = load(&pairs);
        Self { label, trie, pairs }
    }

    /// Benchmark loading the whole corpus into a fresh trie.
    pub fn load_group(&self, c: &mut Criterion) {
        let mut group = c.benchmark_group(format!("{}|Load", self.label));
        load_benchmark(&mut group, &self.pairs);
        group.finish();
    }

    /// Benchmark the lookup operation.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn find_group(&self, c: &mut Criterion, word: &str, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.label));
        find_benchmark(&mut group, &self.trie, word);
        group.finish();
    }

    /// Benchmark the insert operation.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn insert_group(&self, c: &mut Criterion, word: &str, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.label));
        insert_benchmark(&mut group, &self.trie, word);
        group.finish();
    }

    /// Benchmark the subtree-removal operation.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn remove_group(&self, c: &mut Criterion, word: &str, label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.label));
        remove_benchmark(&mut group, &self.trie, word);
        group.finish();
    }

    /// Benchmark full node-order and value-order traversal.
    pub fn iterate_group(&self, c: &mut Criterion) {
        let mut group = c.benchmark_group(format!("{}|Iterate", self.label));
        iterate_benchmark(&mut group, &self.trie);
        group.finish();
    }

    /// Benchmark merging a second corpus into the trie.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn merge_group(&self, c: &mut Criterion, other: &[(String, String)], label: &str) {
        let mut group = c.benchmark_group(format!("{}|{label}", self.label));
        merge_benchmark(&mut group, &self.trie, other);
        group.finish();
    }
}

/// Load a corpus of pairs into a fresh trie. Duplicate keys keep their
/// first value.
pub fn load(pairs: &[(String, String)]) -> WordTrie {
    let mut trie = WordTrie::new();
    for (key, value) in pairs {
        trie.insert(&WordKey::from(key.as_str()), value.clone());
    }
    trie
}

fn load_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, pairs: &[(String, String)]) {
    group.bench_function("load", |b| {
        b.iter_batched(
            || pairs.to_vec(),
            |pairs| load(black_box(&pairs)),
            BatchSize::LargeInput,
        )
    });
}

fn find_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, trie: &WordTrie, word: &str) {
    let key = WordKey::from(word);
    group.bench_function("find", |b| {
        b.iter(|| trie.get(black_box(&key)).is_some())
    });
}

fn insert_benchmark<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    trie: &WordTrie,
    word: &str,
) {
    let key = WordKey::from(word);
    group.bench_function("insert", |b| {
        b.iter_batched_ref(
            || trie.clone(),
            |trie| trie.insert(black_box(&key), black_box(word.to_owned())),
            BatchSize::LargeInput,
        )
    });
}

fn remove_benchmark<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    trie: &WordTrie,
    word: &str,
) {
    let key = WordKey::from(word);
    group.bench_function("remove", |b| {
        b.iter_batched_ref(
            || trie.clone(),
            |trie| trie.remove(black_box(&key)),
            BatchSize::LargeInput,
        )
    });
}

fn iterate_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, trie: &WordTrie) {
    group.bench_function("nodes", |b| b.iter(|| black_box(trie).nodes().count()));
    group.bench_function("values", |b| b.iter(|| black_box(trie).values().count()));
    group.bench_function("values_rev", |b| {
        b.iter(|| black_box(trie).values_rev().count())
    });
}

fn merge_benchmark<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    trie: &WordTrie,
    other: &[(String, String)],
) {
    let source = load(other);
    group.bench_function("merge", |b| {
        b.iter_batched(
            || (trie.clone(), source.clone()),
            |(mut destination, mut source)| {
                destination.merge(black_box(&mut source));
                destination
            },
            BatchSize::LargeInput,
        )
    });
}
