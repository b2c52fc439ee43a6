use std::collections::BTreeMap;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tree_bimap::TreeBimap;

// Odd multiplier, so key -> value is a bijection on u32.
fn value_of(key: u32) -> u32 {
    key.wrapping_mul(2_654_435_761)
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_bimap");

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let n = 10_000_u32;
    let mut keys: Vec<u32> = (0..n).collect();
    keys.shuffle(&mut rng);

    let mut bimap = TreeBimap::new();
    let mut forward = BTreeMap::new();
    for &key in &keys {
        bimap.insert(key, value_of(key));
        forward.insert(key, value_of(key));
    }

    let key_query: Vec<u32> =
        keys.choose_multiple(&mut rng, 1000).copied().collect();
    let value_query: Vec<u32> =
        key_query.iter().map(|&key| value_of(key)).collect();

    group.bench_function(BenchmarkId::new("bimap", "get_value"), |b| {
        b.iter(|| {
            for key in &key_query {
                black_box(bimap.get_value(key));
            }
        })
    });
    group.bench_function(BenchmarkId::new("bimap", "get_key"), |b| {
        b.iter(|| {
            for value in &value_query {
                black_box(bimap.get_key(value));
            }
        })
    });
    // The conventional alternative: one ordered map and an O(n) scan
    // for each reverse lookup.
    group.bench_function(BenchmarkId::new("btreemap", "value_scan"), |b| {
        b.iter(|| {
            for value in &value_query {
                black_box(
                    forward
                        .iter()
                        .find(|&(_, v)| v == value)
                        .map(|(k, _)| k),
                );
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
