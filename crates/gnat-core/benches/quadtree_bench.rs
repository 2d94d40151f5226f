//! Quadtree insert and range-query benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gnat_core::{BoundingBox, NeuronId, PairTree, SpikePair, Timestamp};

fn pairs_for_train(len: u64) -> Vec<SpikePair> {
    // Spikes at 0, 7, 14, ... produce len * (len - 1) / 2 pairs
    let train: Vec<u64> = (0..len).map(|i| i * 7).collect();
    let mut pairs = Vec::new();
    for (i, &t1) in train.iter().enumerate() {
        for &t2 in &train[i + 1..] {
            pairs.push(
                SpikePair::new(
                    NeuronId::new(0),
                    Timestamp::from_ticks(t1),
                    Timestamp::from_ticks(t2),
                )
                .expect("distinct timestamps"),
            );
        }
    }
    pairs
}

fn top_box(len: u64) -> BoundingBox {
    let hi = (len - 1) as f64 * 7.0;
    BoundingBox::new(hi / 2.0, hi / 2.0, hi / 2.0 + 1.0)
}

fn bench_insert(c: &mut Criterion) {
    let pairs = pairs_for_train(100);
    let bbox = top_box(100);
    c.bench_function("insert_5k_pairs", |b| {
        b.iter(|| {
            let mut tree = PairTree::new(bbox);
            for p in &pairs {
                tree.insert(black_box(*p));
            }
            black_box(tree.len())
        })
    });
}

fn bench_range_query(c: &mut Criterion) {
    let pairs = pairs_for_train(100);
    let bbox = top_box(100);
    let mut tree = PairTree::new(bbox);
    for p in &pairs {
        tree.insert(*p);
    }

    c.bench_function("query_small_window", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            let query = BoundingBox::new(210.0, 420.0, 25.0);
            tree.for_each_in_range(black_box(&query), |_| hits += 1);
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_insert, bench_range_query);
criterion_main!(benches);
