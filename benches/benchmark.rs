use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use wordtree::WordTree;

const N: usize = 100_000;

fn random_words(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..10);
            (0..len).map(|_| rng.gen_range('a'..='z')).collect()
        })
        .collect()
}

pub fn benchmarks(c: &mut Criterion) {
    let words = random_words(N);

    c.bench_function("tree_insert", |b| {
        b.iter(|| {
            let mut tree = WordTree::new();
            for word in &words {
                tree.insert(word);
            }
            tree
        })
    });

    let tree: WordTree = words.iter().collect();

    c.bench_function("tree_get", |b| {
        b.iter(|| {
            for word in &words {
                black_box(tree.get(word));
            }
        })
    });

    c.bench_function("tree_iter", |b| {
        b.iter(|| {
            for word in &tree {
                black_box(word);
            }
        })
    });

    c.bench_function("tree_search_by_prefix", |b| {
        b.iter(|| black_box(tree.search_by_prefix(black_box("ab")).count()))
    });

    c.bench_function("tree_search_by_edit_distance", |b| {
        b.iter(|| black_box(tree.search_by_edit_distance(black_box("kitten")).count()))
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
