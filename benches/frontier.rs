use bidirectional_rcsp::{Direction, Label, Params, Search};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;

fn random_labels(rng: &mut StdRng, count: usize) -> Vec<Label> {
    let params = Arc::new(Params::default());
    (0..count)
        .map(|i| {
            let value = rng.gen_range(0.0..1000.0);
            let resources = vec![value, rng.gen_range(0.0..10.0)];
            Label::new(value, vec![0, i + 1], resources, Arc::clone(&params))
        })
        .collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_push_pop");
    let mut rng = StdRng::seed_from_u64(0x5155AA55);

    for size in [1_000usize, 10_000] {
        let labels = random_labels(&mut rng, size);
        for direction in [Direction::Forward, Direction::Backward] {
            let id = BenchmarkId::new(direction.to_string(), size);
            group.bench_with_input(id, &labels, |b, labels| {
                b.iter(|| {
                    let mut search = Search::new(direction, 4).unwrap();
                    for label in labels.iter().cloned() {
                        search.push_unprocessed(label);
                    }
                    while let Some(label) = search.pop_unprocessed() {
                        black_box(label);
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let labels = random_labels(&mut rng, 10_000);

    c.bench_function("frontier_replace_and_rebuild", |b| {
        b.iter(|| {
            let mut search = Search::new(Direction::Forward, 4).unwrap();
            search.replace_unprocessed(labels.clone());
            black_box(search.unprocessed().peek().map(|l| l.weight()));
        })
    });
}

fn bench_k_best(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let labels = random_labels(&mut rng, 10_000);

    let mut group = c.benchmark_group("k_best_record");
    for k in [2usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| {
                let mut search = Search::new(Direction::Forward, k).unwrap();
                for label in &labels {
                    search.record_intermediate(label);
                }
                black_box(search.k_best().len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_rebuild, bench_k_best);
criterion_main!(benches);
