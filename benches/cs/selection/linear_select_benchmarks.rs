use bfprt::selection::{generate, Distribution};
use bfprt::{PivotStrategy, Selector};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_distribution(c: &mut Criterion, dist: Distribution) {
    let mut group = c.benchmark_group(format!("select_median/{}", dist.name()));

    for &size in &[1_000usize, 10_000, 100_000] {
        let data = generate(dist, size, 42);
        let k = (size + 1) / 2;

        for strategy in [PivotStrategy::NestedMedians, PivotStrategy::SelectedMedian] {
            let selector = Selector::new(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &data,
                |b, data| {
                    b.iter_batched_ref(
                        || data.clone(),
                        |v| black_box(selector.select_kth(v, k)),
                        BatchSize::LargeInput,
                    )
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("select_nth_unstable", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |v| *black_box(v.select_nth_unstable(k - 1).1),
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sort_unstable", size), &data, |b, data| {
            b.iter_batched_ref(
                || data.clone(),
                |v| {
                    v.sort_unstable();
                    black_box(v[k - 1])
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    bench_distribution(c, Distribution::Random { max: 1_000_000 });
    bench_distribution(c, Distribution::ManyDuplicates);
    bench_distribution(c, Distribution::Descending);
    bench_distribution(c, Distribution::Bimodal);
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
