use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::patterns;
use sort_test_tools::Sort;

fn bench_sort<S: Sort>(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{}-{pattern_name}-{test_len}", S::name()), |b| {
        b.iter_batched(
            || pattern_provider(test_len),
            |mut test_data| S::sort(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn full_benchmarks(c: &mut Criterion) {
    // Fresh inputs per sample; the fixed seed is for reproducing test
    // failures, not for benchmarks.
    patterns::disable_fixed_seed();

    let test_lens = [16, 128, 1_024, 4_096];

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", patterns::random),
        ("random_d10", |len| patterns::random_uniform(len, 0..10)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |len| patterns::saw_mixed(len, 5)),
    ];

    for test_len in test_lens {
        for (pattern_name, pattern_provider) in &pattern_providers {
            bench_sort::<sort_kit::bubble::SortImpl>(c, test_len, pattern_name, pattern_provider);
            bench_sort::<sort_kit::insertion::SortImpl>(
                c,
                test_len,
                pattern_name,
                pattern_provider,
            );
            bench_sort::<sort_kit::merge::SortImpl>(c, test_len, pattern_name, pattern_provider);
        }
    }
}

criterion_group!(benches, full_benchmarks);
criterion_main!(benches);
