use collection_utils::zip;
use criterion::{black_box, criterion_group, Criterion};

fn benchmark_zip(c: &mut Criterion) {
    for width in [2, 8] {
        for len in [100, 10_000] {
            // Every other sequence is half as long, so half the slots are padding
            let sequences: Vec<Vec<u32>> = (0..width)
                .map(|i| (0..len / (1 + i % 2)).collect())
                .collect();
            c.bench_function(
                &format!("{}/width={} len={}", module_path!(), width, len),
                |b| {
                    b.iter(|| zip(black_box(&sequences)));
                },
            );
        }
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_zip,
}
