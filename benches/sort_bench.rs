use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sorting_comparison::Algorithm;
use sorting_comparison::generate::random_array_with;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort 1000 random ints");
    let input = random_array_with(&mut StdRng::seed_from_u64(1), 1_000, 10_000);
    for algorithm in Algorithm::all() {
        group.bench_with_input(BenchmarkId::from_parameter(algorithm), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                black_box(algorithm.sort(&mut v));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
