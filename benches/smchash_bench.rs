use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use smchash::{smc_rand, smchash};

fn bench_hash_fixed_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("smchash/fixed_sizes");
    for &size in &[0usize, 8, 16, 17, 64, 128, 129, 1024, 1 << 16] {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| smchash(black_box(data)));
        });
    }
    group.finish();
}

fn bench_hash_short_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("smchash/short_inputs");
    for &size in &[0usize, 1, 3, 4, 7, 8, 16] {
        let data = vec![0x3Cu8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| smchash(black_box(data)));
        });
    }
    group.finish();
}

fn bench_rand_throughput(c: &mut Criterion) {
    c.bench_function("smc_rand/single_draw", |b| {
        let mut state = 0x1234_5678_9abc_def0u64;
        b.iter(|| black_box(smc_rand(&mut state)));
    });
}

criterion_group!(
    benches,
    bench_hash_fixed_sizes,
    bench_hash_short_inputs,
    bench_rand_throughput
);
criterion_main!(benches);
