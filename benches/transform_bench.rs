use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use keyset::{chunk, flatten, map, Keyset};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n % 4096)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("keyset_insert_10k", |b| {
        b.iter_batched(
            || lcg(1).take(10_000).map(key).collect::<Vec<_>>(),
            |keys| {
                let k: Keyset<String> = keys.into_iter().collect();
                black_box(k)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_contains(c: &mut Criterion) {
    c.bench_function("keyset_contains_hit", |b| {
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        let k: Keyset<String> = keys.iter().cloned().collect();
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let q = it.next().unwrap();
            black_box(k.contains(q.as_str()));
        })
    });
}

fn bench_chunk(c: &mut Criterion) {
    c.bench_function("keyset_chunk_10k_by_64", |b| {
        let values: Vec<u64> = lcg(3).take(10_000).map(|x| x % 512).collect();
        b.iter(|| black_box(chunk(values.iter().copied(), 64).unwrap()))
    });
}

fn bench_map(c: &mut Criterion) {
    c.bench_function("keyset_map_10k", |b| {
        let values: Vec<u64> = lcg(5).take(10_000).collect();
        b.iter(|| black_box(map(values.iter(), |v| v % 1024)))
    });
}

fn bench_flatten(c: &mut Criterion) {
    c.bench_function("keyset_flatten_100x100", |b| {
        let groups: Vec<Vec<u64>> = (0..100)
            .map(|i| lcg(i).take(100).map(|x| x % 2048).collect())
            .collect();
        b.iter(|| black_box(flatten(groups.iter().map(|g| g.iter().copied()))))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_contains, bench_chunk, bench_map, bench_flatten
}
criterion_main!(benches);
