//! Allocation throughput over growing listing catalogs.

#![allow(clippy::unwrap_used)]

use charter_alloc::{Listing, Money, Units, allocate};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn catalog(size: usize) -> Vec<Listing> {
    (0..size)
        .map(|i| {
            let capacity = (i % 17 + 1) as f64;
            let block_price = (i % 23) as f64;
            Listing::new(
                format!("supplier-{i}"),
                Units::new(capacity).unwrap(),
                Money::new(block_price).unwrap(),
            )
            .unwrap()
        })
        .collect()
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    for size in [16usize, 256, 4096] {
        let listings = catalog(size);
        let needed = Units::new(size as f64 * 4.0).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &listings,
            |b, listings| {
                b.iter(|| allocate(needed, listings).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);
