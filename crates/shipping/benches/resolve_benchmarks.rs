use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shiprate_shipping::{CarrierConfig, CostRule, Range, RangeBehavior, RateResolver, ShippingMethod};

/// Contiguous ranges of width 10 starting at 0, one price per range.
fn tiered_config(range_count: usize, behavior: RangeBehavior) -> CarrierConfig {
    let ranges = (0..range_count)
        .map(|i| Range {
            lower: (i * 10) as f64,
            upper: ((i + 1) * 10) as f64,
        })
        .collect();
    let amounts = (0..range_count).map(|i| 100 + i as u64).collect();

    CarrierConfig::ranged(
        ShippingMethod::Weight,
        ranges,
        behavior,
        CostRule::PerRange {
            amounts,
            add_base: true,
        },
    )
}

fn bench_range_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_lookup");
    let resolver = RateResolver::new();

    for range_count in [1usize, 10, 100, 1_000] {
        let config = tiered_config(range_count, RangeBehavior::ClampToLargest);
        let midpoint = (range_count * 5) as f64;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("in_range", range_count),
            &config,
            |b, config| {
                b.iter(|| {
                    resolver
                        .resolve(config, black_box(midpoint), black_box(250))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_out_of_range_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("out_of_range_policy");
    let resolver = RateResolver::new();

    let clamp = tiered_config(100, RangeBehavior::ClampToLargest);
    let disable = tiered_config(100, RangeBehavior::DisableCarrier);

    group.bench_function("clamp_to_largest", |b| {
        b.iter(|| resolver.resolve(&clamp, black_box(5_000.0), 0).unwrap());
    });

    group.bench_function("disable_carrier", |b| {
        b.iter(|| resolver.resolve(&disable, black_box(5_000.0), 0).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_range_lookup, bench_out_of_range_policy);
criterion_main!(benches);
