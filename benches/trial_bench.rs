//! Trial throughput benchmarks: trials per second at several salvo sizes.
//!
//! Run with: `cargo bench --bench trial`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use safeguard::engine::config::SimulationConfig;
use safeguard::engine::rng::Rng;
use safeguard::engine::trial::run_trial;

fn config_for(missiles: u32, decoys_per_warhead: u32) -> SimulationConfig {
    SimulationConfig {
        missiles,
        mirvs_per_missile: 3,
        decoys_per_warhead,
        inventory: missiles * 12,
        seed: Some(7),
        ..SimulationConfig::default()
    }
    .normalized()
}

fn bench_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");
    group.sample_size(100);

    // Small raid: 30 objects
    let small = config_for(2, 4);
    group.bench_function("salvo_30_objects", |b| {
        let mut rng = Rng::new(7);
        b.iter(|| black_box(run_trial(&small, &mut rng)));
    });

    // Medium raid: 300 objects
    let medium = config_for(20, 4);
    group.bench_function("salvo_300_objects", |b| {
        let mut rng = Rng::new(7);
        b.iter(|| black_box(run_trial(&medium, &mut rng)));
    });

    // Saturation raid: 3000 objects
    let large = config_for(100, 9);
    group.bench_function("salvo_3000_objects", |b| {
        let mut rng = Rng::new(7);
        b.iter(|| black_box(run_trial(&large, &mut rng)));
    });

    group.finish();
}

criterion_group!(benches, bench_trial);
criterion_main!(benches);
