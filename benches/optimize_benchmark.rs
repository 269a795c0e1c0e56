//! Benchmarks for the Monte Carlo simulator and the grid search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use budgetopt::optimizer::{optimize, OptimizerConfig};
use budgetopt::simulation::{simulate, SimulationConfig};
use budgetopt::Row;

fn sample_row() -> Row {
    Row {
        budget: 1_000_000.0,
        marketing_spend: 300_000.0,
        rnd_spend: 400_000.0,
        ops_spend: 300_000.0,
        marketing_revenue: 450_000.0,
        rnd_revenue: 600_000.0,
        ops_revenue: 330_000.0,
        ..Row::default()
    }
}

fn bench_simulate(c: &mut Criterion) {
    let row = sample_row();
    let mut group = c.benchmark_group("simulate");

    for iterations in [100, 1000, 3000] {
        let config = SimulationConfig::default().with_iterations(iterations);
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut rng = ChaCha8Rng::seed_from_u64(42);
                    simulate(black_box(&row), config, &mut rng).unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let row = sample_row();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let sim = simulate(&row, &SimulationConfig::default(), &mut rng).unwrap();
    let config = OptimizerConfig::default();

    c.bench_function("optimize_full_simplex", |b| {
        b.iter(|| optimize(black_box(&sim), black_box(&config)))
    });
}

criterion_group!(benches, bench_simulate, bench_optimize);
criterion_main!(benches);
