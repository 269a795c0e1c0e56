//! Integration tests for the Monte Carlo simulator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use budgetopt::simulation::{simulate, SimulationConfig};
use budgetopt::{Department, Row};

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

#[test]
fn test_expected_tracks_historical_roi() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let result = simulate(&sample_row(), &SimulationConfig::default(), &mut rng).unwrap();

    // With 3000 draws the sample mean should sit close to the historical
    // revenue for each department (ROI sampling is centered on it).
    assert!((result.expected.marketing - 450_000.0).abs() / 450_000.0 < 0.02);
    assert!((result.expected.rnd - 600_000.0).abs() / 600_000.0 < 0.02);
    assert!((result.expected.ops - 330_000.0).abs() / 330_000.0 < 0.02);
}

#[test]
fn test_risk_is_nonnegative_and_ordered_by_volatility() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let result = simulate(&sample_row(), &SimulationConfig::default(), &mut rng).unwrap();

    for dept in Department::ALL {
        assert!(result.risk.get(dept) >= 0.0);
    }

    // Relative risk (stdev / expected) must follow the volatility ordering:
    // R&D highest, Ops lowest.
    let rel = |dept: Department| result.risk.get(dept) / result.expected.get(dept);
    assert!(rel(Department::Rnd) > rel(Department::Marketing));
    assert!(rel(Department::Marketing) > rel(Department::Ops));
}

#[test]
fn test_low_iteration_counts_degrade_gracefully() {
    for iterations in [0, 1] {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let config = SimulationConfig::default().with_iterations(iterations);
        let result = simulate(&sample_row(), &config, &mut rng).unwrap();
        for dept in Department::ALL {
            assert_eq!(result.risk.get(dept), 0.0);
            assert_eq!(result.samples.get(dept).len(), iterations);
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let config = SimulationConfig::default().with_iterations(2);
    let result = simulate(&sample_row(), &config, &mut rng).unwrap();
    for dept in Department::ALL {
        assert!(result.risk.get(dept) >= 0.0);
    }
}

#[test]
fn test_samples_match_summary_statistics() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let config = SimulationConfig::default().with_iterations(500);
    let result = simulate(&sample_row(), &config, &mut rng).unwrap();

    for dept in Department::ALL {
        let samples = result.samples.get(dept);
        assert_eq!(samples.len(), 500);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - result.expected.get(dept)).abs() < 1e-9);
    }
}

#[test]
fn test_spend_floor_applies_to_zero_spend() {
    let row = Row {
        budget: 1000.0,
        marketing_revenue: 500.0,
        ..Row::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let result = simulate(&row, &SimulationConfig::default(), &mut rng).unwrap();

    for dept in Department::ALL {
        assert_eq!(result.spend.get(dept), 1.0);
    }
}

#[test]
fn test_draws_are_floored_at_roi_minimum() {
    // Huge volatility relative to base ROI: many raw draws go negative and
    // must clamp to roi_floor * spend.
    let row = Row {
        marketing_spend: 100.0,
        marketing_revenue: 1.0,
        ..Row::default()
    };
    let config = SimulationConfig {
        volatility: budgetopt::DeptValues::new(50.0, 0.12, 0.04),
        ..SimulationConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let result = simulate(&row, &config, &mut rng).unwrap();

    let floor = 0.01 * 100.0;
    for draw in result.samples.get(Department::Marketing) {
        assert!(*draw >= floor - 1e-12);
    }
    assert!(result.samples.marketing.iter().any(|d| (*d - floor).abs() < 1e-12));
}
