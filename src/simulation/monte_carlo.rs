//! Monte Carlo revenue simulation.
//!
//! Turns one historical row of spend/revenue figures into a distribution of
//! plausible future revenue outcomes per department. ROI per unit of spend is
//! sampled from a normal distribution around the historical base ROI, clamped
//! to a positive floor, then converted back to absolute revenue.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::core::error::{BudgetError, Result};
use crate::core::types::{DeptSamples, DeptValues, Department, Row, SimulationResult};

/// Configuration for the Monte Carlo simulator.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of independent draws per department.
    pub iterations: usize,
    /// Relative ROI volatility per department. R&D carries the highest
    /// uncertainty; that ordering is load-bearing for the risk penalties.
    pub volatility: DeptValues,
    /// Minimum sampled ROI per unit spend. Forbids non-positive returns.
    pub roi_floor: f64,
    /// Minimum spend used as an ROI denominator. A zero or missing spend is
    /// floored to this instead of dividing by zero.
    pub spend_floor: f64,
    /// When true, rows with negative or non-finite fields are rejected.
    /// When false (default, matching the reference behavior), they are
    /// accepted as given.
    pub validate: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 3000,
            volatility: DeptValues::new(0.08, 0.12, 0.04),
            roi_floor: 0.01,
            spend_floor: 1.0,
            validate: false,
        }
    }
}

impl SimulationConfig {
    /// Set the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Enable or disable input validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// Check a row for negative or non-finite fields.
fn validate_row(row: &Row) -> Result<()> {
    let fields = [
        ("Budget", row.budget),
        ("Marketing_Spend", row.marketing_spend),
        ("RnD_Spend", row.rnd_spend),
        ("Ops_Spend", row.ops_spend),
        ("Marketing_Revenue", row.marketing_revenue),
        ("RnD_Revenue", row.rnd_revenue),
        ("Ops_Revenue", row.ops_revenue),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(BudgetError::invalid_row(format!("{name} is not finite")));
        }
        if value < 0.0 {
            return Err(BudgetError::invalid_row(format!("{name} is negative ({value})")));
        }
    }
    Ok(())
}

/// Run the Monte Carlo simulation for one row.
///
/// The entropy source is caller-supplied so seeded generators reproduce the
/// draw sequence exactly. Risk uses the unbiased n-1 estimator and collapses
/// to 0.0 when `iterations < 2` rather than failing.
pub fn simulate<R: Rng + ?Sized>(
    row: &Row,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationResult> {
    if config.validate {
        validate_row(row)?;
    }

    let mut spend = DeptValues::default();
    let mut roi_base = DeptValues::default();
    for dept in Department::ALL {
        let floored = row.spend(dept).max(config.spend_floor);
        spend.set(dept, floored);
        roi_base.set(dept, row.revenue(dept) / floored);
    }

    let mut samples = DeptSamples::default();
    for dept in Department::ALL {
        samples.get_mut(dept).reserve(config.iterations);
    }

    // Draw order is per-iteration, Marketing then R&D then Ops, so a seeded
    // generator reproduces the reference sequence.
    for _ in 0..config.iterations {
        for dept in Department::ALL {
            let base = roi_base.get(dept);
            let sigma = (config.volatility.get(dept) * base).abs();
            let z: f64 = rng.sample(StandardNormal);
            let roi = (base + sigma * z).max(config.roi_floor);
            samples.get_mut(dept).push(roi * spend.get(dept));
        }
    }

    let mut expected = DeptValues::default();
    let mut risk = DeptValues::default();
    for dept in Department::ALL {
        let (mean, stdev) = summarize(samples.get(dept));
        expected.set(dept, mean);
        risk.set(dept, stdev);
    }

    Ok(SimulationResult { expected, risk, samples, spend })
}

/// Arithmetic mean and sample standard deviation (n-1 estimator).
/// Returns (0.0, 0.0) for empty input and stdev 0.0 for a single sample.
fn summarize(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    if n < 2 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, var.sqrt())
}
