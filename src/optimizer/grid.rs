//! Exhaustive grid search over the allocation simplex.
//!
//! Every integer triple (Marketing%, R&D%, Ops%) summing to 100 is scored
//! (5151 candidates); no sampling or pruning. The fixed 1% granularity over
//! three variables keeps brute force the simplest correct design, and the
//! fixed iteration order (m ascending, then r) pins down tie-break behavior.

use crate::core::types::{Allocation, AllocationResult, Department, DeptValues, SimulationResult};

/// A cross-department imbalance pattern penalized by the scorer.
///
/// Triggers when `over`'s share is strictly above `over_pct` while `under`'s
/// share is strictly below `under_pct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynergyRule {
    pub over: Department,
    pub over_pct: u8,
    pub under: Department,
    pub under_pct: u8,
}

impl SynergyRule {
    /// Whether the rule triggers for an allocation.
    #[inline]
    pub fn triggers(&self, alloc: Allocation) -> bool {
        alloc.pct(self.over) > self.over_pct && alloc.pct(self.under) < self.under_pct
    }
}

/// Configuration for the allocation scorer.
///
/// Defaults match the reference constants. Callers can vary sensitivity
/// without touching the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig {
    /// Multiplier on the quadratic risk penalty.
    pub risk_weight: f64,
    /// Capital-absorption elasticity: efficiency is `ln(1 + pct / elasticity)`.
    pub elasticity: f64,
    /// Fraction of the running score removed per triggered synergy rule.
    pub synergy_penalty: f64,
    /// Imbalance rules, evaluated in order. Penalties compound: each
    /// triggered rule is applied to the score as reduced by earlier rules.
    pub synergy_rules: Vec<SynergyRule>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            risk_weight: 1.0,
            elasticity: 12.0,
            synergy_penalty: 0.15,
            synergy_rules: vec![
                // Over-invested marketing without operational support.
                SynergyRule {
                    over: Department::Marketing,
                    over_pct: 60,
                    under: Department::Ops,
                    under_pct: 20,
                },
                // R&D spend unsupported by market reach.
                SynergyRule {
                    over: Department::Rnd,
                    over_pct: 50,
                    under: Department::Marketing,
                    under_pct: 20,
                },
                // Over-operationalized with no innovation pipeline.
                SynergyRule {
                    over: Department::Ops,
                    over_pct: 70,
                    under: Department::Rnd,
                    under_pct: 15,
                },
            ],
        }
    }
}

/// Per-unit ROI and risk, normalized away from absolute currency scale.
#[derive(Debug, Clone, Copy)]
struct PerUnit {
    roi: DeptValues,
    risk: DeptValues,
}

impl PerUnit {
    fn from_simulation(sim: &SimulationResult) -> Self {
        let mut roi = DeptValues::default();
        let mut risk = DeptValues::default();
        for dept in Department::ALL {
            // Spends arrive floored from the simulator; guard anyway so a
            // hand-built SimulationResult cannot divide by zero.
            let spend = sim.spend.get(dept).max(1.0);
            roi.set(dept, sim.expected.get(dept) / spend);
            risk.set(dept, sim.risk.get(dept) / spend);
        }
        Self { roi, risk }
    }
}

fn score_candidate(per_unit: &PerUnit, alloc: Allocation, config: &OptimizerConfig) -> f64 {
    let mut contrib = 0.0;
    let mut penalty = 0.0;
    for dept in Department::ALL {
        let pct = alloc.pct(dept) as f64;
        let eff = (1.0 + pct / config.elasticity).ln();
        contrib += per_unit.roi.get(dept) * eff;
        penalty += per_unit.risk.get(dept) * (pct / 100.0).powi(2);
    }
    let mut score = contrib - config.risk_weight * penalty;

    // Each triggered rule cuts the running score, so multiple rules compound.
    for rule in &config.synergy_rules {
        if rule.triggers(alloc) {
            score *= 1.0 - config.synergy_penalty;
        }
    }
    score
}

/// Score a specific allocation against a simulation result.
///
/// Exposed so callers can inspect candidates the search did not pick.
pub fn score_allocation(
    sim: &SimulationResult,
    alloc: Allocation,
    config: &OptimizerConfig,
) -> f64 {
    score_candidate(&PerUnit::from_simulation(sim), alloc, config)
}

/// Search the full allocation simplex and return the best-scoring split.
///
/// Strict greater-than comparison means the first maximum encountered wins
/// ties; for an all-zero simulation every candidate scores 0.0 and the first
/// enumerated triple (0, 0, 100) is returned.
pub fn optimize(sim: &SimulationResult, config: &OptimizerConfig) -> AllocationResult {
    let per_unit = PerUnit::from_simulation(sim);

    let mut best_score = f64::NEG_INFINITY;
    let mut best_alloc = Allocation::new(0, 0, 100);

    for m in 0..=100u8 {
        for r in 0..=(100 - m) {
            let o = 100 - m - r;
            let alloc = Allocation::new(m, r, o);
            let score = score_candidate(&per_unit, alloc, config);
            if score > best_score {
                best_score = score;
                best_alloc = alloc;
            }
        }
    }

    AllocationResult {
        allocation: best_alloc,
        score: best_score,
        total_expected_revenue: sim.total_expected_revenue(),
    }
}
