//! Rendering of allocation results for console and JSON output.
//!
//! All denomination conversion (percentages to currency, proportional risk
//! amounts) happens here; the core deals only in percentages and statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{
    Allocation, AllocationResult, Currency, Department, DeptValues, SimulationResult,
};

/// A fully denominated allocation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// Budget the percentages were applied to.
    pub budget: Currency,
    /// Recommended percentage split.
    pub allocation: Allocation,
    /// Currency allocation per department: `budget * pct / 100`.
    pub amounts: DeptValues,
    /// Proportional risk per department:
    /// `budget * risk_d / total_expected_revenue` (0.0 for a zero total).
    pub risk_amounts: DeptValues,
    /// Composite risk-adjusted score of the chosen split.
    pub score: f64,
    /// Expected total revenue from the simulation.
    pub total_expected_revenue: Currency,
}

impl AllocationReport {
    /// Build a report from the simulator and optimizer outputs.
    pub fn build(budget: Currency, sim: &SimulationResult, result: &AllocationResult) -> Self {
        let total = result.total_expected_revenue;
        let mut amounts = DeptValues::default();
        let mut risk_amounts = DeptValues::default();
        for dept in Department::ALL {
            amounts.set(dept, result.allocation.amount(dept, budget));
            let risk = if total > 0.0 {
                budget * sim.risk.get(dept) / total
            } else {
                0.0
            };
            risk_amounts.set(dept, risk);
        }
        Self {
            budget,
            allocation: result.allocation,
            amounts,
            risk_amounts,
            score: result.score,
            total_expected_revenue: total,
        }
    }
}

impl fmt::Display for AllocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Optimized Allocation ---")?;
        writeln!(f, "Recommended Percentage Split:")?;
        for dept in Department::ALL {
            writeln!(f, "  {:<12} {}%", dept.name(), self.allocation.pct(dept))?;
        }
        writeln!(f, "\nFund Allocation:")?;
        for dept in Department::ALL {
            writeln!(f, "  {:<12} {:.0}", dept.name(), self.amounts.get(dept))?;
        }
        writeln!(f, "\nRisk:")?;
        for dept in Department::ALL {
            writeln!(f, "  {:<12} {:.0}", dept.name(), self.risk_amounts.get(dept))?;
        }
        writeln!(f, "\nOptimization Score: {:.6}", self.score)?;
        write!(f, "Expected Total Revenue: {:.0}", self.total_expected_revenue)
    }
}
