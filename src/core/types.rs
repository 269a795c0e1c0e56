//! Core data types for BudgetOpt.

use serde::{Deserialize, Serialize};

/// Type alias for currency values.
pub type Currency = f64;

/// The three departments a budget is split across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Marketing,
    /// Research and development.
    Rnd,
    /// Operations.
    Ops,
}

impl Department {
    /// All departments in canonical iteration order.
    pub const ALL: [Department; 3] = [Department::Marketing, Department::Rnd, Department::Ops];

    /// Human-readable department name.
    pub fn name(self) -> &'static str {
        match self {
            Department::Marketing => "Marketing",
            Department::Rnd => "R&D",
            Department::Ops => "Operations",
        }
    }
}

/// One `f64` value per department.
///
/// Used for spends, expected revenues, risks, and volatility fractions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeptValues {
    pub marketing: f64,
    pub rnd: f64,
    pub ops: f64,
}

impl DeptValues {
    /// Create from the three per-department values.
    pub fn new(marketing: f64, rnd: f64, ops: f64) -> Self {
        Self { marketing, rnd, ops }
    }

    /// Get the value for a department.
    #[inline]
    pub fn get(&self, dept: Department) -> f64 {
        match dept {
            Department::Marketing => self.marketing,
            Department::Rnd => self.rnd,
            Department::Ops => self.ops,
        }
    }

    /// Set the value for a department.
    pub fn set(&mut self, dept: Department, value: f64) {
        match dept {
            Department::Marketing => self.marketing = value,
            Department::Rnd => self.rnd = value,
            Department::Ops => self.ops = value,
        }
    }

    /// Sum across departments.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.marketing + self.rnd + self.ops
    }

    /// Scale every value by a constant.
    pub fn scale(&self, k: f64) -> Self {
        Self {
            marketing: self.marketing * k,
            rnd: self.rnd * k,
            ops: self.ops * k,
        }
    }
}

/// One historical observation of department spend and revenue.
///
/// Field names follow the CSV/JSON data contract. Missing numeric fields
/// deserialize to 0.0; the simulator floors spends before dividing, so a
/// zero or absent spend never produces a division by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Reporting year, carried by historical data files.
    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Reporting quarter (1-4).
    #[serde(rename = "Quarter", default, skip_serializing_if = "Option::is_none")]
    pub quarter: Option<u8>,
    /// Total budget for the period.
    #[serde(rename = "Budget", default)]
    pub budget: Currency,
    #[serde(rename = "Marketing_Spend", default)]
    pub marketing_spend: Currency,
    #[serde(rename = "RnD_Spend", default)]
    pub rnd_spend: Currency,
    #[serde(rename = "Ops_Spend", default)]
    pub ops_spend: Currency,
    #[serde(rename = "Marketing_Revenue", default)]
    pub marketing_revenue: Currency,
    #[serde(rename = "RnD_Revenue", default)]
    pub rnd_revenue: Currency,
    #[serde(rename = "Ops_Revenue", default)]
    pub ops_revenue: Currency,
}

impl Row {
    /// Spend for a department, as recorded (not floored).
    #[inline]
    pub fn spend(&self, dept: Department) -> Currency {
        match dept {
            Department::Marketing => self.marketing_spend,
            Department::Rnd => self.rnd_spend,
            Department::Ops => self.ops_spend,
        }
    }

    /// Revenue for a department, as recorded.
    #[inline]
    pub fn revenue(&self, dept: Department) -> Currency {
        match dept {
            Department::Marketing => self.marketing_revenue,
            Department::Rnd => self.rnd_revenue,
            Department::Ops => self.ops_revenue,
        }
    }
}

/// Raw Monte Carlo revenue draws, one ordered sequence per department.
///
/// Kept for downstream visualization (histograms); the optimizer reads only
/// the summary statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeptSamples {
    pub marketing: Vec<f64>,
    pub rnd: Vec<f64>,
    pub ops: Vec<f64>,
}

impl DeptSamples {
    /// Draws for a department.
    pub fn get(&self, dept: Department) -> &[f64] {
        match dept {
            Department::Marketing => &self.marketing,
            Department::Rnd => &self.rnd,
            Department::Ops => &self.ops,
        }
    }

    pub(crate) fn get_mut(&mut self, dept: Department) -> &mut Vec<f64> {
        match dept {
            Department::Marketing => &mut self.marketing,
            Department::Rnd => &mut self.rnd,
            Department::Ops => &mut self.ops,
        }
    }
}

/// Result of a Monte Carlo simulation over one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Sample mean of simulated revenue per department (absolute currency).
    pub expected: DeptValues,
    /// Sample standard deviation of simulated revenue per department
    /// (absolute currency; 0.0 when fewer than two samples exist).
    pub risk: DeptValues,
    /// Full ordered draw sequences per department.
    pub samples: DeptSamples,
    /// Floored spends used to normalize ROI.
    pub spend: DeptValues,
}

impl SimulationResult {
    /// Unweighted sum of the expected revenues.
    #[inline]
    pub fn total_expected_revenue(&self) -> Currency {
        self.expected.sum()
    }
}

/// An integer percentage split of the budget. Components sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub marketing_pct: u8,
    pub rnd_pct: u8,
    pub ops_pct: u8,
}

impl Allocation {
    /// Create an allocation. Debug builds assert the components sum to 100.
    pub fn new(marketing_pct: u8, rnd_pct: u8, ops_pct: u8) -> Self {
        debug_assert_eq!(marketing_pct as u16 + rnd_pct as u16 + ops_pct as u16, 100);
        Self { marketing_pct, rnd_pct, ops_pct }
    }

    /// Percentage share for a department.
    #[inline]
    pub fn pct(&self, dept: Department) -> u8 {
        match dept {
            Department::Marketing => self.marketing_pct,
            Department::Rnd => self.rnd_pct,
            Department::Ops => self.ops_pct,
        }
    }

    /// Currency amount allocated to a department out of `budget`.
    #[inline]
    pub fn amount(&self, dept: Department, budget: Currency) -> Currency {
        budget * self.pct(dept) as f64 / 100.0
    }
}

/// The optimizer's output: best split found, its score, and the expected
/// total revenue carried through unchanged for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub allocation: Allocation,
    /// Composite risk-adjusted score (dimensionless).
    pub score: f64,
    /// Sum of the three expected revenues from the simulation, not reduced
    /// by the chosen percentages.
    pub total_expected_revenue: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dept_values_accessors() {
        let mut v = DeptValues::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(Department::Marketing), 1.0);
        assert_eq!(v.get(Department::Rnd), 2.0);
        assert_eq!(v.get(Department::Ops), 3.0);
        assert_eq!(v.sum(), 6.0);

        v.set(Department::Rnd, 5.0);
        assert_eq!(v.rnd, 5.0);

        let scaled = v.scale(2.0);
        assert_eq!(scaled.marketing, 2.0);
        assert_eq!(scaled.ops, 6.0);
    }

    #[test]
    fn test_row_deserialize_defaults() {
        // Missing revenue fields default to 0.0.
        let row: Row = serde_json::from_str(r#"{"Budget": 1000.0, "Marketing_Spend": 300.0}"#)
            .expect("row should parse");
        assert_eq!(row.budget, 1000.0);
        assert_eq!(row.marketing_spend, 300.0);
        assert_eq!(row.rnd_spend, 0.0);
        assert_eq!(row.marketing_revenue, 0.0);
        assert!(row.year.is_none());
    }

    #[test]
    fn test_allocation_amount() {
        let alloc = Allocation::new(30, 45, 25);
        assert_eq!(alloc.amount(Department::Marketing, 1_000_000.0), 300_000.0);
        assert_eq!(alloc.amount(Department::Rnd, 1_000_000.0), 450_000.0);
        assert_eq!(alloc.amount(Department::Ops, 1_000_000.0), 250_000.0);
    }
}
