//! BudgetOpt - Monte Carlo budget allocation optimizer.
//!
//! This crate estimates expected return and risk of splitting a fixed budget
//! across three departments (Marketing, R&D, Operations) and picks the
//! integer percentage split with the best risk-adjusted score:
//! - Monte Carlo simulation of per-department revenue outcomes
//! - Exhaustive scoring of every split of 100% (5151 candidates)
//! - Diminishing-returns, concentration-risk, and synergy penalties
//! - CSV loading, synthetic data generation, console/JSON reporting
//! - Parallel batch processing of row collections

pub mod batch;
pub mod core;
pub mod data;
pub mod optimizer;
pub mod report;
pub mod simulation;

pub use crate::core::error::{BudgetError, Result};
pub use crate::core::types::{
    Allocation, AllocationResult, Currency, Department, DeptSamples, DeptValues, Row,
    SimulationResult,
};
pub use crate::optimizer::{optimize, score_allocation, OptimizerConfig, SynergyRule};
pub use crate::simulation::{simulate, SimulationConfig};
