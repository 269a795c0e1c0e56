//! Risk-adjusted allocation search.

pub mod grid;

pub use grid::{optimize, score_allocation, OptimizerConfig, SynergyRule};
