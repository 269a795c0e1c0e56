//! Monte Carlo simulation of department revenue outcomes.

pub mod monte_carlo;

pub use monte_carlo::{simulate, SimulationConfig};
