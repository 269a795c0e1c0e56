//! Core types and utilities for BudgetOpt.

pub mod error;
pub mod types;

pub use error::{BudgetError, Result};
pub use types::*;
