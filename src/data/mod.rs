//! Historical data loading and synthetic data generation.

pub mod loader;
pub mod synthetic;

pub use loader::{load_latest, load_rows};
pub use synthetic::{generate_csv, generate_rows, SyntheticConfig};
