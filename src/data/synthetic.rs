//! Synthetic historical data generation.
//!
//! Writes quarterly rows with a random budget split across the three
//! departments and revenues derived from spend via uniform multipliers.
//! Useful for demos and for exercising the pipeline without real data.

use std::path::Path;

use rand::Rng;

use crate::core::error::Result;
use crate::core::types::Row;

/// Configuration for the synthetic generator.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// Number of quarterly rows to emit.
    pub rows: usize,
    /// First reporting year; quarters advance 1-4 then roll the year.
    pub start_year: u16,
    /// Budget range, inclusive (whole currency units).
    pub budget_range: (u64, u64),
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            rows: 12,
            start_year: 2022,
            budget_range: (1_000_000_000, 10_000_000_000),
        }
    }
}

/// Generate synthetic rows.
///
/// Marketing takes 15-35% of the budget, R&D 20-40%, Ops the remainder.
/// Revenue multipliers: Marketing 1.1-1.5, R&D 0.8-2.0 (widest, matching its
/// simulation volatility), Ops 1.0-1.2. Values are rounded to whole units.
pub fn generate_rows<R: Rng + ?Sized>(config: &SyntheticConfig, rng: &mut R) -> Vec<Row> {
    let (lo, hi) = config.budget_range;
    (0..config.rows)
        .map(|i| {
            let year = config.start_year + (i / 4) as u16;
            let quarter = (i % 4) as u8 + 1;

            let budget = rng.gen_range(lo..=hi) as f64;
            let marketing = budget * rng.gen_range(0.15..0.35);
            let rnd = budget * rng.gen_range(0.20..0.40);
            let ops = budget - (marketing + rnd);

            Row {
                year: Some(year),
                quarter: Some(quarter),
                budget,
                marketing_spend: marketing.round(),
                rnd_spend: rnd.round(),
                ops_spend: ops.round(),
                marketing_revenue: (marketing * rng.gen_range(1.1..1.5)).round(),
                rnd_revenue: (rnd * rng.gen_range(0.8..2.0)).round(),
                ops_revenue: (ops * rng.gen_range(1.0..1.2)).round(),
            }
        })
        .collect()
}

/// Generate synthetic rows and write them to a CSV file.
pub fn generate_csv<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    config: &SyntheticConfig,
    rng: &mut R,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in generate_rows(config, rng) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
