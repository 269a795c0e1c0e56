//! CSV loading of historical spend/revenue rows.

use std::path::Path;

use crate::core::error::{BudgetError, Result};
use crate::core::types::Row;

/// Load every row from a historical CSV file.
///
/// Non-numeric fields are a hard error; a meaningless row is worse than a
/// missing one. Absent columns deserialize to their defaults (0.0).
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: Row = record?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load the most recent (last) row from a historical CSV file.
pub fn load_latest(path: impl AsRef<Path>) -> Result<Row> {
    let path = path.as_ref();
    load_rows(path)?
        .pop()
        .ok_or_else(|| BudgetError::empty_data(path.display().to_string()))
}
