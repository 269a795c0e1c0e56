//! Error types for BudgetOpt.

use thiserror::Error;

/// Result type alias for BudgetOpt operations.
pub type Result<T> = std::result::Result<T, BudgetError>;

/// Error types for the allocation pipeline.
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A row failed input validation (negative or non-finite field).
    #[error("Invalid row: {message}")]
    InvalidRow { message: String },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Empty data error.
    #[error("Empty data provided for {context}")]
    EmptyData { context: String },

    /// I/O failure while reading or writing data files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse failure (non-numeric field, malformed record).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encode/decode failure at the service boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BudgetError {
    /// Create an invalid row error.
    pub fn invalid_row(message: impl Into<String>) -> Self {
        Self::InvalidRow {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an empty data error.
    pub fn empty_data(context: impl Into<String>) -> Self {
        Self::EmptyData {
            context: context.into(),
        }
    }
}
