//! # Error Types
//!
//! The layout engine itself never fails; these errors come from the layers
//! around it (reading input, writing the JSON report).

use thiserror::Error;

/// Main error type for candlelight operations
#[derive(Debug, Error)]
pub enum CandleError {
    /// Input could not be turned into card lines
    #[error("Invalid input: {0}")]
    Input(String),

    /// Report serialization error
    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
