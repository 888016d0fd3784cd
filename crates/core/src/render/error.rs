//! Render error types.

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A CSV record failed to encode.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// Encoded output could not be finalized as text.
    #[error("Report encoding failed: {0}")]
    Encode(String),
}
