//! Error types for the upload/export pipeline.
//!
//! Ingestion failures are surfaced to the user as readable messages and halt
//! every downstream stage for that upload; the next interaction starts a
//! fresh attempt from ingestion.

use thiserror::Error;

/// Failures while turning an uploaded CSV into an [`EventTable`].
///
/// [`EventTable`]: crate::core::table::EventTable
#[derive(Debug, Error)]
pub enum IngestError {
    /// The header row is missing one of the required columns.
    #[error("required column `{0}` is missing from the CSV header")]
    MissingColumn(&'static str),

    /// A timestamp cell did not match any accepted format. `row` is the
    /// 1-based data row (excluding the header).
    #[error("row {row}: `{value}` is not a recognised timestamp")]
    InvalidTimestamp { row: usize, value: String },

    /// Malformed CSV (unbalanced quotes, ragged rows, invalid UTF-8, ...).
    #[error("could not read the CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures while serialising the filtered table back to CSV bytes.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write the CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not finalise the CSV buffer: {0}")]
    Buffer(String),
}
