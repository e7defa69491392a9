// Error taxonomy for the conversion pipeline
// Every variant here is fatal: it aborts the run and suppresses output.
// Per-row skips are not errors and live in extract::RowOutcome instead.
// Workbook and file I/O failures propagate as anyhow errors at the
// orchestrator boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The worksheet has no rows at all, so no headers can be resolved
    #[error("Header row is missing")]
    MissingHeaderRow,

    /// A required header name matched no text cell in row 0
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Both the primary and the fallback phone column failed validation.
    /// Unlike a bad email this aborts the run: a row with a good email but
    /// no reachable phone is data that must be corrected upstream.
    #[error("No valid phone number found for {first_name} {last_name} -- this must be resolved before any output is produced")]
    NoValidPhone {
        first_name: String,
        last_name: String,
    },

    /// One aggregated message covering every duplicate-email group
    #[error("{0}")]
    DuplicateEmails(String),
}
