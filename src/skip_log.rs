// Skip log - append-only side channel for skipped rows
// Write-only within this system; a failure to log is itself non-fatal
// and only reported to stderr.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Default log file name, created in the process working directory
pub const SKIP_LOG_FILE: &str = "skipped_rows.log";

/// Record one skipped row at `path`. Never fails the run.
pub fn log_skipped(path: impl AsRef<Path>, row: usize, reason: &str) {
    if let Err(e) = append_entry(path, row, reason) {
        eprintln!("Failed to log skipped row {}: {}", row, e);
    }
}

/// Append a single entry to the log file at `path`.
pub fn append_entry(path: impl AsRef<Path>, row: usize, reason: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Skipped row {}: {}", row, reason)
}

// ============================================================================
// TESTS
// ============================================================================
