// Conversion orchestrator - wires the pipeline stages together
// worksheet 0 → resolve columns → extract rows → skip log → duplicate
// check → CSV. The writer only runs after every validation has passed,
// so no partial output exists on the error path itself.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Range, Reader, Xls};
use serde::{Deserialize, Serialize};

use crate::duplicates::check_duplicates;
use crate::extract::extract_students;
use crate::header::ColumnMap;
use crate::skip_log;
use crate::writer::write_csv_file;

/// Output file name, placed next to the input workbook
pub const OUTPUT_FILE_NAME: &str = "BlendedClassSetup.csv";

/// What a completed run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    /// Records written to the CSV
    pub written: usize,
    /// Rows excluded and logged to the skip log
    pub skipped: usize,
    /// Non-fatal advisories for the shell to surface
    pub advisories: Vec<String>,
}

/// Convert a legacy `.xls` roster export into `BlendedClassSetup.csv`
/// in the same directory as the input. Skipped rows are logged to
/// `skipped_rows.log` in the working directory.
pub fn convert_file(input: &Path) -> Result<ConversionReport> {
    let mut workbook: Xls<_> = open_workbook(input)
        .with_context(|| format!("Failed to open workbook: {}", input.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow::anyhow!("No worksheet found in {}", input.display()))?
        .with_context(|| format!("Failed to read worksheet from {}", input.display()))?;

    let output_path = input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(OUTPUT_FILE_NAME);

    convert_range(&range, &output_path, Path::new(skip_log::SKIP_LOG_FILE))
}

/// Run the pipeline over an already-loaded worksheet range.
///
/// Skip-log entries and advisory warnings are emitted before any fatal
/// escalation: a later abort never suppresses the side channel.
pub fn convert_range(
    range: &Range<Data>,
    output_path: &Path,
    skip_log_path: &Path,
) -> Result<ConversionReport> {
    let columns = ColumnMap::resolve(range)?;
    let mut summary = extract_students(range, &columns);

    for entry in &summary.skipped {
        skip_log::log_skipped(skip_log_path, entry.row, &entry.reason);
    }
    for advisory in &summary.advisories {
        println!("⚠️  Warning: {}", advisory);
    }

    if let Some(fatal) = summary.fatal.take() {
        return Err(fatal.into());
    }

    check_duplicates(&summary.students)?;

    write_csv_file(&summary.students, output_path)?;

    Ok(ConversionReport {
        output_path: output_path.to_path_buf(),
        written: summary.students.len(),
        skipped: summary.skipped.len(),
        advisories: summary.advisories,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Data {
        Data::String(value.to_string())
    }

    fn sheet(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    fn roster_header() -> Vec<Data> {
        vec![
            s("First Name"),
            s("Last Name"),
            s("Participants Email:"),
            s("Parent Email"),
            s("Participants Phone:"),
            s("Home Phone"),
        ]
    }

    fn jane_row() -> Vec<Data> {
        vec![
            s("Jane"),
            s("Doe"),
            s("jane@x.com"),
            s("parent@x.com"),
            s("555-123-4567"),
            s(""),
        ]
    }

    struct TestPaths {
        _dir: tempfile::TempDir,
        output: std::path::PathBuf,
        skip_log: std::path::PathBuf,
    }

    fn test_paths() -> TestPaths {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(OUTPUT_FILE_NAME);
        let skip_log = dir.path().join("skipped_rows.log");
        TestPaths {
            _dir: dir,
            output,
            skip_log,
        }
    }

    #[test]
    fn test_convert_range_writes_csv() {
        let paths = test_paths();

        let range = sheet(vec![roster_header(), jane_row()]);
        let report = convert_range(&range, &paths.output, &paths.skip_log).unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(report.skipped, 0);
        assert!(report.advisories.is_empty());

        let contents = std::fs::read_to_string(&paths.output).unwrap();
        assert_eq!(
            contents,
            "First Name,Last Name,Email,Phone\nJane,Doe,jane@x.com,5551234567\n"
        );
    }

    #[test]
    fn test_invalid_email_row_is_skipped_and_logged() {
        let paths = test_paths();

        let bad = vec![
            s("Bad"),
            s("Row"),
            s("not-an-email"),
            s(""),
            s("555-123-4567"),
            s(""),
        ];
        let range = sheet(vec![roster_header(), bad, jane_row()]);

        let report = convert_range(&range, &paths.output, &paths.skip_log).unwrap();

        // The run continues and produces output for the remaining rows
        assert_eq!(report.written, 1);
        assert_eq!(report.skipped, 1);
        let contents = std::fs::read_to_string(&paths.output).unwrap();
        assert_eq!(
            contents,
            "First Name,Last Name,Email,Phone\nJane,Doe,jane@x.com,5551234567\n"
        );

        // Exactly one log entry for the excluded row
        let log = std::fs::read_to_string(&paths.skip_log).unwrap();
        assert_eq!(log, "Skipped row 2: Invalid email: not-an-email\n");
    }

    #[test]
    fn test_duplicate_emails_abort_before_writing() {
        let paths = test_paths();

        let mut john = jane_row();
        john[0] = s("John");
        john[1] = s("Smith");
        let range = sheet(vec![roster_header(), jane_row(), john]);

        let err = convert_range(&range, &paths.output, &paths.skip_log).unwrap_err();

        assert!(err.to_string().contains("Duplicate email found for"));
        assert!(err.to_string().contains("Jane Doe and John Smith"));
        // No output file on the fatal path
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_unresolvable_phone_aborts_before_writing() {
        let paths = test_paths();

        let mut bad = jane_row();
        bad[4] = s("none");
        let range = sheet(vec![roster_header(), jane_row(), bad]);

        let err = convert_range(&range, &paths.output, &paths.skip_log).unwrap_err();

        assert!(err.to_string().contains("No valid phone number found"));
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_skips_are_logged_despite_phone_abort() {
        let paths = test_paths();

        let skipped = vec![
            s("Bad"),
            s("Row"),
            s("not-an-email"),
            s(""),
            s("555-123-4567"),
            s(""),
        ];
        let mut fatal = jane_row();
        fatal[4] = s("none");
        let range = sheet(vec![roster_header(), skipped, fatal]);

        let err = convert_range(&range, &paths.output, &paths.skip_log).unwrap_err();

        assert!(err.to_string().contains("No valid phone number found"));
        assert!(!paths.output.exists());
        // The skip preceding the fatal row still reached the log
        let log = std::fs::read_to_string(&paths.skip_log).unwrap();
        assert_eq!(log, "Skipped row 2: Invalid email: not-an-email\n");
    }

    #[test]
    fn test_missing_column_aborts() {
        let paths = test_paths();

        let range = sheet(vec![vec![s("First Name"), s("Last Name")], jane_row()]);
        let err = convert_range(&range, &paths.output, &paths.skip_log).unwrap_err();

        assert!(err.to_string().contains("not found"));
        assert!(!paths.output.exists());
    }

    #[test]
    fn test_advisory_does_not_affect_output() {
        let paths = test_paths();

        let mut row = jane_row();
        row[3] = s("JANE@X.COM");
        let range = sheet(vec![roster_header(), row]);

        let report = convert_range(&range, &paths.output, &paths.skip_log).unwrap();

        assert_eq!(report.written, 1);
        assert_eq!(report.advisories.len(), 1);
        assert!(report.advisories[0].contains("Jane Doe"));
        assert!(paths.output.exists());
    }
}
