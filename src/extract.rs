// Row extractor - per-row field extraction, validation, and fallback
// extract_row is pure: it tags each data row as a record or a skip, or
// escalates to a fatal error. Only the aggregation loop has side effects
// downstream (skip logging happens at the orchestrator boundary).

use calamine::{Data, Range};
use serde::{Deserialize, Serialize};

use crate::cell::cell_to_string;
use crate::error::ConvertError;
use crate::header::ColumnMap;
use crate::student::Student;
use crate::validate::{is_valid_email, is_valid_phone};

/// Outcome of extracting a single data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// A validated record, plus whether the participant email equals the
    /// parent email (an advisory that never affects the record itself)
    Record {
        student: Student,
        email_matches_parent: bool,
    },

    /// Recoverable, row-scoped exclusion: the run continues
    Skip { reason: String },
}

/// One skipped row, destined for the skip log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipEntry {
    /// 1-based worksheet row number
    pub row: usize,
    pub reason: String,
}

/// Everything the extraction pass produced, in worksheet order.
///
/// A fatal row stops the pass but never discards what came before it:
/// skips still reach the log and advisories still reach the user even
/// when the run aborts.
#[derive(Debug, Default)]
pub struct ExtractSummary {
    pub students: Vec<Student>,
    pub skipped: Vec<SkipEntry>,
    pub advisories: Vec<String>,
    /// Set when a row escalated; everything above reflects the rows
    /// processed up to that point
    pub fatal: Option<ConvertError>,
}

/// Extract and validate one data row.
///
/// Invalid email → `Skip` (recoverable). Invalid primary phone falls back
/// to the home phone column; if both are invalid the whole run aborts.
/// That asymmetry is deliberate: a bad email degrades gracefully, but a
/// row with a good email and no reachable phone needs human correction
/// before any output can be trusted.
pub fn extract_row(row: &[Data], columns: &ColumnMap) -> Result<RowOutcome, ConvertError> {
    let cell = |index: usize| cell_to_string(row.get(index).unwrap_or(&Data::Empty));

    let first_name = cell(columns.first_name);
    let last_name = cell(columns.last_name);
    let email = cell(columns.participant_email);
    let parent_email = cell(columns.parent_email);

    if !is_valid_email(&email) {
        return Ok(RowOutcome::Skip {
            reason: format!("Invalid email: {}", email),
        });
    }

    let mut phone = cell(columns.participant_phone);
    if !is_valid_phone(&phone) {
        // Fall back to the home phone column
        phone = cell(columns.home_phone);
        if !is_valid_phone(&phone) {
            return Err(ConvertError::NoValidPhone {
                first_name,
                last_name,
            });
        }
    }

    let email_matches_parent = email.eq_ignore_ascii_case(&parent_email);

    Ok(RowOutcome::Record {
        student: Student::new(first_name, last_name, email, &phone),
        email_matches_parent,
    })
}

/// Run the extractor over every data row (row 0 is the header).
pub fn extract_students(range: &Range<Data>, columns: &ColumnMap) -> ExtractSummary {
    let mut summary = ExtractSummary::default();

    for (index, row) in range.rows().enumerate().skip(1) {
        match extract_row(row, columns) {
            Ok(RowOutcome::Record {
                student,
                email_matches_parent,
            }) => {
                if email_matches_parent {
                    summary.advisories.push(format!(
                        "Participant {} has the same email as their parent",
                        student.full_name()
                    ));
                }
                summary.students.push(student);
            }
            Ok(RowOutcome::Skip { reason }) => {
                // Worksheet rows are reported 1-based
                summary.skipped.push(SkipEntry {
                    row: index + 1,
                    reason,
                });
            }
            Err(e) => {
                summary.fatal = Some(e);
                break;
            }
        }
    }

    summary
}

// ============================================================================
// TESTS
// ============================================================================
