// Header resolver - maps required column names to positional indices
// Resolved once per run; header order and presence are not guaranteed
// between exports, so nothing here is cached across runs.

use calamine::{Data, Range};
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

// Required header names, matched case-insensitively after trimming
pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const PARTICIPANT_EMAIL: &str = "Participants Email:";
pub const PARTICIPANT_PHONE: &str = "Participants Phone:";
pub const HOME_PHONE: &str = "Home Phone";

/// Zero-based column indices for every field the extractor reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub first_name: usize,
    pub last_name: usize,
    pub participant_email: usize,
    /// The export carries no header for the parent email; it is always
    /// the column immediately after the participant email. This is a
    /// positional assumption, not a header lookup.
    pub parent_email: usize,
    pub participant_phone: usize,
    pub home_phone: usize,
}

impl ColumnMap {
    /// Resolve all required columns from row 0 of the worksheet.
    pub fn resolve(range: &Range<Data>) -> Result<Self, ConvertError> {
        let header = range.rows().next().ok_or(ConvertError::MissingHeaderRow)?;

        let participant_email = find_column(header, PARTICIPANT_EMAIL)?;

        Ok(ColumnMap {
            first_name: find_column(header, FIRST_NAME)?,
            last_name: find_column(header, LAST_NAME)?,
            participant_email,
            parent_email: participant_email + 1,
            participant_phone: find_column(header, PARTICIPANT_PHONE)?,
            home_phone: find_column(header, HOME_PHONE)?,
        })
    }
}

/// Find a named column in the header row.
///
/// Only text cells are eligible: a numeric or blank header cell can
/// never satisfy a lookup, no matter how it would render as a string.
pub fn find_column(header: &[Data], name: &str) -> Result<usize, ConvertError> {
    header
        .iter()
        .position(|cell| match cell {
            Data::String(s) => s.trim().eq_ignore_ascii_case(name),
            _ => false,
        })
        .ok_or_else(|| ConvertError::ColumnNotFound(name.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
