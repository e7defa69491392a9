// Duplicate detector - groups records by email across the whole dataset
// Grouping is case-insensitive, matching every other email comparison in
// the pipeline. Any group of size > 1 fails the entire run.

use std::collections::HashMap;

use crate::error::ConvertError;
use crate::student::Student;

/// Check the full record sequence for duplicate emails.
///
/// All duplicate groups are reported in one aggregated message, each
/// group's names joined with " and " and the groups joined with "; ".
/// The grouping map is scoped to this call and discarded after.
pub fn check_duplicates(students: &[Student]) -> Result<(), ConvertError> {
    let mut groups: HashMap<String, Vec<&Student>> = HashMap::new();
    for student in students {
        groups
            .entry(student.email.to_lowercase())
            .or_default()
            .push(student);
    }

    let mut messages: Vec<String> = groups
        .values()
        .filter(|group| group.len() > 1)
        .map(|group| {
            let names = group
                .iter()
                .map(|s| s.full_name())
                .collect::<Vec<_>>()
                .join(" and ");
            format!("Duplicate email found for {}", names)
        })
        .collect();

    if messages.is_empty() {
        return Ok(());
    }

    // HashMap iteration order is unstable; sort for deterministic output
    messages.sort();
    Err(ConvertError::DuplicateEmails(messages.join("; ")))
}

// ============================================================================
// TESTS
// ============================================================================
