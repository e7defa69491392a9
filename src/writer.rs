// CSV writer - serializes the final record set to the fixed schema
// Invoked only after all validation has passed; any I/O failure here
// propagates and the caller must treat the output as untrustworthy.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::student::Student;
use crate::validate::digits_only;

/// Fixed output header, in record field order
pub const OUTPUT_HEADER: [&str; 4] = ["First Name", "Last Name", "Email", "Phone"];

/// Write the record sequence as CSV to any writer.
///
/// Deterministic: the same records always produce byte-identical output.
/// Phone is rendered digits-only again at serialization time.
pub fn write_csv<W: Write>(students: &[Student], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(OUTPUT_HEADER)?;
    for student in students {
        let phone = digits_only(&student.phone);
        csv.write_record([
            student.first_name.as_str(),
            student.last_name.as_str(),
            student.email.as_str(),
            phone.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write the record sequence to a CSV file at `path`.
pub fn write_csv_file(students: &[Student], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_csv(students, file)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Student {
        Student::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "jane@x.com".to_string(),
            "555-123-4567",
        )
    }

    #[test]
    fn test_header_and_record_layout() {
        let mut buffer = Vec::new();
        write_csv(&[jane()], &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "First Name,Last Name,Email,Phone\nJane,Doe,jane@x.com,5551234567\n"
        );
    }

    #[test]
    fn test_empty_record_set_writes_header_only() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "First Name,Last Name,Email,Phone\n"
        );
    }

    #[test]
    fn test_output_is_idempotent() {
        let students = vec![
            jane(),
            Student::new(
                "John".to_string(),
                "Smith".to_string(),
                "john@x.com".to_string(),
                "5559876543",
            ),
        ];

        let mut first = Vec::new();
        let mut second = Vec::new();
        write_csv(&students, &mut first).unwrap();
        write_csv(&students, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BlendedClassSetup.csv");

        write_csv_file(&[jane()], &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("First Name,Last Name,Email,Phone\n"));
        assert!(contents.contains("Jane,Doe,jane@x.com,5551234567"));
    }

    #[test]
    fn test_write_csv_file_bad_path_fails() {
        let result = write_csv_file(&[jane()], Path::new("/no/such/dir/out.csv"));
        assert!(result.is_err());
    }
}
