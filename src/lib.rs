// Roster Converter - Core Library
// Single-pass pipeline: worksheet → header resolution → row extraction →
// duplicate detection → CSV output

pub mod cell;
pub mod convert;
pub mod duplicates;
pub mod error;
pub mod extract;
pub mod header;
pub mod skip_log;
pub mod student;
pub mod validate;
pub mod writer;

// Re-export commonly used types
pub use cell::cell_to_string;
pub use convert::{convert_file, convert_range, ConversionReport, OUTPUT_FILE_NAME};
pub use duplicates::check_duplicates;
pub use error::ConvertError;
pub use extract::{extract_row, extract_students, ExtractSummary, RowOutcome, SkipEntry};
pub use header::ColumnMap;
pub use student::Student;
pub use validate::{digits_only, is_valid_email, is_valid_phone};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
