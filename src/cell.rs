// Cell value normalizer - one spreadsheet cell to one trimmed string
// Pure function, no side effects. calamine hands us the cached value of
// formula cells, so a formula never needs special handling here.

use calamine::Data;

/// Normalize a single cell to a string.
///
/// Numeric cells are integer-truncated: phone and zip columns are
/// commonly stored as numbers in legacy exports, and rendering the
/// fractional part would corrupt them. Error cells and anything else
/// the pipeline cannot use normalize to the empty string.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => (*f as i64).to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        // Dates are numeric cells in the legacy format; keep the serial
        Data::DateTime(dt) => (dt.as_f64() as i64).to_string(),
        Data::Empty
        | Data::Error(_)
        | Data::DateTimeIso(_)
        | Data::DurationIso(_) => String::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
