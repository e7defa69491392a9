// Field validators - pure predicates for email and phone shape
// Intentionally permissive: these mirror what the roster export can
// actually guarantee, not a full RFC check.

/// Strip every non-digit character from a string.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// An email is valid when it is non-empty and contains both '@' and '.'.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}

/// A phone is valid when stripping non-digits leaves exactly 10 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    digits_only(phone).len() == 10
}

// ============================================================================
// TESTS
// ============================================================================
