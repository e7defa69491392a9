// Student record - the unit of CSV output

use serde::{Deserialize, Serialize};

use crate::validate::digits_only;

/// A validated roster entry ready for output.
///
/// Immutable after construction: the email passed validation before the
/// record was created, and the phone is stored digits-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Digits-only phone; empty when no phone value was available
    pub phone: String,
}

impl Student {
    pub fn new(first_name: String, last_name: String, email: String, phone: &str) -> Self {
        Student {
            first_name,
            last_name,
            email,
            phone: digits_only(phone),
        }
    }

    /// Display name used in error and advisory messages
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
