//! Extracted payment advice fields.

use serde::{Deserialize, Serialize};

/// Fields recovered from a single payment advice document.
///
/// A value of this type only exists when every field was found;
/// extraction is all-or-nothing per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceFields {
    /// Two-digit year taken from the advice sending date.
    pub year: String,

    /// Outlet number (10 or more digits).
    pub outlet_number: String,

    /// Beneficiary abbreviation (exactly 3 uppercase letters).
    pub beneficiary_abbreviation: String,

    /// Outlet code (uppercase alphanumeric token).
    pub outlet_code: String,
}
