//! Canonical filename formatting.
//!
//! Output convention: `YY_PX_BENE_CODE_OUTLETNUM.pdf`.

use crate::models::advice::AdviceFields;

/// Normalize a caller-supplied period code: strip whitespace and path
/// separators, uppercase, and prepend `P` when not already prefixed.
///
/// `p8` -> `P8`, `8` -> `P8`, `P8` -> `P8`.
pub fn normalize_period_code(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/' && *c != '\\')
        .collect();

    let upper = cleaned.to_uppercase();
    if upper.starts_with('P') {
        upper
    } else {
        format!("P{}", upper)
    }
}

/// Ensure a filename carries the `.pdf` extension.
pub fn ensure_pdf_extension(name: String) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name
    } else {
        name + ".pdf"
    }
}

/// Format the canonical filename for a set of advice fields.
///
/// Total function: never fails for well-formed fields and any period
/// code, and always yields a `.pdf`-terminated name.
pub fn advice_filename(fields: &AdviceFields, raw_period_code: &str) -> String {
    let period = normalize_period_code(raw_period_code);
    let name = format!(
        "{}_{}_{}_{}_{}",
        fields.year,
        period,
        fields.beneficiary_abbreviation,
        fields.outlet_code,
        fields.outlet_number
    );
    ensure_pdf_extension(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_fields() -> AdviceFields {
        AdviceFields {
            year: "25".to_string(),
            outlet_number: "1208008138".to_string(),
            beneficiary_abbreviation: "APC".to_string(),
            outlet_code: "IT801".to_string(),
        }
    }

    #[test]
    fn test_period_code_normalization() {
        assert_eq!(normalize_period_code("p8"), "P8");
        assert_eq!(normalize_period_code("8"), "P8");
        assert_eq!(normalize_period_code("P8"), "P8");
        assert_eq!(normalize_period_code(" p2x "), "P2X");
    }

    #[test]
    fn test_period_code_strips_separators() {
        assert_eq!(normalize_period_code("P 8"), "P8");
        assert_eq!(normalize_period_code("P8/"), "P8");
        assert_eq!(normalize_period_code("P\\8"), "P8");
    }

    #[test]
    fn test_filename_format() {
        assert_eq!(
            advice_filename(&sample_fields(), "8"),
            "25_P8_APC_IT801_1208008138.pdf"
        );
    }

    #[test]
    fn test_filename_idempotent() {
        let first = advice_filename(&sample_fields(), "P8");
        let second = advice_filename(&sample_fields(), "P8");
        assert_eq!(first, second);
    }

    #[test]
    fn test_ensure_pdf_extension() {
        assert_eq!(ensure_pdf_extension("a".to_string()), "a.pdf");
        assert_eq!(ensure_pdf_extension("a.pdf".to_string()), "a.pdf");
        assert_eq!(ensure_pdf_extension("a.PDF".to_string()), "a.PDF");
    }
}
