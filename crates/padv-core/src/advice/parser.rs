//! Field parser combining the date and outlet rules.

use tracing::debug;

use crate::error::ExtractionError;
use crate::models::advice::AdviceFields;

use super::rules::{extract_advice_year, FieldExtractor, OutletExtractor};

/// Result type for field extraction.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Parses the four advice fields out of decoded document text.
///
/// Pure function of the input text; the date rule is evaluated before
/// the outlet rule, which only determines which error is reported when
/// both are missing.
pub struct AdviceParser;

impl AdviceParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse advice fields from text. All-or-nothing: either every
    /// field was found or the first failing rule's error is returned.
    pub fn parse(&self, text: &str) -> Result<AdviceFields> {
        let year = extract_advice_year(text).ok_or(ExtractionError::MissingDate)?;
        debug!("Found advice year: {}", year);

        let outlet = OutletExtractor::new()
            .extract(text)
            .ok_or(ExtractionError::MissingOutletInfo)?;
        debug!(
            "Found outlet: {} / {}-{}",
            outlet.outlet_number, outlet.beneficiary_abbreviation, outlet.outlet_code
        );

        Ok(AdviceFields {
            year,
            outlet_number: outlet.outlet_number,
            beneficiary_abbreviation: outlet.beneficiary_abbreviation,
            outlet_code: outlet.outlet_code,
        })
    }
}

impl Default for AdviceParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_complete_advice() {
        let text = "Advice sending date 通知書發出日期:\n20 Jun 2025\n\nOutlet no. / Name\n1208008138/ APC-IT801";
        let fields = AdviceParser::new().parse(text).unwrap();

        assert_eq!(fields.year, "25");
        assert_eq!(fields.outlet_number, "1208008138");
        assert_eq!(fields.beneficiary_abbreviation, "APC");
        assert_eq!(fields.outlet_code, "IT801");
    }

    #[test]
    fn test_missing_date_reported() {
        let text = "Outlet no. / Name\n1208008138/ APC-IT801";
        assert_eq!(
            AdviceParser::new().parse(text),
            Err(ExtractionError::MissingDate)
        );
    }

    #[test]
    fn test_missing_outlet_reported() {
        let text = "Advice sending date 20 Jun 2025";
        assert_eq!(
            AdviceParser::new().parse(text),
            Err(ExtractionError::MissingOutletInfo)
        );
    }

    #[test]
    fn test_date_error_reported_first_when_both_missing() {
        assert_eq!(
            AdviceParser::new().parse("empty page"),
            Err(ExtractionError::MissingDate)
        );
    }

    #[test]
    fn test_unlabeled_date_still_parses() {
        let text = "Issued 20 Jun 2025\n1208008138/ APC-IT801";
        let fields = AdviceParser::new().parse(text).unwrap();
        assert_eq!(fields.year, "25");
    }
}
