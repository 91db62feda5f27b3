//! Outlet info extraction (outlet number, beneficiary, outlet code).

use super::patterns::OUTLET_INFO;
use super::FieldExtractor;

/// One outlet entry from the advice table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutletInfo {
    /// Outlet number (10 or more digits).
    pub outlet_number: String,
    /// Beneficiary abbreviation (exactly 3 uppercase letters).
    pub beneficiary_abbreviation: String,
    /// Outlet code (uppercase alphanumeric).
    pub outlet_code: String,
}

/// Outlet info extractor.
///
/// `extract` is first-match-wins; a multi-outlet caller can use
/// `extract_all` instead.
pub struct OutletExtractor;

impl OutletExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OutletExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OutletExtractor {
    type Output = OutletInfo;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        OUTLET_INFO
            .captures_iter(text)
            .map(|caps| OutletInfo {
                outlet_number: caps[1].to_string(),
                beneficiary_abbreviation: caps[2].to_string(),
                outlet_code: caps[3].to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn info(num: &str, bene: &str, code: &str) -> OutletInfo {
        OutletInfo {
            outlet_number: num.to_string(),
            beneficiary_abbreviation: bene.to_string(),
            outlet_code: code.to_string(),
        }
    }

    #[test]
    fn test_tight_form() {
        let extractor = OutletExtractor::new();
        assert_eq!(
            extractor.extract("1208008138/ APC-IT801"),
            Some(info("1208008138", "APC", "IT801"))
        );
    }

    #[test]
    fn test_spaced_form() {
        let extractor = OutletExtractor::new();
        assert_eq!(
            extractor.extract("1208008138 / APC - IT801"),
            Some(info("1208008138", "APC", "IT801"))
        );
    }

    #[test]
    fn test_no_dash() {
        let extractor = OutletExtractor::new();
        assert_eq!(
            extractor.extract("9876543210 / XYZ K12"),
            Some(info("9876543210", "XYZ", "K12"))
        );
    }

    #[test]
    fn test_short_number_rejected() {
        let extractor = OutletExtractor::new();
        assert_eq!(extractor.extract("123456789/ APC-IT801"), None);
    }

    #[test]
    fn test_lowercase_rejected() {
        let extractor = OutletExtractor::new();
        assert_eq!(extractor.extract("1208008138/ apc-it801"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let extractor = OutletExtractor::new();
        let text = "1208008138/ APC-IT801\n1208008139/ BDE-IT802";
        assert_eq!(
            extractor.extract(text),
            Some(info("1208008138", "APC", "IT801"))
        );
        assert_eq!(extractor.extract_all(text).len(), 2);
    }
}
