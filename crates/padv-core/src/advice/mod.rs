//! Payment advice extraction and naming pipeline.

pub mod naming;
mod parser;
pub mod rules;

pub use parser::AdviceParser;

use tracing::{debug, info};

use crate::error::{PadvError, Result};
use crate::models::config::PadvConfig;
use crate::pdf::{detect_family, DocumentFamily, PdfTextExtractor};

/// Run the full pipeline over in-memory PDF bytes: extract leading-page
/// text, parse the four advice fields, and format the canonical
/// filename with the supplied period code.
///
/// Single linear pass; no state is retained between invocations, so
/// concurrent calls over independent documents are safe.
pub fn rename_pdf(data: &[u8], raw_period_code: &str, config: &PadvConfig) -> Result<String> {
    let mut extractor = PdfTextExtractor::new();
    extractor.load(data)?;
    debug!("PDF has {} pages", extractor.page_count());

    let text = extractor
        .extract_leading_text(config.pdf.max_pages, config.pdf.min_text_length)?
        .joined();

    if config.detection.require_payment_advice {
        let family = detect_family(&text);
        if family != DocumentFamily::PaymentAdvice {
            return Err(PadvError::WrongDocumentFamily(family));
        }
    }

    let fields = AdviceParser::new().parse(&text)?;
    let filename = naming::advice_filename(&fields, raw_period_code);
    info!("Resolved filename: {}", filename);

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // A rename over raw text, bypassing the PDF decode, exercising the
    // parse + format stages end to end.
    fn rename_text(text: &str, period: &str) -> Result<String> {
        let fields = AdviceParser::new().parse(text)?;
        Ok(naming::advice_filename(&fields, period))
    }

    #[test]
    fn test_end_to_end_tight_form() {
        let text = "Advice sending date 通知書發出日期:\n20 Jun 2025\n1208008138/ APC-IT801";
        assert_eq!(
            rename_text(text, "8").unwrap(),
            "25_P8_APC_IT801_1208008138.pdf"
        );
    }

    #[test]
    fn test_end_to_end_spaced_form() {
        let text = "Advice sending date 通知書發出日期:\n20 Jun 2025\n1208008138 / APC - IT801";
        assert_eq!(
            rename_text(text, "8").unwrap(),
            "25_P8_APC_IT801_1208008138.pdf"
        );
    }

    #[test]
    fn test_formatter_not_reached_on_parse_failure() {
        let text = "Advice sending date 20 Jun 2025\nno outlet table here";
        let err = rename_text(text, "8").unwrap_err();
        assert!(matches!(
            err,
            PadvError::Extraction(crate::error::ExtractionError::MissingOutletInfo)
        ));
    }

    #[test]
    fn test_rename_pdf_rejects_garbage_bytes() {
        let config = PadvConfig::default();
        let err = rename_pdf(b"not a pdf", "8", &config).unwrap_err();
        assert!(matches!(err, PadvError::Pdf(_)));
    }
}
