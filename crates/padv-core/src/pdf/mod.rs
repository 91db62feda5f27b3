//! PDF processing module.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Document family, determined by a coarse keyword sniff.
///
/// This is a pre-filter for short-circuiting obviously-wrong uploads,
/// not a classifier the extraction pipeline depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFamily {
    /// Bank payment/payroll advice.
    PaymentAdvice,
    /// Invoice.
    Invoice,
    /// Anything else.
    Unknown,
}

impl std::fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFamily::PaymentAdvice => write!(f, "payment-advice"),
            DocumentFamily::Invoice => write!(f, "invoice"),
            DocumentFamily::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detect the document family from decoded leading-page text.
pub fn detect_family(text: &str) -> DocumentFamily {
    let content = text.to_lowercase();

    if ["hsbc", "payment advice", "payroll advice"]
        .iter()
        .any(|k| content.contains(k))
    {
        return DocumentFamily::PaymentAdvice;
    }
    if ["invoice", "發票"].iter().any(|k| content.contains(k)) {
        return DocumentFamily::Invoice;
    }
    DocumentFamily::Unknown
}

/// Text decoded from the leading pages of a PDF.
///
/// Immutable once produced; lives only for the duration of one
/// extraction call.
#[derive(Debug, Clone)]
pub struct DocumentText {
    pages: Vec<String>,
}

impl DocumentText {
    pub(crate) fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Page texts in page order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// All pages joined into a single blob for pattern matching.
    pub fn joined(&self) -> String {
        self.pages.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_family_payment_advice() {
        assert_eq!(
            detect_family("HSBC Payment Advice 通知書"),
            DocumentFamily::PaymentAdvice
        );
        assert_eq!(
            detect_family("Payroll advice for June"),
            DocumentFamily::PaymentAdvice
        );
    }

    #[test]
    fn test_detect_family_invoice() {
        assert_eq!(detect_family("Tax Invoice no. 123"), DocumentFamily::Invoice);
        assert_eq!(detect_family("發票 2025/06"), DocumentFamily::Invoice);
    }

    #[test]
    fn test_detect_family_unknown() {
        assert_eq!(detect_family("Monthly statement"), DocumentFamily::Unknown);
    }

    #[test]
    fn test_document_text_joined() {
        let text = DocumentText::new(vec!["page one".into(), "page two".into()]);
        assert_eq!(text.joined(), "page one\n\npage two");
        assert_eq!(text.pages().len(), 2);
    }
}
