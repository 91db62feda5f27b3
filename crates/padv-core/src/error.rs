//! Error types for the padv-core library.

use thiserror::Error;

/// Main error type for the padv library.
#[derive(Error, Debug)]
pub enum PadvError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Advice field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document sniffed as a different family and the strict
    /// pre-filter is enabled.
    #[error("document is not a payment advice (detected family: {0})")]
    WrongDocumentFamily(crate::pdf::DocumentFamily),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to opening and decoding a PDF document.
///
/// Every variant means the input document itself is defective; none of
/// them is retryable.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF bytes.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to payment advice field extraction.
///
/// Each variant names the extraction rule that failed, so callers can
/// report "no advice date" and "no outlet info" distinctly.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// No "Advice sending date" label and no standalone date anywhere.
    #[error("no advice sending date found in document text")]
    MissingDate,

    /// No outlet-number / beneficiary / outlet-code token found.
    #[error("no outlet info found in document text")]
    MissingOutletInfo,
}

/// Result type for the padv library.
pub type Result<T> = std::result::Result<T, PadvError>;
