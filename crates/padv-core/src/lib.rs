//! Core library for payment advice renaming.
//!
//! This crate provides:
//! - PDF text extraction (bounded leading-page decode)
//! - Payment advice field extraction (advice date, outlet number,
//!   beneficiary abbreviation, outlet code)
//! - Canonical filename formatting with period-code normalization
//! - Document family detection (payment advice vs. invoice)

pub mod advice;
pub mod error;
pub mod models;
pub mod pdf;

pub use error::{ExtractionError, PadvError, PdfError, Result};
pub use models::advice::AdviceFields;
pub use models::config::{DetectionConfig, PadvConfig, PdfConfig};
pub use pdf::{detect_family, DocumentFamily, DocumentText, PdfTextExtractor};
pub use advice::{rename_pdf, AdviceParser};
pub use advice::naming::{advice_filename, normalize_period_code};
