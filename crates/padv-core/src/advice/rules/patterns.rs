//! Regex patterns for payment advice extraction.
//!
//! The two extraction rules live here as named pattern objects, each
//! paired with its own failure kind in `ExtractionError`, so layout
//! drift in future document revisions can be diagnosed field by field.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Advice sending date 通知書發出日期:\n20 Jun 2025" - the label may be
    // separated from the date by arbitrary text and newlines.
    pub static ref ADVICE_DATE: Regex = Regex::new(
        r"(?is)advice\s+sending\s+date.*?(\d{1,2})\s+([A-Za-z]{3})\s+(\d{4})"
    ).unwrap();

    // Standalone "D[D] MMM YYYY" date, month restricted to the standard
    // 12-month abbreviation set.
    pub static ref DATE_STANDALONE: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+(\d{4})\b"
    ).unwrap();

    // "1208008138/ APC-IT801", "1208008138 / APC - IT801" - case
    // sensitive, the token is upper-case in the source document.
    pub static ref OUTLET_INFO: Regex = Regex::new(
        r"(\d{10,})\s*/\s*([A-Z]{3})\s*-?\s*([A-Z0-9]+)"
    ).unwrap();
}
