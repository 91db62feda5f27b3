//! Advice sending date extraction.

use chrono::{Datelike, NaiveDate};

use super::patterns::{ADVICE_DATE, DATE_STANDALONE};
use super::FieldExtractor;

/// Advice sending date extractor.
///
/// Prefers a date following the "Advice sending date" label; falls back
/// to the first standalone `D MMM YYYY` token anywhere in the text.
pub struct AdviceDateExtractor;

impl AdviceDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdviceDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AdviceDateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        // Labeled date first. The label pattern accepts any 3-letter
        // month token, so skip captures that do not form a real date.
        for caps in ADVICE_DATE.captures_iter(text) {
            if let Some(date) = to_date(&caps[1], &caps[2], &caps[3]) {
                return Some(date);
            }
        }

        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_STANDALONE
            .captures_iter(text)
            .filter_map(|caps| to_date(&caps[1], &caps[2], &caps[3]))
            .collect()
    }
}

/// Extract the two-digit year of the advice sending date.
pub fn extract_advice_year(text: &str) -> Option<String> {
    AdviceDateExtractor::new()
        .extract(text)
        .map(|date| format!("{:02}", date.year() % 100))
}

fn to_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let month = month_abbr_to_number(month)?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_abbr_to_number(month: &str) -> Option<u32> {
    match month.to_lowercase().as_str() {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
