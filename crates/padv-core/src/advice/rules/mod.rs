//! Rule-based field extractors for payment advices.

pub mod date;
pub mod outlet;
pub mod patterns;

pub use date::{extract_advice_year, AdviceDateExtractor};
pub use outlet::{OutletExtractor, OutletInfo};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
