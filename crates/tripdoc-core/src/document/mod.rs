//! Travel document field extraction module.

mod parser;
pub mod rules;

pub use parser::{
    extract_travel_info, ExtractionReport, TravelDocumentParser, EXTRACTION_FAILED_MESSAGE,
};

use crate::error::ExtractionError;
use crate::models::document::{ExtractionResult, ParseResult};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for travel document extractors.
pub trait DocumentExtractor {
    /// Extract structured travel information from OCR text.
    fn extract(&self, text: &str) -> Result<ExtractionResult>;

    /// Extract and fold any error into a failure outcome.
    fn extract_outcome(&self, text: &str) -> ParseResult;
}
