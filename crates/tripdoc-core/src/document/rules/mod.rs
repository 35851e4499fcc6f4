//! Rule-based field extractors for travel documents.

pub mod classify;
pub mod dates;
pub mod destination;
pub mod flight;
pub mod hotel;
pub mod patterns;
pub mod text;

pub use classify::{classify, FLIGHT_KEYWORDS, HOTEL_KEYWORDS};
pub use dates::{extract_dates, DateExtractor};
pub use destination::{extract_destination, DestinationExtractor, DESTINATIONS, UNKNOWN_DESTINATION};
pub use flight::{extract_flight_info, FlightNumberExtractor, AIRLINES};
pub use hotel::{extract_hotel_info, HotelNameExtractor, HOTEL_NAME_KEYWORDS};
pub use text::title_case;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value found in the text, with where it came from.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the caller's text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
