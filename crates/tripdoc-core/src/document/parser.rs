//! Rule-based travel document parser.

use std::time::Instant;

use chrono::{Days, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::document::*;

use super::rules::{
    classify, extract_dates, extract_destination, extract_flight_info, extract_hotel_info,
    UNKNOWN_DESTINATION,
};
use super::{DocumentExtractor, Result};

/// Message reported when extraction fails unexpectedly.
pub const EXTRACTION_FAILED_MESSAGE: &str = "Failed to extract travel information from document";

/// Result of a travel document extraction, with diagnostics.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Extracted travel information.
    pub result: ExtractionResult,
    /// Fields that were defaulted or not found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Travel document parser built from fixed keyword tables and regex rules.
#[derive(Debug, Clone)]
pub struct TravelDocumentParser {
    /// Reference date for defaults; `None` means the current UTC date.
    today: Option<NaiveDate>,
    /// Days between start and end when only one date is found.
    trip_days: u32,
}

impl TravelDocumentParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            today: None,
            trip_days: ExtractionConfig::default().default_trip_days,
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_trip_days(config.default_trip_days)
    }

    /// Pin the reference date used when no start date is found.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Set the default trip length in days.
    pub fn with_trip_days(mut self, days: u32) -> Self {
        self.trip_days = days;
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    fn add_trip_days(&self, start: NaiveDate) -> Result<NaiveDate> {
        start
            .checked_add_days(Days::new(u64::from(self.trip_days)))
            .ok_or(ExtractionError::DateOutOfRange {
                base: start,
                days: self.trip_days,
            })
    }

    /// Parse a travel document from OCR text.
    pub fn parse(&self, text: &str) -> Result<ExtractionReport> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing travel document from {} characters of text", text.len());

        let kind = classify(text);
        debug!("Document type determined: {}", kind);

        // Dates: earliest two, defaulting to today and a fixed-length trip
        let dates = extract_dates(text);
        debug!("Extracted {} dates: {:?}", dates.len(), dates);

        let start_date = match dates.first() {
            Some(date) => *date,
            None => {
                warnings.push("Could not extract dates, start date defaults to today".to_string());
                self.today()
            }
        };
        let end_date = match dates.get(1) {
            Some(date) => *date,
            None => {
                warnings.push(format!(
                    "Could not extract end date, defaulting to {} days after start",
                    self.trip_days
                ));
                self.add_trip_days(start_date)?
            }
        };

        let destination = extract_destination(text);
        if destination == UNKNOWN_DESTINATION {
            warnings.push("Could not extract destination".to_string());
        }
        debug!("Extracted destination: {}", destination);

        let (title, details) = match kind {
            DocumentKind::Flight => {
                let flight = extract_flight_info(text);
                debug!("Flight details: {:?}", flight);

                if flight.airline.is_none() {
                    warnings.push("Could not extract airline".to_string());
                }
                if flight.flight_number.is_none() {
                    warnings.push("Could not extract flight number".to_string());
                }

                let title = match &flight.airline {
                    Some(airline) => format!("{} to {}", airline, destination),
                    None => format!("Flight to {}", destination),
                };
                (title, non_empty(DocumentDetails::Flight(flight)))
            }
            DocumentKind::Hotel => {
                let hotel = extract_hotel_info(text);
                debug!("Hotel details: {:?}", hotel);

                if hotel.hotel_name.is_none() {
                    warnings.push("Could not extract hotel name".to_string());
                }
                if hotel.booking_reference.is_none() {
                    warnings.push("Could not extract booking reference".to_string());
                }

                let title = match &hotel.hotel_name {
                    Some(name) => format!("{} in {}", name, destination),
                    None => format!("Hotel in {}", destination),
                };
                (title, non_empty(DocumentDetails::Hotel(hotel)))
            }
            DocumentKind::Other => (format!("Travel to {}", destination), DocumentDetails::None),
        };

        let result = ExtractionResult {
            kind,
            title,
            destination,
            start_date,
            end_date,
            details,
        };

        debug!(
            "Extracted \"{}\" ({} to {}) with {} warnings",
            result.title,
            result.start_date,
            result.end_date,
            warnings.len()
        );

        Ok(ExtractionReport {
            result,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for TravelDocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for TravelDocumentParser {
    fn extract(&self, text: &str) -> Result<ExtractionResult> {
        self.parse(text).map(|report| report.result)
    }

    fn extract_outcome(&self, text: &str) -> ParseResult {
        match self.extract(text) {
            Ok(result) => ParseResult::Success(result),
            Err(e) => {
                warn!("Error parsing document: {}", e);
                ParseResult::failure(EXTRACTION_FAILED_MESSAGE)
            }
        }
    }
}

fn non_empty(details: DocumentDetails) -> DocumentDetails {
    let empty = match &details {
        DocumentDetails::Flight(flight) => flight.is_empty(),
        DocumentDetails::Hotel(hotel) => hotel.is_empty(),
        DocumentDetails::None => true,
    };
    if empty { DocumentDetails::None } else { details }
}

/// Extract travel information with default settings.
///
/// Never fails: internal errors are reported as a failure outcome.
pub fn extract_travel_info(text: &str) -> ParseResult {
    TravelDocumentParser::new().extract_outcome(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parser() -> TravelDocumentParser {
        TravelDocumentParser::new().with_today(date(2024, 6, 1))
    }

    #[test]
    fn test_parse_flight_ticket() {
        let text = r#"
            THAI AIRWAYS E-TICKET RECEIPT
            Passenger: SMITH/JOHN MR
            Flight TG 315  Depart 25/12/2024  BANGKOK (BKK)
            Return TG 316  02/01/2025
        "#;

        let report = parser().parse(text).unwrap();
        assert_eq!(
            report.result,
            ExtractionResult {
                kind: DocumentKind::Flight,
                title: "Thai Airways to Bangkok".to_string(),
                destination: "Bangkok".to_string(),
                start_date: date(2024, 12, 25),
                end_date: date(2025, 1, 2),
                details: DocumentDetails::Flight(FlightDetails {
                    airline: Some("Thai Airways".to_string()),
                    flight_number: Some("TG315".to_string()),
                }),
            }
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_parse_hotel_booking() {
        let text = "Your booking at Tokyo Grand Palace Hotel\nCheck-in Mar 3, 2025\nCheck-out Mar 7, 2025\nBooking: QX7781Z";

        let result = parser().extract(text).unwrap();
        assert_eq!(result.kind, DocumentKind::Hotel);
        assert_eq!(result.title, "Palace Hotel in Tokyo");
        assert_eq!(result.start_date, date(2025, 3, 3));
        assert_eq!(result.end_date, date(2025, 3, 7));
        assert_eq!(
            result.details,
            DocumentDetails::Hotel(HotelDetails {
                hotel_name: Some("Palace Hotel".to_string()),
                booking_reference: Some("QX7781Z".to_string()),
            })
        );
    }

    #[test]
    fn test_flight_without_airline() {
        let result = parser().extract("Boarding pass, gate 12, Paris 2024-07-14").unwrap();
        assert_eq!(result.title, "Flight to Paris");
        assert_eq!(result.start_date, date(2024, 7, 14));
        assert_eq!(result.end_date, date(2024, 7, 21));
    }

    #[test]
    fn test_hotel_without_name() {
        let result = parser().extract("Guest: Jane Doe, stay in London").unwrap();
        assert_eq!(result.kind, DocumentKind::Hotel);
        assert_eq!(result.title, "Hotel in London");
        assert_eq!(result.details, DocumentDetails::None);
    }

    #[test]
    fn test_other_document() {
        let result = parser().extract("Museum pass, Rome").unwrap();
        assert_eq!(result.kind, DocumentKind::Other);
        assert_eq!(result.title, "Travel to Rome");
        assert_eq!(result.details, DocumentDetails::None);
    }

    #[test]
    fn test_empty_text_uses_defaults() {
        let report = parser().parse("").unwrap();
        let result = report.result;

        assert_eq!(result.kind, DocumentKind::Other);
        assert_eq!(result.destination, "Unknown");
        assert_eq!(result.title, "Travel to Unknown");
        assert_eq!(result.start_date, date(2024, 6, 1));
        assert_eq!(result.end_date, date(2024, 6, 8));
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_empty_text_with_real_clock() {
        let today = Utc::now().date_naive();
        let result = extract_travel_info("").into_result().unwrap();

        // Allow for the date rolling over between the two clock reads.
        assert!(result.start_date == today || result.start_date == today + Days::new(1));
        assert_eq!(result.end_date, result.start_date + Days::new(7));
    }

    #[test]
    fn test_non_ascii_digits_are_not_fields() {
        let result = parser().extract("İSTANBUL ٢٥/١٢/٢٠٢٤ TG٣١٥ flight").unwrap();
        assert_eq!(result.kind, DocumentKind::Flight);
        assert_eq!(result.details, DocumentDetails::None);
        assert_eq!(result.start_date, date(2024, 6, 1));
        assert_eq!(result.end_date, date(2024, 6, 8));
    }

    #[test]
    fn test_custom_trip_length() {
        let result = parser().with_trip_days(3).extract("Flight 2024-09-10").unwrap();
        assert_eq!(result.end_date, date(2024, 9, 13));
    }

    #[test]
    fn test_start_not_after_end_when_sorted() {
        let result = parser().extract("Return 30.08.2024, depart 01.08.2024").unwrap();
        assert!(result.start_date <= result.end_date);
        assert_eq!(result.start_date, date(2024, 8, 1));
    }

    #[test]
    fn test_date_overflow_becomes_failure() {
        let outcome = TravelDocumentParser::new()
            .with_today(NaiveDate::MAX)
            .extract_outcome("");
        assert_eq!(outcome, ParseResult::failure(EXTRACTION_FAILED_MESSAGE));
    }

    #[test]
    fn test_from_config() {
        let config = ExtractionConfig {
            default_trip_days: 14,
            ..ExtractionConfig::default()
        };
        let result = TravelDocumentParser::from_config(&config)
            .extract("Hotel stay from 2024-05-01")
            .unwrap();
        assert_eq!(result.end_date, date(2024, 5, 15));
    }
}
