//! Airline and flight number extraction.

use super::patterns::FLIGHT_NUMBER;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::document::FlightDetails;

/// Known airlines, in priority order.
pub const AIRLINES: &[&str] = &[
    "Thai Airways", "Japan Airlines", "ANA", "Delta", "United",
    "American Airlines", "British Airways", "Air France", "Lufthansa",
    "Emirates", "Qatar Airways", "Singapore Airlines", "Cathay Pacific",
    "Air Canada", "Turkish Airlines", "Etihad Airways", "KLM",
    "Air China", "Korean Air", "Southwest", "JetBlue", "Virgin Atlantic",
];

/// Flight number extractor.
///
/// Takes the first carrier-code-plus-digits token anywhere in the text. There
/// is no anchoring to a "flight" label, so unrelated codes earlier in the
/// document will win.
pub struct FlightNumberExtractor;

impl FlightNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlightNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FlightNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        FLIGHT_NUMBER
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let number = format!("{}{}", caps[1].to_uppercase(), &caps[2]);
                Some(
                    ExtractionMatch::new(number, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Find the first known airline mentioned in the text.
pub fn extract_airline(text: &str) -> Option<String> {
    let normalized = text.to_lowercase();
    AIRLINES
        .iter()
        .find(|airline| normalized.contains(&airline.to_lowercase()))
        .map(|airline| airline.to_string())
}

/// Extract airline and flight number.
pub fn extract_flight_info(text: &str) -> FlightDetails {
    FlightDetails {
        airline: extract_airline(text),
        flight_number: FlightNumberExtractor::new().extract(text).map(|m| m.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_thai_airways_example() {
        let details = extract_flight_info("Thai Airways flight TG315 to Bangkok");
        assert_eq!(
            details,
            FlightDetails {
                airline: Some("Thai Airways".to_string()),
                flight_number: Some("TG315".to_string()),
            }
        );
    }

    #[test]
    fn test_flight_number_is_normalized() {
        let found = FlightNumberExtractor::new().extract("seat 14A, tg 315").unwrap();
        assert_eq!(found.value, "TG315");
        assert_eq!(found.source, "tg 315");
    }

    #[test]
    fn test_first_syntactic_match_wins() {
        // The document code comes before the real flight number.
        let details = extract_flight_info("Form DOC 42\nFlight: NH 847");
        assert_eq!(details.flight_number, Some("DOC42".to_string()));
    }

    #[test]
    fn test_airline_priority_follows_list() {
        // "Air China" and "ANA" both appear; "ANA" is earlier in the list.
        let details = extract_flight_info("Air China codeshare with ANA");
        assert_eq!(details.airline, Some("ANA".to_string()));
    }

    #[test]
    fn test_airline_is_case_insensitive() {
        assert_eq!(extract_airline("EMIRATES EK 384"), Some("Emirates".to_string()));
    }

    #[test]
    fn test_flight_number_digits_are_ascii() {
        assert_eq!(extract_flight_info("flight TG٣١٥").flight_number, None);
        // Carrier code glued to a non-ASCII letter still has an ASCII boundary
        assert_eq!(extract_flight_info("vol ÉTG 315").flight_number, Some("TG315".to_string()));
    }

    #[test]
    fn test_nothing_found() {
        let details = extract_flight_info("Boarding pass");
        assert!(details.is_empty());
    }
}
