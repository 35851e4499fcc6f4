//! Hotel name and booking reference extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::BOOKING_REFERENCE;
use super::text::title_case;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::document::HotelDetails;

/// Words that anchor a hotel name, in priority order.
pub const HOTEL_NAME_KEYWORDS: &[&str] = &[
    "hotel", "resort", "inn", "suites", "plaza", "palace",
    "grand", "hyatt", "hilton", "marriott", "sheraton", "westin",
    "intercontinental", "radisson", "novotel",
];

lazy_static! {
    // "<word> <keyword>" or "<keyword> <word>" for each keyword
    static ref HOTEL_NAME_PATTERNS: Vec<Regex> = HOTEL_NAME_KEYWORDS
        .iter()
        .map(|keyword| {
            let keyword = regex::escape(keyword);
            Regex::new(&format!(
                r"(?i)((?-u:\w+)\s+(?-u:{keyword})|(?-u:{keyword})\s+(?-u:\w+))"
            ))
            .unwrap()
        })
        .collect();
}

/// Hotel name extractor.
///
/// Takes a two-word window around the first keyword (in keyword order) that
/// matches anywhere in the text. Keywords are not word-bounded.
pub struct HotelNameExtractor;

impl HotelNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HotelNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for HotelNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        HOTEL_NAME_PATTERNS
            .iter()
            .find_map(|pattern| name_match(pattern, text))
    }

    /// First window for each keyword that matches, in keyword order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        HOTEL_NAME_PATTERNS
            .iter()
            .filter_map(|pattern| name_match(pattern, text))
            .collect()
    }
}

fn name_match(pattern: &Regex, text: &str) -> Option<ExtractionMatch<String>> {
    pattern.find(text).map(|m| {
        ExtractionMatch::new(title_case(m.as_str()), m.as_str()).with_position(m.start(), m.end())
    })
}

/// Extract a labeled booking reference, uppercased.
pub fn extract_booking_reference(text: &str) -> Option<String> {
    BOOKING_REFERENCE
        .captures(text)
        .map(|caps| caps[1].to_uppercase())
}

/// Extract hotel name and booking reference.
pub fn extract_hotel_info(text: &str) -> HotelDetails {
    HotelDetails {
        hotel_name: HotelNameExtractor::new().extract(text).map(|m| m.value),
        booking_reference: extract_booking_reference(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_marriott_booking_example() {
        let details = extract_hotel_info("Booking confirmation: ABC12345 at Bangkok Marriott Hotel");
        assert_eq!(details.booking_reference, Some("ABC12345".to_string()));

        let name = details.hotel_name.unwrap();
        assert!(name.contains("Hotel"));
        assert_eq!(name, "Marriott Hotel");
    }

    #[test]
    fn test_keyword_before_word() {
        let details = extract_hotel_info("HILTON garden, Bangkok");
        assert_eq!(details.hotel_name, Some("Hilton Garden".to_string()));
    }

    #[test]
    fn test_keyword_order_beats_text_position() {
        // "resort" precedes "hotel" in the text but "hotel" is tried first.
        let details = extract_hotel_info("Lagoon Resort and Riverside Hotel");
        assert_eq!(details.hotel_name, Some("Riverside Hotel".to_string()));
    }

    #[test]
    fn test_keyword_is_not_word_bounded() {
        // "inn" at the end of "Linn" still anchors a window.
        let details = extract_hotel_info("12 Linn Street");
        assert_eq!(details.hotel_name, Some("Inn Street".to_string()));
    }

    #[test]
    fn test_booking_reference_variants() {
        assert_eq!(extract_booking_reference("Ref: xk9p2q"), Some("XK9P2Q".to_string()));
        assert_eq!(extract_booking_reference("reservation 12345678"), Some("12345678".to_string()));
        // Too short / too long tokens are ignored.
        assert_eq!(extract_booking_reference("ref: ab1"), None);
        assert_eq!(extract_booking_reference("ref: abcdefghijk1"), None);
    }

    #[test]
    fn test_extract_all_names() {
        let names: Vec<_> = HotelNameExtractor::new()
            .extract_all("Grand Hyatt Erawan hotel lobby")
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(names, vec!["Erawan Hotel", "Grand Hyatt", "Grand Hyatt"]);
    }

    #[test]
    fn test_name_window_words_are_ascii() {
        // "é" is not a word character, so "Café" cannot form a window
        assert_eq!(extract_hotel_info("Café Plaza").hotel_name, None);
        assert_eq!(
            extract_hotel_info("Résidence Hotel").hotel_name,
            Some("Sidence Hotel".to_string())
        );
    }

    #[test]
    fn test_nothing_found() {
        assert!(extract_hotel_info("Museum ticket").is_empty());
    }
}
