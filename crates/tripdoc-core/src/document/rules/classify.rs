//! Document type classification by keyword.

use crate::models::document::DocumentKind;

/// Keywords marking a flight document. Checked before the hotel keywords.
pub const FLIGHT_KEYWORDS: &[&str] = &[
    "flight",
    "airline",
    "boarding",
    "reservation",
    "confirmation",
    "e-ticket",
    "passenger",
];

/// Keywords marking a hotel document.
pub const HOTEL_KEYWORDS: &[&str] = &[
    "hotel",
    "reservation",
    "booking",
    "stay",
    "accommodation",
    "check-in",
    "check in",
    "check-out",
    "check out",
    "guest",
];

/// Classify a document from its raw text.
///
/// Flight keywords take priority: a text mentioning both a flight and a hotel
/// is a flight document.
pub fn classify(text: &str) -> DocumentKind {
    let normalized = text.to_lowercase();

    if contains_any(&normalized, FLIGHT_KEYWORDS) {
        DocumentKind::Flight
    } else if contains_any(&normalized, HOTEL_KEYWORDS) {
        DocumentKind::Hotel
    } else {
        DocumentKind::Other
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
