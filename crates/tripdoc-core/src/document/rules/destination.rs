//! Destination lookup against a fixed gazetteer.

use super::text::title_case;
use super::{ExtractionMatch, FieldExtractor};

/// Returned when no known place appears in the text.
pub const UNKNOWN_DESTINATION: &str = "Unknown";

/// Known destinations, lowercase, in priority order. Earlier entries win
/// regardless of where they appear in the text.
pub const DESTINATIONS: &[&str] = &[
    "bangkok", "tokyo", "new york", "paris", "london", "rome", "sydney",
    "hong kong", "singapore", "dubai", "los angeles", "bali", "phuket",
    "seoul", "barcelona", "istanbul", "amsterdam", "miami", "shanghai",
    "las vegas", "milan", "madrid", "berlin", "vienna", "prague", "moscow",
    "athens", "cairo", "marrakesh", "johannesburg", "rio de janeiro",
    "toronto", "vancouver", "san francisco", "chicago", "boston", "orlando",
    "kyoto", "osaka", "taipei", "kuala lumpur", "delhi", "mumbai",
    "melbourne", "auckland", "fiji", "hawaii", "cancun", "mexico city",
    "bangkok", "chiang mai", "pattaya", "thailand", "japan",
];

/// Gazetteer-based destination extractor.
pub struct DestinationExtractor {
    places: &'static [&'static str],
}

impl DestinationExtractor {
    pub fn new() -> Self {
        Self {
            places: DESTINATIONS,
        }
    }
}

impl Default for DestinationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DestinationExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lowered = LoweredText::new(text);
        self.places
            .iter()
            .find_map(|place| lowered.locate(place))
    }

    /// Every distinct gazetteer entry present, in gazetteer order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let lowered = LoweredText::new(text);
        let mut results: Vec<Self::Output> = Vec::new();

        for place in self.places {
            let Some(found) = lowered.locate(place) else {
                continue;
            };
            if !results.iter().any(|r| r.value == found.value) {
                results.push(found);
            }
        }

        results
    }
}

/// Lowercased copy of a text that remembers, for every byte, which
/// character of the original produced it. Lowercasing can change byte
/// lengths ("İ" becomes "i̇"), so positions found in the copy are mapped
/// back before being reported.
struct LoweredText<'a> {
    original: &'a str,
    lowered: String,
    spans: Vec<(usize, usize)>,
}

impl<'a> LoweredText<'a> {
    fn new(original: &'a str) -> Self {
        let mut lowered = String::with_capacity(original.len());
        let mut spans = Vec::with_capacity(original.len());

        for (start, c) in original.char_indices() {
            let span = (start, start + c.len_utf8());
            for lower in c.to_lowercase() {
                lowered.push(lower);
                spans.extend(std::iter::repeat_n(span, lower.len_utf8()));
            }
        }

        Self {
            original,
            lowered,
            spans,
        }
    }

    fn locate(&self, place: &str) -> Option<ExtractionMatch<String>> {
        let start = self.lowered.find(place)?;
        let end = start + place.len();
        let (start, _) = self.spans[start];
        let (_, end) = self.spans[end - 1];

        Some(
            ExtractionMatch::new(title_case(place), &self.original[start..end])
                .with_position(start, end),
        )
    }
}

/// Extract the destination, title-cased, or `"Unknown"`.
pub fn extract_destination(text: &str) -> String {
    DestinationExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| UNKNOWN_DESTINATION.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_destination() {
        assert_eq!(extract_destination("Passenger: John Smith"), "Unknown");
        assert_eq!(extract_destination(""), "Unknown");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_destination("BANGKOK"), "Bangkok");
        assert_eq!(extract_destination("bangkok"), "Bangkok");
        assert_eq!(extract_destination("BANGKOK"), extract_destination("bangkok"));
    }

    #[test]
    fn test_multi_word_title_case() {
        assert_eq!(extract_destination("arriving RIO DE JANEIRO"), "Rio De Janeiro");
        assert_eq!(extract_destination("hotel in kuala lumpur"), "Kuala Lumpur");
    }

    #[test]
    fn test_gazetteer_order_wins_over_text_position() {
        // "paris" appears first in the text, "tokyo" first in the list.
        assert_eq!(extract_destination("Paris -> Tokyo"), "Tokyo");
        // The country entry only applies when no city matches.
        assert_eq!(extract_destination("Phuket, Thailand"), "Phuket");
        assert_eq!(extract_destination("Somewhere in Thailand"), "Thailand");
    }

    #[test]
    fn test_substring_match() {
        // Plain substring search, no word boundaries.
        assert_eq!(extract_destination("parisian cafe"), "Paris");
    }

    #[test]
    fn test_extract_all_in_gazetteer_order() {
        let all = DestinationExtractor::new().extract_all("Bangkok to Tokyo via Bangkok");
        let names: Vec<_> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(names, vec!["Bangkok", "Tokyo"]);
        assert_eq!(all[1].position, Some((11, 16)));
    }

    #[test]
    fn test_positions_refer_to_caller_text() {
        // "İ" is two bytes but lowercases to three.
        let text = "İzmir, then Paris";
        let found = DestinationExtractor::new().extract(text).unwrap();
        assert_eq!(found.value, "Paris");
        assert_eq!(found.position, Some((13, 18)));
        assert_eq!(found.source, "Paris");
    }
}
