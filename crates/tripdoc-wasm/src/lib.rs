//! WASM bindings for travel document extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Text recognition happens on the JS side; these bindings take the
//! recognized text.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use tripdoc_core::document::rules;
use tripdoc_core::{DocumentExtractor, ExtractionResult, TravelDocumentParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Plain JS objects rather than `Map`s, so results look like the JSON form.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract travel information from OCR text.
///
/// Returns `{ success: true, data }` or `{ success: false, error }`.
#[wasm_bindgen]
pub fn extract_travel_info(text: &str) -> Result<JsValue, JsValue> {
    to_js(&tripdoc_core::extract_travel_info(text))
}

/// Classify a document: `"flight"`, `"hotel"` or `"other"`.
#[wasm_bindgen]
pub fn classify_document(text: &str) -> String {
    rules::classify(text).as_str().to_string()
}

/// All dates found in the text, as sorted ISO strings.
#[wasm_bindgen]
pub fn extract_dates(text: &str) -> js_sys::Array {
    rules::extract_dates(text)
        .into_iter()
        .map(|date| JsValue::from_str(&date.to_string()))
        .collect()
}

#[wasm_bindgen]
pub fn extract_destination(text: &str) -> String {
    rules::extract_destination(text)
}

/// Travel document extractor class for browser use.
#[wasm_bindgen]
pub struct TravelExtractor {
    parser: TravelDocumentParser,
}

#[wasm_bindgen]
impl TravelExtractor {
    /// Create a new extractor using today's date and a one-week default trip.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: TravelDocumentParser::new(),
        }
    }

    /// Fix the reference date used when a document has no dates (YYYY-MM-DD).
    #[wasm_bindgen]
    pub fn set_today(&mut self, iso: &str) -> Result<(), JsValue> {
        let today: NaiveDate = iso
            .parse()
            .map_err(|e| JsValue::from_str(&format!("Invalid date {:?}: {}", iso, e)))?;
        self.parser = self.parser.clone().with_today(today);
        Ok(())
    }

    /// Set the default trip length in days.
    #[wasm_bindgen]
    pub fn set_trip_days(&mut self, days: u32) {
        self.parser = self.parser.clone().with_trip_days(days);
    }

    /// Extract travel information, returning the success/failure outcome.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.extract_outcome(text))
    }

    /// Get extraction result with warnings and timing.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let report = self
            .parser
            .parse(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExtractResult {
            result: ExtractionResult,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        to_js(&ExtractResult {
            result: report.result,
            warnings: report.warnings,
            processing_time_ms: report.processing_time_ms,
        })
    }
}

impl Default for TravelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_classify_document() {
        assert_eq!(classify_document("Boarding pass TG 315"), "flight");
        assert_eq!(classify_document("Check-in after 2pm"), "hotel");
        assert_eq!(classify_document("Museum ticket"), "other");
    }

    #[wasm_bindgen_test]
    fn test_extract_destination() {
        assert_eq!(extract_destination("Welcome to KYOTO station"), "Kyoto");
        assert_eq!(extract_destination("nowhere in particular"), "Unknown");
    }

    #[wasm_bindgen_test]
    fn test_extract_dates() {
        let dates = extract_dates("Depart 2024-12-25, return 02/01/2025");
        assert_eq!(dates.length(), 2);
        assert_eq!(dates.get(0).as_string().as_deref(), Some("2024-12-25"));
        assert_eq!(dates.get(1).as_string().as_deref(), Some("2025-01-02"));
    }

    #[wasm_bindgen_test]
    fn test_set_today_rejects_garbage() {
        let mut extractor = TravelExtractor::new();
        assert!(extractor.set_today("2024-06-01").is_ok());
        assert!(extractor.set_today("June first").is_err());
    }
}
