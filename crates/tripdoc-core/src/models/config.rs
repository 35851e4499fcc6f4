//! Configuration structures for extraction and the OCR service.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TripdocError};

/// Main configuration for tripdoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripdocConfig {
    /// Travel document extraction configuration.
    pub extraction: ExtractionConfig,

    /// External OCR service configuration.
    pub ocr: OcrConfig,
}

/// Travel document extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Days added to the start date when no end date is found.
    pub default_trip_days: u32,

    /// Minimum OCR text length (after trimming) worth extracting from.
    pub min_text_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_trip_days: 7,
            min_text_length: 20,
        }
    }
}

/// External OCR service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Base URL of the OCR server; uploads go to `{endpoint}/api/ocr`.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// User agent sent with OCR requests.
    pub user_agent: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000".to_string(),
            timeout_secs: 60,
            user_agent: concat!("tripdoc/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl OcrConfig {
    /// Full URL of the OCR upload route.
    pub fn upload_url(&self) -> String {
        format!("{}/api/ocr", self.endpoint.trim_end_matches('/'))
    }
}

impl TripdocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TripdocError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
