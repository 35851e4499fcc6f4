//! Upload → OCR → extraction workflow.

use tracing::{debug, info, warn};

use crate::document::{DocumentExtractor, TravelDocumentParser};
use crate::error::OcrError;
use crate::models::config::ExtractionConfig;
use crate::models::document::ParseResult;

use super::{DocumentUpload, OcrService};

pub const UNSUPPORTED_TYPE_MESSAGE: &str = "Unsupported file type. Please use an image or PDF.";
pub const INSUFFICIENT_TEXT_MESSAGE: &str =
    "Could not extract sufficient text from the document. Please try a clearer document.";
pub const PARSE_FAILED_MESSAGE: &str = "Failed to parse document";

/// Turns uploaded documents into travel information.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    parser: TravelDocumentParser,
    min_text_length: usize,
}

impl DocumentPipeline {
    pub fn new(parser: TravelDocumentParser) -> Self {
        Self {
            parser,
            min_text_length: ExtractionConfig::default().min_text_length,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(TravelDocumentParser::from_config(config)).with_min_text_length(config.min_text_length)
    }

    /// Set the minimum trimmed text length accepted from the OCR service.
    pub fn with_min_text_length(mut self, min: usize) -> Self {
        self.min_text_length = min;
        self
    }

    pub fn parser(&self) -> &TravelDocumentParser {
        &self.parser
    }

    /// Run OCR on the upload and return the recognized text.
    pub async fn recognize_text<S: OcrService>(
        &self,
        service: &S,
        upload: &DocumentUpload,
    ) -> Result<String, OcrError> {
        let kind = upload
            .kind()
            .ok_or_else(|| OcrError::UnsupportedFileType(upload.file_name.clone()))?;

        info!("Sending {:?} {} to OCR service", kind, upload.file_name);

        let response = service.recognize(upload).await?;
        if !response.success {
            return Err(OcrError::Service(
                response.error.unwrap_or_else(|| "Failed to extract text".to_string()),
            ));
        }

        let text = response.text.unwrap_or_default();
        let len = text.trim().chars().count();
        debug!("OCR returned {} characters", len);

        if len < self.min_text_length {
            return Err(OcrError::InsufficientText {
                len,
                min: self.min_text_length,
            });
        }

        Ok(text)
    }

    /// Parse an uploaded document. Never fails: every problem is reported as
    /// a failure outcome.
    pub async fn parse_document<S: OcrService>(
        &self,
        service: &S,
        upload: &DocumentUpload,
    ) -> ParseResult {
        match self.recognize_text(service, upload).await {
            Ok(text) => self.parser.extract_outcome(&text),
            Err(e) => {
                warn!("Error parsing document {}: {}", upload.file_name, e);
                ParseResult::failure(failure_message(&e))
            }
        }
    }
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self::new(TravelDocumentParser::new())
    }
}

fn failure_message(error: &OcrError) -> &'static str {
    match error {
        OcrError::UnsupportedFileType(_) => UNSUPPORTED_TYPE_MESSAGE,
        OcrError::InsufficientText { .. } => INSUFFICIENT_TEXT_MESSAGE,
        OcrError::Transport(_) | OcrError::Service(_) => PARSE_FAILED_MESSAGE,
    }
}
