//! Error types for the tripdoc-core library.

use thiserror::Error;

/// Main error type for the tripdoc library.
#[derive(Error, Debug)]
pub enum TripdocError {
    /// Travel document extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// OCR service error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to travel document field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A derived date falls outside the supported calendar range.
    #[error("date out of range: {base} + {days} days")]
    DateOutOfRange { base: chrono::NaiveDate, days: u32 },
}

/// Errors related to the external OCR service.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The upload is neither an image nor a PDF.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The service could not be reached or returned a transport-level failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered but reported a failure.
    #[error("service failure: {0}")]
    Service(String),

    /// The service returned too little text to extract from.
    #[error("insufficient text: got {len} characters, need at least {min}")]
    InsufficientText { len: usize, min: usize },
}

/// Result type for the tripdoc library.
pub type Result<T> = std::result::Result<T, TripdocError>;
