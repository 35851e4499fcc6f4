//! Core library for travel document extraction.
//!
//! This crate provides:
//! - Document classification (flight, hotel, other)
//! - Rule-based field extraction (dates, destination, airline, flight number,
//!   hotel name, booking reference)
//! - Result assembly with defaults for missing fields
//! - The OCR service boundary and the upload parse workflow

pub mod error;
pub mod models;
pub mod document;
pub mod ocr;

pub use error::{TripdocError, Result};
pub use models::document::{
    DocumentDetails, DocumentKind, ExtractionResult, FlightDetails, HotelDetails, ParseResult,
};
pub use document::{
    extract_travel_info, DocumentExtractor, ExtractionReport, TravelDocumentParser,
    EXTRACTION_FAILED_MESSAGE,
};
pub use ocr::{DocumentPipeline, DocumentUpload, OcrResponse, OcrService, UploadKind};
