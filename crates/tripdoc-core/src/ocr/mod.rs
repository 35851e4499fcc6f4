//! OCR service boundary and the document parse workflow.
//!
//! Text recognition itself happens in an external service. This module
//! defines what is sent to it, what comes back, and how an upload turns into
//! a [`ParseResult`].

mod pipeline;

pub use pipeline::{
    DocumentPipeline, INSUFFICIENT_TEXT_MESSAGE, PARSE_FAILED_MESSAGE, UNSUPPORTED_TYPE_MESSAGE,
};

use std::future::Future;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Kind of file the OCR service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Pdf,
}

impl UploadKind {
    /// Detect the upload kind from the MIME type or the file name. A PDF
    /// signal on either side wins over an image one.
    pub fn detect(file_name: &str, mime_type: &str) -> Option<Self> {
        let mime_type = mime_type.to_lowercase();
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if mime_type.contains("pdf") || extension == "pdf" {
            Some(Self::Pdf)
        } else if mime_type.contains("image") || IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Image)
        } else {
            None
        }
    }

    /// MIME type sent to the OCR service.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Image => "image/jpeg",
            Self::Pdf => "application/pdf",
        }
    }
}

/// A document file on its way to the OCR service.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// File name, used for type detection and the multipart part name.
    pub file_name: String,
    /// MIME type reported by the picker, may be empty.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read an upload from disk. The MIME type is left empty so detection
    /// falls back to the file extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        Ok(Self::new(file_name, "", bytes))
    }

    pub fn kind(&self) -> Option<UploadKind> {
        UploadKind::detect(&self.file_name, &self.mime_type)
    }
}

/// Response body of the OCR service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OcrResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            error: Some(error.into()),
        }
    }
}

/// External OCR capability: converts an image or PDF into raw text.
pub trait OcrService {
    /// Send the upload for recognition.
    fn recognize(
        &self,
        upload: &DocumentUpload,
    ) -> impl Future<Output = Result<OcrResponse, OcrError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime_type() {
        assert_eq!(UploadKind::detect("scan", "image/png"), Some(UploadKind::Image));
        assert_eq!(UploadKind::detect("ticket", "application/pdf"), Some(UploadKind::Pdf));
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(UploadKind::detect("IMG_0042.JPG", ""), Some(UploadKind::Image));
        assert_eq!(UploadKind::detect("booking.pdf", ""), Some(UploadKind::Pdf));
        assert_eq!(UploadKind::detect("notes.txt", "text/plain"), None);
        assert_eq!(UploadKind::detect("archive", ""), None);
    }

    #[test]
    fn test_pdf_wins_over_image() {
        assert_eq!(UploadKind::detect("page.pdf", "image/jpeg"), Some(UploadKind::Pdf));
        assert_eq!(UploadKind::detect("scan.png", "application/pdf"), Some(UploadKind::Pdf));
        assert_eq!(
            UploadKind::detect("page.pdf", "image/jpeg").map(|k| k.mime_type()),
            Some("application/pdf")
        );
    }

    #[test]
    fn test_response_json() {
        let ok: OcrResponse = serde_json::from_str(r#"{"success": true, "text": "Hi"}"#).unwrap();
        assert_eq!(ok, OcrResponse::text("Hi"));

        let failed: OcrResponse = serde_json::from_str(
            r#"{"success": false, "error": "Failed to process document", "details": "x"}"#,
        )
        .unwrap();
        assert_eq!(failed, OcrResponse::error("Failed to process document"));
    }
}
