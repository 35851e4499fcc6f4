//! HTTP client for the external OCR server.

use std::time::Duration;

use tracing::debug;

use tripdoc_core::error::OcrError;
use tripdoc_core::models::config::OcrConfig;
use tripdoc_core::{DocumentUpload, OcrResponse, OcrService};

/// OCR service reached over HTTP: `POST {endpoint}/api/ocr` with the file in
/// the multipart field `image`, answering `{success, text?, error?}`.
pub struct HttpOcrService {
    client: reqwest::Client,
    url: String,
}

impl HttpOcrService {
    pub fn from_config(config: &OcrConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.upload_url(),
        })
    }
}

impl OcrService for HttpOcrService {
    async fn recognize(&self, upload: &DocumentUpload) -> Result<OcrResponse, OcrError> {
        let kind = upload
            .kind()
            .ok_or_else(|| OcrError::UnsupportedFileType(upload.file_name.clone()))?;

        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(kind.mime_type())
            .map_err(transport)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        debug!("POST {} ({} bytes)", self.url, upload.bytes.len());

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        // Error statuses still carry a JSON body with the service's message
        let status = response.status();
        match response.json::<OcrResponse>().await {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(OcrError::Transport(format!("HTTP {}", status))),
            Err(e) => Err(transport(e)),
        }
    }
}

fn transport(e: reqwest::Error) -> OcrError {
    OcrError::Transport(e.to_string())
}
