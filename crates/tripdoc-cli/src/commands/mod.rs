//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use tracing::debug;

use tripdoc_core::models::config::TripdocConfig;
use tripdoc_core::{DocumentDetails, DocumentExtractor, DocumentPipeline, DocumentUpload, ParseResult};

use crate::ocr_client::HttpOcrService;

/// Extensions read directly as already-recognized text.
const TEXT_EXTENSIONS: &[&str] = &["txt", "text"];

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripdoc")
        .join("config.json")
}

/// Load the config from the given path, else the default location, else
/// built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<TripdocConfig> {
    if let Some(path) = config_path {
        return Ok(TripdocConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(TripdocConfig::from_file(&default_path)?)
    } else {
        Ok(TripdocConfig::default())
    }
}

pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Extract from one file: text files go straight to the parser, everything
/// else through the OCR service.
pub async fn extract_file(
    path: &Path,
    pipeline: &DocumentPipeline,
    ocr: &HttpOcrService,
) -> anyhow::Result<ParseResult> {
    if is_text_file(path) {
        let text = std::fs::read_to_string(path)?;
        debug!("Read {} characters of text from {}", text.len(), path.display());
        return Ok(pipeline.parser().extract_outcome(&text));
    }

    let upload = DocumentUpload::from_path(path)?;
    Ok(pipeline.parse_document(ocr, &upload).await)
}

pub fn format_result(outcome: &ParseResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Csv => format_csv(outcome),
        OutputFormat::Text => Ok(format_text(outcome)),
    }
}

const CSV_HEADER: [&str; 9] = [
    "type",
    "title",
    "destination",
    "start_date",
    "end_date",
    "airline",
    "flight_number",
    "hotel_name",
    "booking_reference",
];

fn csv_row(outcome: &ParseResult) -> [String; 9] {
    let Some(data) = outcome.data() else {
        return Default::default();
    };

    let flight = data.details.flight();
    let hotel = data.details.hotel();

    [
        data.kind.to_string(),
        data.title.clone(),
        data.destination.clone(),
        data.start_date.to_string(),
        data.end_date.to_string(),
        flight.and_then(|f| f.airline.clone()).unwrap_or_default(),
        flight.and_then(|f| f.flight_number.clone()).unwrap_or_default(),
        hotel.and_then(|h| h.hotel_name.clone()).unwrap_or_default(),
        hotel.and_then(|h| h.booking_reference.clone()).unwrap_or_default(),
    ]
}

fn format_csv(outcome: &ParseResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_row(outcome))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(outcome: &ParseResult) -> String {
    let data = match outcome {
        ParseResult::Success(data) => data,
        ParseResult::Failure(error) => return format!("Error: {}\n", error),
    };

    let mut output = String::new();

    output.push_str(&format!("{}\n", data.title));
    output.push_str(&format!("Type: {}\n", data.kind));
    output.push_str(&format!("Destination: {}\n", data.destination));
    output.push_str(&format!("Dates: {} - {}\n", data.start_date, data.end_date));

    match &data.details {
        DocumentDetails::Flight(flight) => {
            output.push_str("\nFlight:\n");
            output.push_str(&format!(
                "  Airline: {}\n",
                flight.airline.as_deref().unwrap_or("not specified")
            ));
            output.push_str(&format!(
                "  Flight number: {}\n",
                flight.flight_number.as_deref().unwrap_or("not specified")
            ));
        }
        DocumentDetails::Hotel(hotel) => {
            output.push_str("\nHotel:\n");
            output.push_str(&format!(
                "  Name: {}\n",
                hotel.hotel_name.as_deref().unwrap_or("not specified")
            ));
            output.push_str(&format!(
                "  Booking reference: {}\n",
                hotel.booking_reference.as_deref().unwrap_or("not specified")
            ));
        }
        DocumentDetails::None => {}
    }

    output
}

/// One summary CSV row per processed file.
pub fn write_summary<'a>(
    path: &Path,
    rows: impl IntoIterator<Item = (&'a Path, &'a ParseResult)>,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status"];
    header.extend(CSV_HEADER);
    header.push("error");
    wtr.write_record(&header)?;

    for (file, outcome) in rows {
        let filename = file.file_name().and_then(|s| s.to_str()).unwrap_or("");
        let status = if outcome.is_success() { "success" } else { "error" };

        let mut record = vec![filename.to_string(), status.to_string()];
        record.extend(csv_row(outcome));
        record.push(outcome.error().unwrap_or("").to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
