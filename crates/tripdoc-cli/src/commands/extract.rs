//! Extract command - pull travel information from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::{debug, info};

use tripdoc_core::{DocumentPipeline, ParseResult, TravelDocumentParser};

use super::{extract_file, format_result, load_config, OutputFormat};
use crate::ocr_client::HttpOcrService;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (plain text, image or PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Reference date for missing dates (YYYY-MM-DD, default: today)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// OCR server base URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(endpoint) = &args.endpoint {
        config.ocr.endpoint = endpoint.clone();
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let mut parser = TravelDocumentParser::from_config(&config.extraction);
    if let Some(today) = args.today {
        parser = parser.with_today(today);
    }
    let pipeline = DocumentPipeline::new(parser)
        .with_min_text_length(config.extraction.min_text_length);
    let ocr = HttpOcrService::from_config(&config.ocr)?;

    let outcome = extract_file(&args.input, &pipeline, &ocr).await?;

    if let ParseResult::Failure(error) = &outcome {
        anyhow::bail!("{}", error);
    }

    let output = format_result(&outcome, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
