//! Batch processing command for multiple travel documents.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use tripdoc_core::{DocumentPipeline, ParseResult, UploadKind};

use super::{extract_file, format_result, is_text_file, load_config, write_summary, OutputFormat};
use crate::ocr_client::HttpOcrService;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// OCR server base URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    outcome: ParseResult,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(endpoint) = &args.endpoint {
        config.ocr.endpoint = endpoint.clone();
    }

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
            is_text_file(p) || UploadKind::detect(name, "").is_some()
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let pipeline = DocumentPipeline::from_config(&config.extraction);
    let ocr = HttpOcrService::from_config(&config.ocr)?;

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = match extract_file(&path, &pipeline, &ocr).await {
            Ok(outcome) => outcome,
            Err(e) => ParseResult::failure(e.to_string()),
        };
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        if let Some(error_msg) = outcome.error() {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", path.display(), error_msg);
                anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
            }
        }

        results.push(ProcessResult {
            path,
            outcome,
            processing_time_ms,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write per-file outputs
    if let Some(output_dir) = &args.output_dir {
        for result in results.iter().filter(|r| r.outcome.is_success()) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("document");
            let output_path =
                output_dir.join(format!("{}.{}", output_name, args.format.extension()));

            fs::write(&output_path, format_result(&result.outcome, args.format)?)?;
            debug!(
                "Wrote output to {} ({}ms)",
                output_path.display(),
                result.processing_time_ms
            );
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(
            &summary_path,
            results.iter().map(|r| (r.path.as_path(), &r.outcome)),
        )?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.outcome.is_success()).collect();
    let successful = results.len() - failed.len();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.outcome.error().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
