//! CLI entry point for the dataset analysis engine.

use anyhow::{anyhow, Result};
use clap::Parser;
use datalens_analysis::{AnalysisConfig, DatasetAnalyzer, Report, SensitivityType};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author = "Datalens Team",
    version,
    about = "Privacy-risk and data-quality analysis for tabular datasets",
    long_about = "Analyzes a CSV dataset and reports per-column and overall\n\
                  privacy risk and data quality scores.\n\n\
                  EXAMPLES:\n  \
                  # Human-readable summary\n  \
                  datalens-analysis -i data.csv\n\n  \
                  # JSON report on stdout, for piping\n  \
                  datalens-analysis -i data.csv --json | jq .privacy_analysis\n\n  \
                  # Write the report next to other outputs\n  \
                  datalens-analysis -i data.csv --emit-report -o results/"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long)]
    input: String,

    /// Output directory for the report file
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Output the full report as JSON to stdout instead of the summary
    ///
    /// Disables all logging; only the JSON report is written to stdout.
    #[arg(long)]
    json: bool,

    /// Write the report to <input_name>_report.json in the output directory
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Weight applied to uniqueness in the privacy risk score (0.0 - 1.0)
    #[arg(long, default_value = "0.7")]
    uniqueness_weight: f64,

    /// Lower bound of the medium risk tier (0.0 - 1.0)
    #[arg(long, default_value = "0.3")]
    medium_risk_threshold: f64,

    /// Lower bound of the high risk tier (0.0 - 1.0)
    #[arg(long, default_value = "0.6")]
    high_risk_threshold: f64,

    /// Number of sample values retained per column
    #[arg(long, default_value = "5")]
    sample_size: usize,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_csv(path: &str) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()?;
    Ok(df)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    info!("Loading dataset from: {}", args.input);
    let data = load_csv(&args.input)?;
    info!("Dataset loaded: {:?}", data.shape());

    let config = AnalysisConfig::builder()
        .uniqueness_weight(args.uniqueness_weight)
        .medium_risk_threshold(args.medium_risk_threshold)
        .high_risk_threshold(args.high_risk_threshold)
        .sample_size(args.sample_size)
        .build()?;

    let report = DatasetAnalyzer::new(config).analyze(&data)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&args.input, &report);
    }

    if args.emit_report {
        let path = write_report(&args.input, &args.output, &report)?;
        info!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Print the human-readable analysis summary.
///
/// Uses `println!` intentionally: this is the primary CLI output and
/// should be visible regardless of log level settings.
fn print_summary(input: &str, report: &Report) {
    println!("\n{}", "=".repeat(80));
    println!("DATASET PRIVACY AND QUALITY ANALYSIS");
    println!("{}\n", "=".repeat(80));

    println!("DATASET OVERVIEW");
    println!("{}", "-".repeat(40));
    println!("  File: {}", input);
    println!("  Rows: {}", report.dataset.row_count);
    println!("  Columns: {}", report.dataset.column_count);
    println!();

    println!("COLUMN SCORES");
    println!("{}", "-".repeat(40));
    println!(
        "{:<24} {:<10} {:<18} {:<10} {:<8}",
        "Column", "Type", "Sensitivity", "Risk", "Tier"
    );
    println!("{}", "-".repeat(74));

    let quality = &report.quality_analysis;
    let privacy = &report.privacy_analysis;

    for name in &report.dataset.column_names {
        let Some(score) = privacy.column_scores.get(name) else {
            continue;
        };
        let dtype = quality
            .column_details
            .data_types
            .get(name)
            .map(|d| d.dtype.as_str())
            .unwrap_or("unknown");
        let tier = if privacy.high_risk_columns.contains(name) {
            "high"
        } else if privacy.medium_risk_columns.contains(name) {
            "medium"
        } else {
            "low"
        };

        println!(
            "{:<24} {:<10} {:<18} {:<10.3} {:<8}",
            truncate_str(name, 23),
            dtype,
            sensitivity_label(score.sensitivity_type),
            score.privacy_risk_score,
            tier
        );
    }
    println!();

    println!("OVERALL SCORES");
    println!("{}", "-".repeat(40));
    println!(
        "  Privacy risk:     {:.3}  ({} high, {} medium, {} low)",
        privacy.overall_privacy_score,
        privacy.high_risk_columns.len(),
        privacy.medium_risk_columns.len(),
        privacy.low_risk_columns.len()
    );
    println!("  Quality:          {:.3}", quality.overall_quality_score);
    println!("    missing:        {:.3}", quality.missing_score);
    println!("    outliers:       {:.3}", quality.outlier_score);
    println!("    consistency:    {:.3}", quality.consistency_score);
    println!();
}

fn sensitivity_label(sensitivity: SensitivityType) -> &'static str {
    sensitivity.display_name()
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Write the report as JSON to `<output>/<input_stem>_report.json`.
fn write_report(input: &str, output_dir: &str, report: &Report) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    let path = Path::new(output_dir).join(format!("{stem}_report.json"));

    std::fs::write(&path, serde_json::to_string_pretty(report)?)?;
    Ok(path)
}
