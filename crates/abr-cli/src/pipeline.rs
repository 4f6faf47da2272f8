//! The end-to-end clean pipeline shared by the CLI commands.
//!
//! Ingest, normalize, segment, and export live in their own crates; this
//! module wires them together and decides where output files land.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use abr_ingest::read_report;
use abr_model::{QualityReport, business_report_specs};
use abr_normalize::{NormalizeOptions, normalize};
use abr_report::{SummaryStats, write_cleaned_csv_file, write_markdown, write_quality_json};
use abr_segment::{
    SegmentOptions, Segmentation, annotate_high_performers, annotate_quadrants, segment_records,
};

/// Configuration for one clean run.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Currency symbol stripped from monetary columns.
    pub currency_symbol: String,
    /// Number of products in each top-N report table.
    pub top_n: usize,
    /// Percentile separating high from low traffic and conversion.
    pub threshold_percentile: f64,
    /// Analyze without writing output files.
    pub dry_run: bool,
}

/// Everything one clean run produces.
#[derive(Debug)]
pub struct CleanOutcome {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub record_count: usize,
    pub quality: QualityReport,
    pub stats: SummaryStats,
    /// None when no record carried both segmentation metrics.
    pub segmentation: Option<Segmentation>,
    pub cleaned_csv: Option<PathBuf>,
    pub report_markdown: Option<PathBuf>,
    pub quality_json: Option<PathBuf>,
}

/// Run the full pipeline: read, normalize, annotate, and (unless dry-run)
/// write the cleaned CSV, the Markdown report, and the quality JSON.
pub fn run_clean_pipeline(config: &CleanConfig) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let specs = business_report_specs();
    let options = NormalizeOptions::new().with_currency_symbol(&config.currency_symbol);

    let table = read_report(&config.input)?;
    let outcome = normalize(&table, &specs, &options)?;
    let mut records = outcome.records;
    let quality = outcome.quality;

    annotate_high_performers(&mut records);
    let segment_options = SegmentOptions {
        threshold_percentile: config.threshold_percentile,
    };
    let segmentation = segment_records(&records, &segment_options);
    if let Some(segmentation) = &segmentation {
        annotate_quadrants(&mut records, segmentation);
    }

    let stats = SummaryStats::compute(&records, config.top_n);

    let (cleaned_csv, report_markdown, quality_json) = if config.dry_run {
        (None, None, None)
    } else {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!("create output directory: {}", config.output_dir.display())
        })?;
        let stem = file_stem(&config.input);
        let cleaned_csv = config.output_dir.join(format!("{stem}_cleaned.csv"));
        write_cleaned_csv_file(&cleaned_csv, &records, &specs)?;
        let report_markdown = config.output_dir.join(format!("{stem}_report.md"));
        write_markdown(&report_markdown, &stats, &quality, segmentation.as_ref())?;
        let quality_json = config.output_dir.join(format!("{stem}_quality.json"));
        write_quality_json(&quality_json, &quality, records.len())?;
        (Some(cleaned_csv), Some(report_markdown), Some(quality_json))
    };

    info!(
        records = records.len(),
        dropped = quality.dropped_rows,
        issues = quality.issues.len(),
        dry_run = config.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );

    Ok(CleanOutcome {
        source: config.input.clone(),
        output_dir: config.output_dir.clone(),
        record_count: records.len(),
        quality,
        stats,
        segmentation,
        cleaned_csv,
        report_markdown,
        quality_json,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("report")
        .to_string()
}
