//! Machine-readable quality report export.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use abr_model::{IssueKind, QualityReport};

#[derive(Debug, serde::Serialize)]
struct QualitySummary<'a> {
    records: usize,
    dropped_rows: usize,
    defective_cells: u64,
    issue_counts: BTreeMap<&'static str, usize>,
    issues: &'a [abr_model::QualityIssue],
}

/// Render the quality report as pretty-printed JSON.
pub fn render_quality_json(quality: &QualityReport, record_count: usize) -> Result<String> {
    let mut issue_counts = BTreeMap::new();
    for kind in [
        IssueKind::MissingValue,
        IssueKind::Duplicate,
        IssueKind::OutOfRange,
        IssueKind::NegativeValue,
    ] {
        issue_counts.insert(kind.label(), quality.count_of(kind));
    }
    let summary = QualitySummary {
        records: record_count,
        dropped_rows: quality.dropped_rows,
        defective_cells: quality.defective_cells,
        issue_counts,
        issues: &quality.issues,
    };
    serde_json::to_string_pretty(&summary).context("serialize quality report")
}

pub fn write_quality_json(
    path: &Path,
    quality: &QualityReport,
    record_count: usize,
) -> Result<()> {
    let json = render_quality_json(quality, record_count)?;
    std::fs::write(path, json)
        .with_context(|| format!("write quality report: {}", path.display()))
}
