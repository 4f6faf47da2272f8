//! Markdown report rendering.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use abr_model::{IssueKind, QualityReport};
use abr_segment::{Quadrant, Segmentation};

use crate::numeric::{format_money, format_numeric};
use crate::summary::{SummaryStats, TopProduct};

/// Render the full analysis report as Markdown.
pub fn render_markdown(
    stats: &SummaryStats,
    quality: &QualityReport,
    segmentation: Option<&Segmentation>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Business Report Analysis");
    let _ = writeln!(out);

    let _ = writeln!(out, "## Overview");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "| --- | --- |");
    let _ = writeln!(out, "| Products | {} |", stats.record_count);
    let _ = writeln!(out, "| Total sessions | {} |", stats.total_sessions);
    let _ = writeln!(out, "| Total units ordered | {} |", stats.total_units);
    let _ = writeln!(out, "| Total sales | {} |", format_money(stats.total_sales));
    let _ = writeln!(
        out,
        "| Average conversion rate | {}% |",
        format_numeric(stats.avg_conversion_rate)
    );
    let _ = writeln!(
        out,
        "| Average order value | {} |",
        format_money(stats.avg_order_value)
    );
    let _ = writeln!(out);

    write_quality_section(&mut out, quality);
    if let Some(segmentation) = segmentation {
        write_quadrant_section(&mut out, segmentation);
    }
    write_top_section(&mut out, "Top Products by Sales", &stats.top_by_sales, true);
    write_top_section(
        &mut out,
        "Top Products by Conversion Rate",
        &stats.top_by_conversion,
        false,
    );
    if let Some(split) = &stats.prime_split {
        let _ = writeln!(out, "## Prime vs Non-Prime");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Group | Products | Sales | Avg conversion |");
        let _ = writeln!(out, "| --- | ---: | ---: | ---: |");
        let _ = writeln!(
            out,
            "| Prime | {} | {} | {}% |",
            split.prime_count,
            format_money(split.prime_sales),
            format_numeric(split.prime_avg_conversion)
        );
        let _ = writeln!(
            out,
            "| Non-Prime | {} | {} | {}% |",
            split.non_prime_count,
            format_money(split.non_prime_sales),
            format_numeric(split.non_prime_avg_conversion)
        );
        let _ = writeln!(out);
    }

    out
}

fn write_quality_section(out: &mut String, quality: &QualityReport) {
    let _ = writeln!(out, "## Data Quality");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Rows dropped (no identifier): {}", quality.dropped_rows);
    let _ = writeln!(out, "- Defective cells repaired: {}", quality.defective_cells);
    for kind in [
        IssueKind::MissingValue,
        IssueKind::Duplicate,
        IssueKind::OutOfRange,
        IssueKind::NegativeValue,
    ] {
        let count = quality.count_of(kind);
        if count > 0 {
            let _ = writeln!(out, "- {}: {count}", kind.label());
        }
    }
    let _ = writeln!(out);

    if quality.has_issues() {
        let _ = writeln!(out, "| Issue | Field | Row | Detail |");
        let _ = writeln!(out, "| --- | --- | --- | --- |");
        for issue in &quality.issues {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                issue.kind.label(),
                issue.field,
                issue.row,
                issue.detail
            );
        }
        let _ = writeln!(out);
    }
}

fn write_quadrant_section(out: &mut String, segmentation: &Segmentation) {
    let thresholds = segmentation.thresholds;
    let _ = writeln!(out, "## Performance Quadrants");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Thresholds at p{}: {} sessions, {}% conversion.",
        format_numeric(thresholds.percentile),
        format_numeric(thresholds.traffic),
        format_numeric(thresholds.conversion)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "| Quadrant | Products |");
    let _ = writeln!(out, "| --- | ---: |");
    for quadrant in Quadrant::ALL {
        let _ = writeln!(
            out,
            "| {} | {} |",
            quadrant.label(),
            segmentation.count_of(quadrant)
        );
    }
    let _ = writeln!(out);
}

fn write_top_section(out: &mut String, heading: &str, products: &[TopProduct], money: bool) {
    if products.is_empty() {
        return;
    }
    let _ = writeln!(out, "## {heading}");
    let _ = writeln!(out);
    let _ = writeln!(out, "| SKU | Title | Value | Units |");
    let _ = writeln!(out, "| --- | --- | ---: | ---: |");
    for product in products {
        let value = if money {
            format_money(product.value)
        } else {
            format!("{}%", format_numeric(product.value))
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            product.sku, product.title, value, product.units
        );
    }
    let _ = writeln!(out);
}

pub fn write_markdown(
    path: &Path,
    stats: &SummaryStats,
    quality: &QualityReport,
    segmentation: Option<&Segmentation>,
) -> Result<()> {
    let markdown = render_markdown(stats, quality, segmentation);
    std::fs::write(path, markdown)
        .with_context(|| format!("write markdown report: {}", path.display()))
}
