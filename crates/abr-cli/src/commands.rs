use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::{Cell, Table};

use abr_cli::pipeline::{CleanConfig, CleanOutcome, run_clean_pipeline};
use abr_model::{FieldKind, business_report_specs};

use crate::cli::{CleanArgs, SegmentArgs, SummaryArgs};
use crate::summary::{apply_table_style, print_segment_table, print_stats_table, print_top_tables};

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    run_clean_pipeline(&CleanConfig {
        input: args.input.clone(),
        output_dir,
        currency_symbol: args.currency_symbol.clone(),
        top_n: args.top_n,
        threshold_percentile: args.percentile,
        dry_run: args.dry_run,
    })
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let outcome = run_clean_pipeline(&CleanConfig {
        input: args.input.clone(),
        output_dir: default_output_dir(&args.input),
        currency_symbol: args.currency_symbol.clone(),
        top_n: args.top_n,
        threshold_percentile: 70.0,
        dry_run: true,
    })?;
    print_stats_table(&outcome.stats);
    print_top_tables(&outcome.stats);
    Ok(())
}

pub fn run_segment(args: &SegmentArgs) -> Result<()> {
    let outcome = run_clean_pipeline(&CleanConfig {
        input: args.input.clone(),
        output_dir: default_output_dir(&args.input),
        currency_symbol: args.currency_symbol.clone(),
        top_n: 0,
        threshold_percentile: args.percentile,
        dry_run: true,
    })?;
    match &outcome.segmentation {
        Some(segmentation) => print_segment_table(segmentation),
        None => println!("No record carried both sessions and conversion rate; nothing to segment."),
    }
    Ok(())
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Source header", "Kind", "Required"]);
    apply_table_style(&mut table);
    for spec in business_report_specs() {
        table.add_row(vec![
            Cell::new(spec.target_key.as_str()),
            Cell::new(&spec.source_label),
            Cell::new(kind_label(spec.kind)),
            Cell::new(if spec.required { "yes" } else { "" }),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Currency => "currency",
        FieldKind::Percentage => "percentage",
        FieldKind::Count => "count",
        FieldKind::Text => "text",
        FieldKind::Boolean => "boolean",
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .map_or_else(|| PathBuf::from("output"), |parent| parent.join("output"))
}
