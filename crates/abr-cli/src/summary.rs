use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use abr_cli::pipeline::CleanOutcome;
use abr_model::{IssueKind, QualityReport};
use abr_report::{SummaryStats, TopProduct, format_money, format_numeric};
use abr_segment::{Quadrant, Segmentation};

pub fn print_clean_summary(result: &CleanOutcome) {
    println!("Input: {}", result.source.display());
    if let Some(path) = &result.cleaned_csv {
        println!("Cleaned CSV: {}", path.display());
    }
    if let Some(path) = &result.report_markdown {
        println!("Report: {}", path.display());
    }
    if let Some(path) = &result.quality_json {
        println!("Quality report: {}", path.display());
    }
    println!();
    print_stats_table(&result.stats);
    print_quality_table(&result.quality);
    if let Some(segmentation) = &result.segmentation {
        print_segment_table(segmentation);
    }
}

pub fn print_stats_table(stats: &SummaryStats) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Products"), Cell::new(stats.record_count)]);
    table.add_row(vec![
        Cell::new("Total sessions"),
        Cell::new(stats.total_sessions),
    ]);
    table.add_row(vec![
        Cell::new("Total units ordered"),
        Cell::new(stats.total_units),
    ]);
    table.add_row(vec![
        Cell::new("Total sales"),
        Cell::new(format_money(stats.total_sales)),
    ]);
    table.add_row(vec![
        Cell::new("Average conversion rate"),
        Cell::new(format!("{}%", format_numeric(stats.avg_conversion_rate))),
    ]);
    table.add_row(vec![
        Cell::new("Average order value"),
        Cell::new(format_money(stats.avg_order_value)),
    ]);
    println!("{table}");
}

pub fn print_top_tables(stats: &SummaryStats) {
    print_top_table("Top products by sales", &stats.top_by_sales, true);
    print_top_table(
        "Top products by conversion rate",
        &stats.top_by_conversion,
        false,
    );
}

fn print_top_table(heading: &str, products: &[TopProduct], money: bool) {
    if products.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("SKU"),
        header_cell("Title"),
        header_cell("Value"),
        header_cell("Units"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for product in products {
        let value = if money {
            format_money(product.value)
        } else {
            format!("{}%", format_numeric(product.value))
        };
        table.add_row(vec![
            Cell::new(&product.sku).fg(Color::Blue),
            Cell::new(&product.title),
            Cell::new(value),
            Cell::new(product.units),
        ]);
    }
    println!();
    println!("{heading}:");
    println!("{table}");
}

pub fn print_quality_table(quality: &QualityReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Finding"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Rows dropped (no identifier)"),
        count_cell(quality.dropped_rows as u64, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Defective cells"),
        count_cell(quality.defective_cells, Color::Yellow),
    ]);
    for kind in [
        IssueKind::MissingValue,
        IssueKind::Duplicate,
        IssueKind::OutOfRange,
        IssueKind::NegativeValue,
    ] {
        table.add_row(vec![
            Cell::new(kind.label()),
            count_cell(quality.count_of(kind) as u64, Color::Red),
        ]);
    }
    println!();
    println!("Data quality:");
    println!("{table}");
}

pub fn print_segment_table(segmentation: &Segmentation) {
    let thresholds = segmentation.thresholds;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Quadrant"), header_cell("Products")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for quadrant in Quadrant::ALL {
        table.add_row(vec![
            Cell::new(quadrant.label()),
            Cell::new(segmentation.count_of(quadrant)),
        ]);
    }
    println!();
    println!(
        "Performance quadrants (p{}: {} sessions, {}% conversion):",
        format_numeric(thresholds.percentile),
        format_numeric(thresholds.traffic),
        format_numeric(thresholds.conversion)
    );
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
