//! Cleaned-CSV export.
//!
//! Writes the normalized set back out with canonical lower_snake_case
//! headers: spec columns in table order, then the derived columns.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use abr_model::{FieldKey, FieldSpec, FieldValue, NormalizedRecord, keys};

use crate::numeric::format_numeric;

/// The output column order: spec targets first, derived fields after.
pub fn cleaned_columns(specs: &[FieldSpec]) -> Vec<FieldKey> {
    let mut columns: Vec<FieldKey> = specs.iter().map(|spec| spec.target_key.clone()).collect();
    for derived in [
        keys::CONVERSION_RATE,
        keys::AVG_ORDER_VALUE,
        keys::REVENUE_PER_SESSION,
        keys::IS_PRIME,
        keys::BASE_SKU,
        keys::SKU_CATEGORY,
        keys::HIGH_CONVERSION,
        keys::HIGH_REVENUE,
        keys::QUADRANT,
    ] {
        let key = FieldKey::new(derived);
        if !columns.contains(&key) {
            columns.push(key);
        }
    }
    columns
}

/// Render one typed value as CSV cell text; absent and missing are empty.
pub fn render_value(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Number(v)) => format_numeric(*v),
        Some(FieldValue::Count(v)) => v.to_string(),
        Some(FieldValue::Text(v)) => v.clone(),
        Some(FieldValue::Flag(v)) => v.to_string(),
        Some(FieldValue::Missing) | None => String::new(),
    }
}

pub fn write_cleaned_csv<W: Write>(
    writer: W,
    records: &[NormalizedRecord],
    specs: &[FieldSpec],
) -> Result<()> {
    let columns = cleaned_columns(specs);
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(columns.iter().map(FieldKey::as_str))
        .context("write cleaned csv header")?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| render_value(record.get(column.as_str())))
            .collect();
        csv_writer.write_record(&row).context("write cleaned csv row")?;
    }
    csv_writer.flush().context("flush cleaned csv")?;
    Ok(())
}

pub fn write_cleaned_csv_file(
    path: &Path,
    records: &[NormalizedRecord],
    specs: &[FieldSpec],
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create cleaned csv: {}", path.display()))?;
    write_cleaned_csv(file, records, specs)
}
