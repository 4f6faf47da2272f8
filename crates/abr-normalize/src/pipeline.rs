use tracing::{debug, info, info_span};

use abr_ingest::HeaderIndex;
use abr_model::{
    FieldKey, FieldKind, FieldSpec, FieldValue, IssueKind, NormalizedRecord, QualityIssue,
    QualityReport, RawRecord, ReportTable, keys,
};

use crate::clean::{
    ParsedCell, parse_count_cell, parse_currency_cell, parse_flag_cell, parse_percentage_cell,
};
use crate::error::NormalizeError;
use crate::options::NormalizeOptions;
use crate::{sku, validate};

/// The normalized row set plus everything found wrong with it.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub records: Vec<NormalizedRecord>,
    pub quality: QualityReport,
}

struct ResolvedSpec<'a> {
    spec: &'a FieldSpec,
    /// Raw header this spec resolved to in the current table, if any.
    header: Option<&'a str>,
}

/// Normalize a raw report against a field-spec table.
///
/// Flagged rows stay in the output; filtering on quality issues is the
/// caller's decision. The only error is structural: a required column with
/// no match in the source header (an entirely headerless table normalizes to
/// an empty outcome instead, since there is nothing to check against).
pub fn normalize(
    table: &ReportTable,
    specs: &[FieldSpec],
    options: &NormalizeOptions,
) -> Result<NormalizeOutcome, NormalizeError> {
    let span = info_span!("normalize", source_id = %table.source_id);
    let _guard = span.enter();

    let identifier = specs
        .iter()
        .find(|spec| spec.target_key == options.identifier_key)
        .ok_or_else(|| {
            NormalizeError::MissingIdentifierSpec(options.identifier_key.to_string())
        })?;

    let index = HeaderIndex::from_headers(&table.headers);
    if index.is_empty() {
        debug!("table has no headers, nothing to normalize");
        return Ok(NormalizeOutcome {
            records: Vec::new(),
            quality: QualityReport::default(),
        });
    }

    let mut resolved = Vec::with_capacity(specs.len());
    for spec in specs {
        let header = index.resolve(&spec.source_label);
        if spec.required && header.is_none() {
            return Err(NormalizeError::MissingColumn {
                label: spec.source_label.clone(),
                field: spec.target_key.to_string(),
            });
        }
        resolved.push(ResolvedSpec { spec, header });
    }

    // The identifier column is load-bearing whether or not its entry is
    // marked required; without it no row can be referenced.
    let Some(identifier_header) = index.resolve(&identifier.source_label) else {
        return Err(NormalizeError::MissingColumn {
            label: identifier.source_label.clone(),
            field: identifier.target_key.to_string(),
        });
    };

    let mut quality = QualityReport::default();
    let mut records = Vec::with_capacity(table.records.len());
    for raw in &table.records {
        if raw.cell(identifier_header).trim().is_empty() {
            // A row with no identifier cannot be referenced; count, don't itemize.
            quality.dropped_rows += 1;
            continue;
        }
        let record = normalize_row(raw, &resolved, options, &mut quality);
        records.push(record);
    }

    quality.issues.extend(validate::check_duplicates(&records));
    quality.issues.extend(validate::check_ranges(&records, specs));
    quality.issues.extend(validate::check_negatives(&records));

    info!(
        records = records.len(),
        dropped = quality.dropped_rows,
        issues = quality.issues.len(),
        defective_cells = quality.defective_cells,
        "report normalized"
    );
    Ok(NormalizeOutcome { records, quality })
}

fn normalize_row(
    raw: &RawRecord,
    resolved: &[ResolvedSpec<'_>],
    options: &NormalizeOptions,
    quality: &mut QualityReport,
) -> NormalizedRecord {
    let mut record = NormalizedRecord::new(raw.id);
    for entry in resolved {
        // Optional columns absent from this export are skipped outright;
        // defaulting them would fabricate data the report never carried.
        let Some(header) = entry.header else {
            continue;
        };
        let value = parse_field(raw.cell(header), entry.spec, options, raw, quality);
        record.insert(entry.spec.target_key.clone(), value);
    }
    derive_metrics(&mut record);
    derive_sku_attributes(&mut record, options);
    record
}

fn parse_field(
    text: &str,
    spec: &FieldSpec,
    options: &NormalizeOptions,
    raw: &RawRecord,
    quality: &mut QualityReport,
) -> FieldValue {
    match spec.kind {
        FieldKind::Currency => match parse_currency_cell(text, &options.currency_symbol) {
            ParsedCell::Value(value) => FieldValue::Number(value),
            ParsedCell::Absent => FieldValue::Number(0.0),
            ParsedCell::Garbled => {
                quality.defective_cells += 1;
                FieldValue::Number(0.0)
            }
        },
        FieldKind::Count => match parse_count_cell(text) {
            ParsedCell::Value(value) => FieldValue::Count(value),
            ParsedCell::Absent => FieldValue::Count(0),
            ParsedCell::Garbled => {
                quality.defective_cells += 1;
                FieldValue::Count(0)
            }
        },
        FieldKind::Percentage => match parse_percentage_cell(text) {
            ParsedCell::Value(value) => FieldValue::Number(value),
            absent_or_garbled => {
                if absent_or_garbled == ParsedCell::Garbled {
                    quality.defective_cells += 1;
                }
                quality.push(QualityIssue {
                    kind: IssueKind::MissingValue,
                    field: spec.target_key.to_string(),
                    row: raw.id,
                    detail: format!("row {}: no usable percentage", raw.record_number),
                });
                FieldValue::Missing
            }
        },
        FieldKind::Text => FieldValue::Text(text.to_string()),
        FieldKind::Boolean => match parse_flag_cell(text) {
            ParsedCell::Value(value) => FieldValue::Flag(value),
            ParsedCell::Absent => FieldValue::Flag(false),
            ParsedCell::Garbled => {
                quality.defective_cells += 1;
                FieldValue::Flag(false)
            }
        },
    }
}

/// Derived ratios, always computed from normalized values with strict
/// `denominator > 0` guards so zero-session and zero-unit rows come out as 0,
/// never NaN or infinity.
fn derive_metrics(record: &mut NormalizedRecord) {
    let sessions = record.number(keys::SESSIONS_TOTAL).unwrap_or(0.0);
    let units = record.number(keys::UNITS_ORDERED).unwrap_or(0.0);
    let sales = record.number(keys::SALES_TOTAL).unwrap_or(0.0);

    let conversion_rate = if sessions > 0.0 {
        units / sessions * 100.0
    } else {
        0.0
    };
    let avg_order_value = if units > 0.0 { sales / units } else { 0.0 };
    let revenue_per_session = if sessions > 0.0 { sales / sessions } else { 0.0 };

    record.insert(
        FieldKey::new(keys::CONVERSION_RATE),
        FieldValue::Number(conversion_rate),
    );
    record.insert(
        FieldKey::new(keys::AVG_ORDER_VALUE),
        FieldValue::Number(avg_order_value),
    );
    record.insert(
        FieldKey::new(keys::REVENUE_PER_SESSION),
        FieldValue::Number(revenue_per_session),
    );
}

fn derive_sku_attributes(record: &mut NormalizedRecord, options: &NormalizeOptions) {
    let Some(identifier) = record.text(options.identifier_key.as_str()) else {
        return;
    };
    let identifier = identifier.to_string();
    record.insert(
        FieldKey::new(keys::IS_PRIME),
        FieldValue::Flag(sku::is_prime(&identifier)),
    );
    record.insert(
        FieldKey::new(keys::BASE_SKU),
        FieldValue::Text(sku::base_sku(&identifier)),
    );
    let category = match sku::sku_category(&identifier) {
        Some(category) => FieldValue::Text(category),
        None => FieldValue::Missing,
    };
    record.insert(FieldKey::new(keys::SKU_CATEGORY), category);
}
