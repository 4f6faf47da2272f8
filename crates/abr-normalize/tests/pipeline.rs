//! End-to-end tests for the report normalizer.

use std::collections::BTreeMap;

use abr_model::{
    FieldKind, FieldSpec, IssueKind, RawRecord, ReportTable, RowId, business_report_specs, keys,
};
use abr_normalize::{NormalizeError, NormalizeOptions, normalize};

fn table(headers: &[&str], rows: &[&[&str]]) -> ReportTable {
    let mut table = ReportTable::new(
        "test.csv",
        headers.iter().map(|h| (*h).to_string()).collect(),
    );
    for (idx, row) in rows.iter().enumerate() {
        let record_number = (idx + 1) as u64;
        let cells: BTreeMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| ((*h).to_string(), (*v).to_string()))
            .collect();
        table.push_record(RawRecord {
            id: RowId::derive("test.csv", record_number),
            record_number,
            cells,
        });
    }
    table
}

const CORE_HEADERS: [&str; 4] = [
    "SKU",
    "Sessions – Total",
    "Units ordered",
    "Ordered Product Sales",
];

#[test]
fn derived_metrics_round_trip() {
    let table = table(&CORE_HEADERS, &[&["AB-1", "200", "50", "£1,000.00"]]);
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");

    let record = &outcome.records[0];
    assert_eq!(record.number(keys::CONVERSION_RATE), Some(25.0));
    assert_eq!(record.number(keys::AVG_ORDER_VALUE), Some(20.0));
    assert_eq!(record.number(keys::REVENUE_PER_SESSION), Some(5.0));
}

#[test]
fn zero_denominators_yield_zero_not_infinity() {
    let table = table(
        &CORE_HEADERS,
        &[
            &["A", "1,000", "50", "£500.00"],
            &["B", "0", "0", "£0.00"],
            // Units without sessions must still give conversion 0.
            &["C", "0", "7", "£70.00"],
        ],
    );
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");

    let a = &outcome.records[0];
    assert_eq!(a.number(keys::CONVERSION_RATE), Some(5.0));
    assert_eq!(a.number(keys::AVG_ORDER_VALUE), Some(10.0));

    let b = &outcome.records[1];
    assert_eq!(b.number(keys::CONVERSION_RATE), Some(0.0));
    assert_eq!(b.number(keys::AVG_ORDER_VALUE), Some(0.0));
    assert_eq!(b.number(keys::REVENUE_PER_SESSION), Some(0.0));

    let c = &outcome.records[2];
    assert_eq!(c.number(keys::CONVERSION_RATE), Some(0.0));
    assert_eq!(c.number(keys::AVG_ORDER_VALUE), Some(10.0));
}

#[test]
fn rows_without_identifier_are_dropped_and_counted() {
    let rows: Vec<Vec<&str>> = (0..10)
        .map(|idx| {
            let sku = if idx == 3 || idx == 7 { "" } else { "AB-1" };
            vec![sku, "10", "1", "£10.00"]
        })
        .collect();
    let rows: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();
    let table = table(&CORE_HEADERS, &rows);

    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");
    assert_eq!(outcome.records.len(), 8);
    assert_eq!(outcome.quality.dropped_rows, 2);
    // Dropped rows are counted, not itemized.
    assert_eq!(outcome.quality.count_of(IssueKind::MissingValue), 0);
}

#[test]
fn duplicates_are_flagged_once_and_kept() {
    let table = table(
        &CORE_HEADERS,
        &[
            &["AB-1", "10", "1", "£10.00"],
            &["AB-1", "10", "1", "£10.00"],
        ],
    );
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.quality.count_of(IssueKind::Duplicate), 1);
}

#[test]
fn out_of_range_buy_box_is_flagged_not_clamped() {
    let headers = [
        "SKU",
        "Sessions – Total",
        "Units ordered",
        "Ordered Product Sales",
        "Featured Offer (Buy Box) percentage",
    ];
    let table = table(&headers, &[&["AB-1", "10", "1", "£10.00", "150%"]]);
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(
        outcome.records[0].number(keys::BUY_BOX_PERCENTAGE),
        Some(150.0)
    );
    assert_eq!(outcome.quality.count_of(IssueKind::OutOfRange), 1);
}

#[test]
fn empty_percentage_cell_is_missing_and_reported() {
    let headers = [
        "SKU",
        "Sessions – Total",
        "Units ordered",
        "Ordered Product Sales",
        "Featured Offer (Buy Box) percentage",
    ];
    let table = table(&headers, &[&["AB-1", "10", "1", "£10.00", ""]]);
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");

    let value = outcome.records[0]
        .get(keys::BUY_BOX_PERCENTAGE)
        .expect("field present");
    assert!(value.is_missing());
    assert_eq!(outcome.quality.count_of(IssueKind::MissingValue), 1);
}

#[test]
fn negative_magnitudes_are_flagged() {
    let table = table(&CORE_HEADERS, &[&["AB-1", "-5", "1", "£-10.00"]]);
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");

    assert_eq!(outcome.quality.count_of(IssueKind::NegativeValue), 2);
    // The values themselves pass through.
    assert_eq!(outcome.records[0].count(keys::SESSIONS_TOTAL), Some(-5));
    assert_eq!(outcome.records[0].number(keys::SALES_TOTAL), Some(-10.0));
}

#[test]
fn missing_required_column_is_fatal() {
    let table = table(&["SKU", "Sessions – Total"], &[&["AB-1", "10"]]);
    let err = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .unwrap_err();
    match err {
        NormalizeError::MissingColumn { field, .. } => assert_eq!(field, keys::SALES_TOTAL),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn headerless_table_normalizes_to_nothing() {
    let table = ReportTable::new("empty.csv", Vec::new());
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");
    assert!(outcome.records.is_empty());
    assert!(!outcome.quality.has_issues());
}

#[test]
fn ascii_dash_headers_resolve_like_en_dash_labels() {
    // The spec table uses en dashes; this export spells headers with ASCII hyphens.
    let headers = ["SKU", "Sessions - Total", "Units ordered", "Ordered Product Sales"];
    let table = table(&headers, &[&["AB-1", "200", "50", "£1,000.00"]]);
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");
    assert_eq!(outcome.records[0].count(keys::SESSIONS_TOTAL), Some(200));
    assert_eq!(outcome.records[0].number(keys::CONVERSION_RATE), Some(25.0));
}

#[test]
fn sku_attributes_are_derived_from_the_identifier() {
    let table = table(&CORE_HEADERS, &[&["BGS01 - 2 Prime", "10", "1", "£10.00"]]);
    let outcome = normalize(&table, &business_report_specs(), &NormalizeOptions::default())
        .expect("normalize");

    let record = &outcome.records[0];
    assert_eq!(record.flag(keys::IS_PRIME), Some(true));
    assert_eq!(record.text(keys::BASE_SKU), Some("BGS01"));
    assert_eq!(record.text(keys::SKU_CATEGORY), Some("BGS"));
}

#[test]
fn normalizing_normalized_output_is_stable() {
    let first = normalize(
        &table(&CORE_HEADERS, &[&["AB-1", "200", "50", "£1,000.00"]]),
        &business_report_specs(),
        &NormalizeOptions::default(),
    )
    .expect("first pass");
    let record = &first.records[0];

    // Render the normalized values back to text and run them through a
    // trivial identity spec set.
    let identity_specs = vec![
        FieldSpec::new(keys::SKU, keys::SKU, FieldKind::Text).required(),
        FieldSpec::new(keys::SESSIONS_TOTAL, keys::SESSIONS_TOTAL, FieldKind::Count),
        FieldSpec::new(keys::UNITS_ORDERED, keys::UNITS_ORDERED, FieldKind::Count),
        FieldSpec::new(keys::SALES_TOTAL, keys::SALES_TOTAL, FieldKind::Currency).required(),
    ];
    let rendered = [
        record.text(keys::SKU).expect("sku").to_string(),
        record.count(keys::SESSIONS_TOTAL).expect("sessions").to_string(),
        record.count(keys::UNITS_ORDERED).expect("units").to_string(),
        format!("{}", record.number(keys::SALES_TOTAL).expect("sales")),
    ];
    let rendered_row: Vec<&str> = rendered.iter().map(String::as_str).collect();
    let second_table = table(
        &[keys::SKU, keys::SESSIONS_TOTAL, keys::UNITS_ORDERED, keys::SALES_TOTAL],
        &[rendered_row.as_slice()],
    );

    let second = normalize(&second_table, &identity_specs, &NormalizeOptions::default())
        .expect("second pass");
    let again = &second.records[0];
    assert_eq!(again.count(keys::SESSIONS_TOTAL), record.count(keys::SESSIONS_TOTAL));
    assert_eq!(again.number(keys::SALES_TOTAL), record.number(keys::SALES_TOTAL));
    assert_eq!(
        again.number(keys::CONVERSION_RATE),
        record.number(keys::CONVERSION_RATE)
    );
    assert_eq!(
        again.number(keys::AVG_ORDER_VALUE),
        record.number(keys::AVG_ORDER_VALUE)
    );
}
