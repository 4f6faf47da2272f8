//! Tests for abr-model types.

use abr_model::{
    FieldKey, FieldValue, IssueKind, NormalizedRecord, QualityIssue, QualityReport, RowId,
    business_report_specs, keys,
};

#[test]
fn quality_report_serializes() {
    let report = QualityReport {
        issues: vec![QualityIssue {
            kind: IssueKind::OutOfRange,
            field: keys::BUY_BOX_PERCENTAGE.to_string(),
            row: RowId::derive("inputs/report.csv", 3),
            detail: "150 outside [0, 100]".to_string(),
        }],
        dropped_rows: 2,
        defective_cells: 1,
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: QualityReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round.issues.len(), 1);
    assert_eq!(round.issues[0].kind, IssueKind::OutOfRange);
    assert_eq!(round.dropped_rows, 2);
    assert_eq!(round.defective_cells, 1);
}

#[test]
fn row_id_round_trips_through_hex() {
    let id = RowId::derive("inputs/report.csv", 7);
    let json = serde_json::to_string(&id).expect("serialize id");
    let round: RowId = serde_json::from_str(&json).expect("deserialize id");
    assert_eq!(id, round);
    assert_eq!(id.to_hex().len(), 32);
}

#[test]
fn normalized_record_round_trips() {
    let mut record = NormalizedRecord::new(RowId::derive("inputs/report.csv", 1));
    record.insert(FieldKey::new(keys::SKU), FieldValue::Text("AB-1".to_string()));
    record.insert(FieldKey::new(keys::SESSIONS_TOTAL), FieldValue::Count(1000));
    record.insert(FieldKey::new(keys::SALES_TOTAL), FieldValue::Number(500.0));
    record.insert(
        FieldKey::new(keys::BUY_BOX_PERCENTAGE),
        FieldValue::Missing,
    );

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: NormalizedRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round.text(keys::SKU), Some("AB-1"));
    assert_eq!(round.count(keys::SESSIONS_TOTAL), Some(1000));
    assert_eq!(round.number(keys::SALES_TOTAL), Some(500.0));
    assert!(round.get(keys::BUY_BOX_PERCENTAGE).is_some_and(FieldValue::is_missing));
}

#[test]
fn default_spec_table_covers_the_export_columns() {
    let specs = business_report_specs();
    assert_eq!(specs.len(), 22);
    assert!(
        specs
            .iter()
            .any(|spec| spec.source_label == "Featured Offer (Buy Box) percentage")
    );
    // Source labels carry the en dash the real exports use.
    assert!(specs.iter().any(|spec| spec.source_label == "Sessions – Total"));
}
