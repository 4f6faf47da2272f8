//! Validation passes over the normalized row set.
//!
//! Each pass is pure and returns findings; nothing here drops or mutates
//! rows. Out-of-range values pass through unclamped so downstream consumers
//! can decide policy.

use std::collections::HashMap;

use abr_model::{FieldKind, FieldSpec, IssueKind, NormalizedRecord, QualityIssue, keys};

/// Flag rows whose normalized values are identical across every field.
///
/// Row ids are excluded from the comparison. For n identical rows, n-1
/// issues are emitted, each later occurrence referencing the first; no row
/// is dropped.
pub fn check_duplicates(records: &[NormalizedRecord]) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<String, &NormalizedRecord> = HashMap::new();
    for record in records {
        // Values are a BTreeMap, so the serialized form is canonical.
        let Ok(fingerprint) = serde_json::to_string(&record.values) else {
            continue;
        };
        match seen.get(&fingerprint) {
            Some(first) => issues.push(QualityIssue {
                kind: IssueKind::Duplicate,
                field: String::new(),
                row: record.id,
                detail: format!("identical to row {}", first.id),
            }),
            None => {
                seen.insert(fingerprint, record);
            }
        }
    }
    issues
}

/// Flag percentage fields outside [0, 100] and conversion rates above 100.
///
/// Both occur in real exports; they are reported, not rejected.
pub fn check_ranges(records: &[NormalizedRecord], specs: &[FieldSpec]) -> Vec<QualityIssue> {
    let percentage_keys: Vec<&str> = specs
        .iter()
        .filter(|spec| spec.kind == FieldKind::Percentage)
        .map(|spec| spec.target_key.as_str())
        .collect();

    let mut issues = Vec::new();
    for record in records {
        for key in &percentage_keys {
            let Some(value) = record.number(key) else {
                continue;
            };
            if !(0.0..=100.0).contains(&value) {
                issues.push(QualityIssue {
                    kind: IssueKind::OutOfRange,
                    field: (*key).to_string(),
                    row: record.id,
                    detail: format!("{value} outside [0, 100]"),
                });
            }
        }
        if let Some(rate) = record.number(keys::CONVERSION_RATE)
            && rate > 100.0
        {
            issues.push(QualityIssue {
                kind: IssueKind::OutOfRange,
                field: keys::CONVERSION_RATE.to_string(),
                row: record.id,
                detail: format!("{rate} exceeds 100"),
            });
        }
    }
    issues
}

/// Flag negative sessions, units, and sales magnitudes.
pub fn check_negatives(records: &[NormalizedRecord]) -> Vec<QualityIssue> {
    const CHECKED: [&str; 3] = [keys::SESSIONS_TOTAL, keys::UNITS_ORDERED, keys::SALES_TOTAL];

    let mut issues = Vec::new();
    for record in records {
        for key in CHECKED {
            let Some(value) = record.number(key) else {
                continue;
            };
            if value < 0.0 {
                issues.push(QualityIssue {
                    kind: IssueKind::NegativeValue,
                    field: key.to_string(),
                    row: record.id,
                    detail: format!("{value} is negative"),
                });
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use abr_model::{FieldKey, FieldValue, RowId};

    fn record(n: u64, sessions: i64, sales: f64) -> NormalizedRecord {
        let mut record = NormalizedRecord::new(RowId::derive("t", n));
        record.insert(FieldKey::new(keys::SESSIONS_TOTAL), FieldValue::Count(sessions));
        record.insert(FieldKey::new(keys::SALES_TOTAL), FieldValue::Number(sales));
        record
    }

    #[test]
    fn duplicates_ignore_row_ids() {
        let records = vec![record(1, 10, 5.0), record(2, 10, 5.0), record(3, 7, 5.0)];
        let issues = check_duplicates(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Duplicate);
        assert_eq!(issues[0].row, records[1].id);
        assert!(issues[0].detail.contains(&records[0].id.to_hex()));
    }

    #[test]
    fn triplicates_flag_each_later_occurrence() {
        let records = vec![record(1, 10, 5.0), record(2, 10, 5.0), record(3, 10, 5.0)];
        assert_eq!(check_duplicates(&records).len(), 2);
    }

    #[test]
    fn negatives_cover_counts_and_currency() {
        let records = vec![record(1, -3, -1.5)];
        let issues = check_negatives(&records);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.kind == IssueKind::NegativeValue));
    }
}
