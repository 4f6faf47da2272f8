#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::{FieldKey, FieldValue, RowId};

/// One input row exactly as read from the source table: raw header → raw text.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RawRecord {
    pub id: RowId,
    /// 1-based position in the source file, for human-readable references.
    pub record_number: u64,
    pub cells: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn cell(&self, header: &str) -> &str {
        self.cells.get(header).map_or("", String::as_str)
    }
}

/// A fully materialized report: headers plus raw records.
///
/// Headers are kept even when there are no data rows so required-column
/// checks can run against empty reports.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ReportTable {
    /// Stable source identifier (e.g. the input path) used for row ids.
    pub source_id: String,
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl ReportTable {
    pub fn new(source_id: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            source_id: source_id.into(),
            headers,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: RawRecord) {
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The canonical output row: canonical key → typed value.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NormalizedRecord {
    pub id: RowId,
    pub values: BTreeMap<FieldKey, FieldValue>,
}

impl NormalizedRecord {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            values: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: FieldKey, value: FieldValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Numeric view of a field (`Number` or `Count`), None when absent or missing.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_number)
    }

    pub fn count(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(FieldValue::as_count)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_flag)
    }
}
