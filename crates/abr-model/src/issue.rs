#![deny(unsafe_code)]

use crate::RowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingValue,
    Duplicate,
    OutOfRange,
    NegativeValue,
}

impl IssueKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingValue => "missing value",
            Self::Duplicate => "duplicate row",
            Self::OutOfRange => "out of range",
            Self::NegativeValue => "negative value",
        }
    }
}

/// A data-quality finding produced during normalization.
///
/// Findings never block processing; the flagged row stays in the output and
/// the caller decides filtering policy.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct QualityIssue {
    pub kind: IssueKind,
    /// Canonical field key the finding refers to, or an empty string for
    /// whole-row findings (duplicates).
    pub field: String,
    pub row: RowId,
    pub detail: String,
}

/// Accumulated quality findings for one normalization run.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct QualityReport {
    pub issues: Vec<QualityIssue>,
    /// Rows dropped for lacking an identifier; counted, not itemized.
    pub dropped_rows: usize,
    /// Cells whose text failed to parse and degraded to a default value.
    pub defective_cells: u64,
}

impl QualityReport {
    pub fn push(&mut self, issue: QualityIssue) {
        self.issues.push(issue);
    }

    pub fn count_of(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty() || self.dropped_rows > 0
    }
}
