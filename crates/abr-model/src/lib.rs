//! Core data model for Amazon Business Report normalization.
//!
//! Raw report rows ([`RawRecord`]) are untyped header→text mappings exactly
//! as read from a Seller Central CSV export. The normalizer turns them into
//! [`NormalizedRecord`]s keyed by canonical [`FieldKey`]s, driven by a table
//! of [`FieldSpec`]s, and reports data-quality findings as [`QualityIssue`]s.

pub mod field;
pub mod ids;
pub mod issue;
pub mod record;
pub mod value;

pub use field::{FieldKind, FieldSpec, business_report_specs, keys};
pub use ids::{FieldKey, RowId};
pub use issue::{IssueKind, QualityIssue, QualityReport};
pub use record::{NormalizedRecord, RawRecord, ReportTable};
pub use value::FieldValue;
