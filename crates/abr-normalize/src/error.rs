use thiserror::Error;

/// Structural failures that stop normalization of the whole input.
///
/// Cell-level defects never surface here; they degrade to defaults and are
/// tallied in the quality report instead.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("required column {label:?} (field {field}) not found in report header")]
    MissingColumn { label: String, field: String },
    #[error("no field spec targets the identifier key {0:?}")]
    MissingIdentifierSpec(String),
}
