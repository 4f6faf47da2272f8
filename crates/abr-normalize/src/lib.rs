//! The Report Normalizer.
//!
//! Converts a [`abr_model::ReportTable`] of raw Business Report rows plus a
//! table of [`abr_model::FieldSpec`]s into typed [`abr_model::NormalizedRecord`]s
//! with derived metrics, and collects data-quality findings along the way.
//!
//! Malformed cell text never fails a run: every parse failure degrades to the
//! field kind's default and is tallied. The only fatal condition is
//! structural, a required column absent from the source header.

pub mod clean;
mod error;
mod options;
mod pipeline;
pub mod sku;
mod validate;

pub use clean::{parse_count, parse_currency, parse_percentage};
pub use error::NormalizeError;
pub use options::NormalizeOptions;
pub use pipeline::{NormalizeOutcome, normalize};
