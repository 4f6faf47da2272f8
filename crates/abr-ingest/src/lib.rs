//! Business Report ingestion.
//!
//! Reads a Seller Central CSV export into a [`abr_model::ReportTable`] of raw
//! records and builds the canonical header index the normalizer looks
//! columns up through. File access stops here; the normalizer itself never
//! touches the filesystem.

mod header;
mod reader;

pub use header::{HeaderIndex, canonical_header};
pub use reader::{read_report, read_report_from};
