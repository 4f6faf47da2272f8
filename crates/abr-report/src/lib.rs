//! Consumer surfaces over the normalizer's output.
//!
//! Everything here is a pure render over already-normalized records plus a
//! thin file-writing shell; no parsing or mutation happens in this crate.

mod csv_out;
mod markdown;
mod numeric;
mod quality;
mod summary;

pub use csv_out::{cleaned_columns, render_value, write_cleaned_csv, write_cleaned_csv_file};
pub use markdown::{render_markdown, write_markdown};
pub use numeric::{format_money, format_numeric};
pub use quality::{render_quality_json, write_quality_json};
pub use summary::{PrimeSplit, SummaryStats, TopProduct};
