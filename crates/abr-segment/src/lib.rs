//! Percentile-based product segmentation.
//!
//! Thresholds are data-dependent: they are recomputed from the current
//! input's distribution on every run, never hardcoded. Records missing a
//! metric are excluded from threshold computation and left unsegmented.

mod percentile;
mod performance;
mod quadrant;

pub use percentile::quantile;
pub use performance::{PerformanceFlags, annotate_high_performers, flag_high_performers};
pub use quadrant::{
    Quadrant, SegmentOptions, SegmentThresholds, Segmentation, annotate_quadrants,
    segment_records,
};
