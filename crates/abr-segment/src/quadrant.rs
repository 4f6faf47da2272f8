use std::collections::BTreeMap;

use tracing::debug;

use abr_model::{FieldKey, FieldValue, NormalizedRecord, RowId, keys};

use crate::percentile::quantile;

/// Traffic/conversion performance quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// High traffic, high conversion.
    Stars,
    /// High traffic, low conversion.
    ProblemChildren,
    /// Low traffic, high conversion.
    HiddenGems,
    /// Low traffic, low conversion.
    Dogs,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [
        Self::Stars,
        Self::ProblemChildren,
        Self::HiddenGems,
        Self::Dogs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Stars => "Stars (high traffic, high conversion)",
            Self::ProblemChildren => "Problem Children (high traffic, low conversion)",
            Self::HiddenGems => "Hidden Gems (low traffic, high conversion)",
            Self::Dogs => "Dogs (low traffic, low conversion)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Percentile (0-100) separating "high" from "low" on both axes.
    pub threshold_percentile: f64,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            threshold_percentile: 70.0,
        }
    }
}

/// Thresholds computed from the current input distribution.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SegmentThresholds {
    pub traffic: f64,
    pub conversion: f64,
    pub percentile: f64,
}

/// A quadrant assignment for every record that carried both metrics.
#[derive(Debug, Clone)]
pub struct Segmentation {
    pub thresholds: SegmentThresholds,
    pub assignments: BTreeMap<RowId, Quadrant>,
}

impl Segmentation {
    pub fn quadrant(&self, row: RowId) -> Option<Quadrant> {
        self.assignments.get(&row).copied()
    }

    pub fn count_of(&self, quadrant: Quadrant) -> usize {
        self.assignments
            .values()
            .filter(|assigned| **assigned == quadrant)
            .count()
    }
}

/// Segment records into quadrants by sessions and conversion rate.
///
/// Thresholds are the configured percentile of each metric across the input;
/// a record is "high" on an axis when it is at or above the threshold.
/// Returns None when no record carries both metrics.
pub fn segment_records(
    records: &[NormalizedRecord],
    options: &SegmentOptions,
) -> Option<Segmentation> {
    let sessions: Vec<f64> = records
        .iter()
        .filter_map(|record| record.number(keys::SESSIONS_TOTAL))
        .collect();
    let conversions: Vec<f64> = records
        .iter()
        .filter_map(|record| record.number(keys::CONVERSION_RATE))
        .collect();

    let q = options.threshold_percentile / 100.0;
    let traffic = quantile(&sessions, q)?;
    let conversion = quantile(&conversions, q)?;
    debug!(traffic, conversion, percentile = options.threshold_percentile, "segment thresholds");

    let mut assignments = BTreeMap::new();
    for record in records {
        let (Some(record_sessions), Some(record_conversion)) = (
            record.number(keys::SESSIONS_TOTAL),
            record.number(keys::CONVERSION_RATE),
        ) else {
            continue;
        };
        let high_traffic = record_sessions >= traffic;
        let high_conversion = record_conversion >= conversion;
        let quadrant = match (high_traffic, high_conversion) {
            (true, true) => Quadrant::Stars,
            (true, false) => Quadrant::ProblemChildren,
            (false, true) => Quadrant::HiddenGems,
            (false, false) => Quadrant::Dogs,
        };
        assignments.insert(record.id, quadrant);
    }

    Some(Segmentation {
        thresholds: SegmentThresholds {
            traffic,
            conversion,
            percentile: options.threshold_percentile,
        },
        assignments,
    })
}

/// Write each record's quadrant label into the record under `quadrant`.
pub fn annotate_quadrants(records: &mut [NormalizedRecord], segmentation: &Segmentation) {
    for record in records.iter_mut() {
        let value = match segmentation.quadrant(record.id) {
            Some(quadrant) => FieldValue::Text(quadrant.label().to_string()),
            None => FieldValue::Missing,
        };
        record.insert(FieldKey::new(keys::QUADRANT), value);
    }
}
