use std::collections::BTreeMap;

use abr_model::{FieldKey, FieldValue, NormalizedRecord, RowId, keys};

use crate::percentile::quantile;

/// High-performer flags for one record, relative to the current input.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct PerformanceFlags {
    pub high_conversion: bool,
    pub high_revenue: bool,
}

/// Flag records strictly above the 75th percentile of conversion rate and
/// of total sales. Thresholds come from the input itself.
pub fn flag_high_performers(records: &[NormalizedRecord]) -> BTreeMap<RowId, PerformanceFlags> {
    let conversions: Vec<f64> = records
        .iter()
        .filter_map(|record| record.number(keys::CONVERSION_RATE))
        .collect();
    let sales: Vec<f64> = records
        .iter()
        .filter_map(|record| record.number(keys::SALES_TOTAL))
        .collect();
    let conversion_threshold = quantile(&conversions, 0.75);
    let revenue_threshold = quantile(&sales, 0.75);

    let mut flags = BTreeMap::new();
    for record in records {
        let high_conversion = match (record.number(keys::CONVERSION_RATE), conversion_threshold)
        {
            (Some(value), Some(threshold)) => value > threshold,
            _ => false,
        };
        let high_revenue = match (record.number(keys::SALES_TOTAL), revenue_threshold) {
            (Some(value), Some(threshold)) => value > threshold,
            _ => false,
        };
        flags.insert(
            record.id,
            PerformanceFlags {
                high_conversion,
                high_revenue,
            },
        );
    }
    flags
}

/// Write high-performer flags back into the records.
pub fn annotate_high_performers(records: &mut [NormalizedRecord]) {
    let flags = flag_high_performers(records);
    for record in records.iter_mut() {
        let entry = flags.get(&record.id).copied().unwrap_or_default();
        record.insert(
            FieldKey::new(keys::HIGH_CONVERSION),
            FieldValue::Flag(entry.high_conversion),
        );
        record.insert(
            FieldKey::new(keys::HIGH_REVENUE),
            FieldValue::Flag(entry.high_revenue),
        );
    }
}
