use abr_model::{NormalizedRecord, keys};

/// One row in a top-N ranking.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TopProduct {
    pub sku: String,
    pub title: String,
    /// The ranked metric (sales or conversion rate, depending on the list).
    pub value: f64,
    pub units: i64,
}

/// Prime vs non-Prime comparison.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct PrimeSplit {
    pub prime_count: usize,
    pub non_prime_count: usize,
    pub prime_sales: f64,
    pub non_prime_sales: f64,
    pub prime_avg_conversion: f64,
    pub non_prime_avg_conversion: f64,
}

/// Headline statistics over a normalized record set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SummaryStats {
    pub record_count: usize,
    pub total_sessions: i64,
    pub total_units: i64,
    pub total_sales: f64,
    /// Mean of per-record conversion rates, not units/sessions overall.
    pub avg_conversion_rate: f64,
    pub avg_order_value: f64,
    pub top_by_sales: Vec<TopProduct>,
    pub top_by_conversion: Vec<TopProduct>,
    pub prime_split: Option<PrimeSplit>,
}

impl SummaryStats {
    pub fn compute(records: &[NormalizedRecord], top_n: usize) -> Self {
        let total_sessions = records
            .iter()
            .filter_map(|r| r.count(keys::SESSIONS_TOTAL))
            .sum();
        let total_units = records
            .iter()
            .filter_map(|r| r.count(keys::UNITS_ORDERED))
            .sum();
        let total_sales = records
            .iter()
            .filter_map(|r| r.number(keys::SALES_TOTAL))
            .sum();

        Self {
            record_count: records.len(),
            total_sessions,
            total_units,
            total_sales,
            avg_conversion_rate: mean(records, keys::CONVERSION_RATE),
            avg_order_value: mean(records, keys::AVG_ORDER_VALUE),
            top_by_sales: top_by(records, keys::SALES_TOTAL, top_n),
            top_by_conversion: top_by(records, keys::CONVERSION_RATE, top_n),
            prime_split: prime_split(records),
        }
    }
}

fn mean(records: &[NormalizedRecord], key: &str) -> f64 {
    let values: Vec<f64> = records.iter().filter_map(|r| r.number(key)).collect();
    if values.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let n = values.len() as f64;
        values.iter().sum::<f64>() / n
    }
}

fn top_by(records: &[NormalizedRecord], key: &str, top_n: usize) -> Vec<TopProduct> {
    let mut ranked: Vec<(&NormalizedRecord, f64)> = records
        .iter()
        .filter_map(|record| record.number(key).map(|value| (record, value)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(top_n)
        .map(|(record, value)| TopProduct {
            sku: record.text(keys::SKU).unwrap_or_default().to_string(),
            title: record.text(keys::TITLE).unwrap_or_default().to_string(),
            value,
            units: record.count(keys::UNITS_ORDERED).unwrap_or(0),
        })
        .collect()
}

fn prime_split(records: &[NormalizedRecord]) -> Option<PrimeSplit> {
    if !records.iter().any(|r| r.flag(keys::IS_PRIME).is_some()) {
        return None;
    }
    let mut split = PrimeSplit::default();
    let mut prime_conversions = Vec::new();
    let mut non_prime_conversions = Vec::new();
    for record in records {
        let is_prime = record.flag(keys::IS_PRIME).unwrap_or(false);
        let sales = record.number(keys::SALES_TOTAL).unwrap_or(0.0);
        let conversion = record.number(keys::CONVERSION_RATE);
        if is_prime {
            split.prime_count += 1;
            split.prime_sales += sales;
            prime_conversions.extend(conversion);
        } else {
            split.non_prime_count += 1;
            split.non_prime_sales += sales;
            non_prime_conversions.extend(conversion);
        }
    }
    split.prime_avg_conversion = mean_of(&prime_conversions);
    split.non_prime_avg_conversion = mean_of(&non_prime_conversions);
    Some(split)
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let n = values.len() as f64;
        values.iter().sum::<f64>() / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abr_model::{FieldKey, FieldValue, RowId};

    fn record(n: u64, sku: &str, sessions: i64, units: i64, sales: f64) -> NormalizedRecord {
        let mut record = NormalizedRecord::new(RowId::derive("t", n));
        record.insert(FieldKey::new(keys::SKU), FieldValue::Text(sku.to_string()));
        record.insert(FieldKey::new(keys::SESSIONS_TOTAL), FieldValue::Count(sessions));
        record.insert(FieldKey::new(keys::UNITS_ORDERED), FieldValue::Count(units));
        record.insert(FieldKey::new(keys::SALES_TOTAL), FieldValue::Number(sales));
        let conversion = if sessions > 0 {
            #[allow(clippy::cast_precision_loss)]
            let rate = units as f64 / sessions as f64 * 100.0;
            rate
        } else {
            0.0
        };
        record.insert(
            FieldKey::new(keys::CONVERSION_RATE),
            FieldValue::Number(conversion),
        );
        record.insert(
            FieldKey::new(keys::IS_PRIME),
            FieldValue::Flag(sku.contains("Prime")),
        );
        record
    }

    #[test]
    fn totals_and_means_cover_all_records() {
        let records = vec![
            record(1, "A", 100, 10, 200.0),
            record(2, "B Prime", 300, 30, 400.0),
        ];
        let stats = SummaryStats::compute(&records, 5);
        assert_eq!(stats.record_count, 2);
        assert_eq!(stats.total_sessions, 400);
        assert_eq!(stats.total_units, 40);
        assert_eq!(stats.total_sales, 600.0);
        assert_eq!(stats.avg_conversion_rate, 10.0);
    }

    #[test]
    fn top_lists_rank_descending_and_truncate() {
        let records = vec![
            record(1, "A", 100, 1, 50.0),
            record(2, "B", 100, 2, 300.0),
            record(3, "C", 100, 3, 100.0),
        ];
        let stats = SummaryStats::compute(&records, 2);
        let skus: Vec<&str> = stats.top_by_sales.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["B", "C"]);
        assert_eq!(stats.top_by_conversion[0].sku, "C");
    }

    #[test]
    fn prime_split_groups_by_flag() {
        let records = vec![
            record(1, "A", 100, 10, 200.0),
            record(2, "B Prime", 100, 20, 400.0),
        ];
        let split = SummaryStats::compute(&records, 5).prime_split.expect("split");
        assert_eq!(split.prime_count, 1);
        assert_eq!(split.non_prime_count, 1);
        assert_eq!(split.prime_sales, 400.0);
        assert_eq!(split.non_prime_avg_conversion, 10.0);
    }

    #[test]
    fn empty_input_is_all_zeroes() {
        let stats = SummaryStats::compute(&[], 5);
        assert_eq!(stats.record_count, 0);
        assert_eq!(stats.total_sales, 0.0);
        assert_eq!(stats.avg_conversion_rate, 0.0);
        assert!(stats.top_by_sales.is_empty());
        assert!(stats.prime_split.is_none());
    }
}
