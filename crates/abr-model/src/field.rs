#![deny(unsafe_code)]

use crate::FieldKey;

/// How a source column's text should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Monetary amount with a currency symbol and thousands separators.
    Currency,
    /// Percentage with a trailing `%`; empty cells are missing, not zero.
    Percentage,
    /// Integer count, possibly with thousands separators.
    Count,
    Text,
    Boolean,
}

/// Describes how one named source column maps to a canonical output field.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FieldSpec {
    /// Exact source header label (dash/whitespace variants are tolerated at lookup).
    pub source_label: String,
    pub target_key: FieldKey,
    pub kind: FieldKind,
    /// Required columns must resolve in the source header or normalization
    /// fails as a whole; all other columns degrade to defaults when absent.
    pub required: bool,
}

impl FieldSpec {
    pub fn new(source_label: impl Into<String>, target_key: &str, kind: FieldKind) -> Self {
        Self {
            source_label: source_label.into(),
            target_key: FieldKey::new(target_key),
            kind,
            required: false,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Canonical output field keys.
pub mod keys {
    pub const PARENT_ASIN: &str = "parent_asin";
    pub const CHILD_ASIN: &str = "child_asin";
    pub const TITLE: &str = "title";
    pub const SKU: &str = "sku";
    pub const SESSIONS_TOTAL: &str = "sessions_total";
    pub const PAGE_VIEWS_TOTAL: &str = "page_views_total";
    pub const UNITS_ORDERED: &str = "units_ordered";
    pub const SALES_TOTAL: &str = "sales_total";
    pub const BUY_BOX_PERCENTAGE: &str = "buy_box_percentage";
    pub const UNIT_SESSION_PERCENTAGE: &str = "unit_session_percentage";

    // Derived by the normalizer.
    pub const CONVERSION_RATE: &str = "conversion_rate";
    pub const AVG_ORDER_VALUE: &str = "avg_order_value";
    pub const REVENUE_PER_SESSION: &str = "revenue_per_session";
    pub const IS_PRIME: &str = "is_prime";
    pub const BASE_SKU: &str = "base_sku";
    pub const SKU_CATEGORY: &str = "sku_category";

    // Derived by segmentation.
    pub const HIGH_CONVERSION: &str = "high_conversion";
    pub const HIGH_REVENUE: &str = "high_revenue";
    pub const QUADRANT: &str = "quadrant";
}

/// The consolidated field-spec table for a Seller Central Business Report.
///
/// One entry per source column, replacing the per-script cleaning blocks the
/// exports used to go through. Source labels carry the en dashes the reports
/// actually use; header matching folds dash variants before lookup.
pub fn business_report_specs() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("(Parent) ASIN", keys::PARENT_ASIN, FieldKind::Text),
        FieldSpec::new("(Child) ASIN", keys::CHILD_ASIN, FieldKind::Text),
        FieldSpec::new("Title", keys::TITLE, FieldKind::Text),
        FieldSpec::new("SKU", keys::SKU, FieldKind::Text).required(),
        FieldSpec::new("Sessions – Total", keys::SESSIONS_TOTAL, FieldKind::Count),
        FieldSpec::new("Sessions – Total – B2B", "sessions_b2b", FieldKind::Count),
        FieldSpec::new(
            "Session percentage – Total",
            "session_percentage_total",
            FieldKind::Percentage,
        ),
        FieldSpec::new(
            "Session percentage – Total – B2B",
            "session_percentage_b2b",
            FieldKind::Percentage,
        ),
        FieldSpec::new("Page views – Total", keys::PAGE_VIEWS_TOTAL, FieldKind::Count),
        FieldSpec::new("Page views – Total – B2B", "page_views_b2b", FieldKind::Count),
        FieldSpec::new(
            "Page views percentage – Total",
            "page_views_percentage_total",
            FieldKind::Percentage,
        ),
        FieldSpec::new(
            "Page views percentage – Total – B2B",
            "page_views_percentage_b2b",
            FieldKind::Percentage,
        ),
        FieldSpec::new(
            "Featured Offer (Buy Box) percentage",
            keys::BUY_BOX_PERCENTAGE,
            FieldKind::Percentage,
        ),
        FieldSpec::new(
            "Featured Offer (Buy Box) percentage – B2B",
            "buy_box_percentage_b2b",
            FieldKind::Percentage,
        ),
        FieldSpec::new("Units ordered", keys::UNITS_ORDERED, FieldKind::Count),
        FieldSpec::new("Units ordered – B2B", "units_ordered_b2b", FieldKind::Count),
        FieldSpec::new(
            "Unit Session Percentage",
            keys::UNIT_SESSION_PERCENTAGE,
            FieldKind::Percentage,
        ),
        FieldSpec::new(
            "Unit session percentage – B2B",
            "unit_session_percentage_b2b",
            FieldKind::Percentage,
        ),
        FieldSpec::new("Ordered Product Sales", keys::SALES_TOTAL, FieldKind::Currency)
            .required(),
        FieldSpec::new("Ordered product sales – B2B", "sales_b2b", FieldKind::Currency),
        FieldSpec::new("Total order items", "order_items_total", FieldKind::Count),
        FieldSpec::new("Total order items – B2B", "order_items_b2b", FieldKind::Count),
    ]
}
