#![deny(unsafe_code)]

/// A typed cell value in a normalized record.
///
/// Currency, percentage, and derived ratio fields are `Number`; integer
/// counts are `Count`; `Missing` is an explicit marker distinct from zero
/// (percentages use missing-is-not-zero semantics).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FieldValue {
    Number(f64),
    Count(i64),
    Text(String),
    Flag(bool),
    Missing,
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric view: `Number` as-is, `Count` widened to f64, otherwise None.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            Self::Count(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<i64> {
        match self {
            Self::Count(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_view_widens_counts() {
        assert_eq!(FieldValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(FieldValue::Count(40).as_number(), Some(40.0));
        assert_eq!(FieldValue::Missing.as_number(), None);
        assert_eq!(FieldValue::Text("x".to_string()).as_number(), None);
    }

    #[test]
    fn serde_form_is_tagged() {
        let json = serde_json::to_string(&FieldValue::Number(12.5)).expect("serialize value");
        assert_eq!(json, r#"{"kind":"Number","value":12.5}"#);
        let round: FieldValue = serde_json::from_str(&json).expect("deserialize value");
        assert_eq!(round, FieldValue::Number(12.5));
    }
}
