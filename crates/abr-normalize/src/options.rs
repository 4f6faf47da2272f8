use abr_model::{FieldKey, keys};

/// Options for one normalization run.
///
/// Everything the normalizer needs arrives as an argument; there is no
/// ambient configuration.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Currency symbol stripped from Currency-kind cells.
    pub currency_symbol: String,
    /// Primary-key field; rows whose cell for this field is empty are dropped.
    pub identifier_key: FieldKey,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            identifier_key: FieldKey::new(keys::SKU),
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    #[must_use]
    pub fn with_identifier_key(mut self, key: &str) -> Self {
        self.identifier_key = FieldKey::new(key);
        self
    }
}
