#![deny(unsafe_code)]

use std::borrow::Borrow;
use std::fmt;

use sha2::Digest;

/// A deterministic row identifier.
///
/// Derived from the source identifier and the 1-based record number so the
/// same input file always yields the same ids, letting quality issues
/// reference rows stably across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId([u8; 16]);

impl RowId {
    /// Derive a row id as sha256("<source_id>\0<record_number>"), first 16 bytes.
    pub fn derive(source_id: &str, record_number: u64) -> Self {
        let mut hasher = sha2::Sha256::new();
        hasher.update(source_id.as_bytes());
        hasher.update([0u8]);
        hasher.update(record_number.to_string().as_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl serde::Serialize for RowId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for RowId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != 16 {
            return Err(serde::de::Error::custom("RowId must be 16 bytes"));
        }
        let mut out = [0u8; 16];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A canonical output field key in lower_snake_case.
///
/// The constructor sanitizes rather than rejects: any input is folded to
/// ASCII lowercase alphanumerics with single underscores, so keys built from
/// arbitrary header text are always valid map keys.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(value: impl AsRef<str>) -> Self {
        let raw = value.as_ref();
        let mut key = String::with_capacity(raw.len());
        let mut last_was_underscore = true; // skip leading separators
        for ch in raw.chars() {
            if ch.is_ascii_alphanumeric() {
                key.push(ch.to_ascii_lowercase());
                last_was_underscore = false;
            } else if !last_was_underscore {
                key.push('_');
                last_was_underscore = true;
            }
        }
        if key.ends_with('_') {
            key.pop();
        }
        if key.is_empty() {
            key.push_str("field");
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
