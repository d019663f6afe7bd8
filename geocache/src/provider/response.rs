//! Typed schema for positionstack responses.
//!
//! Only the fields the geocoding pipeline reads are modelled; everything
//! else in the payload is ignored. Coordinates stay as JSON numbers so
//! they are echoed exactly as the provider wrote them.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use super::types::ProviderError;

/// Top-level response body: `{"data": [...]}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UpstreamResponse {
    /// Result entries, best match first. Absent on provider-side errors.
    #[serde(default)]
    pub data: Option<Vec<DataEntry>>,
}

/// One element of `data`.
///
/// Only JSON objects become records. The provider emits `[]` instead of a
/// record when a query matched nothing, so arrays, scalars and objects
/// with mistyped fields are kept as `Unrecognized`.
#[derive(Debug, Clone, PartialEq)]
pub enum DataEntry {
    Record(EntryRecord),
    Unrecognized(Value),
}

/// Fields of a result record the pipeline needs.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EntryRecord {
    #[serde(default)]
    pub latitude: Option<Number>,
    #[serde(default)]
    pub longitude: Option<Number>,
    #[serde(default)]
    pub label: Option<String>,
}

impl<'de> Deserialize<'de> for DataEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_object() {
            if let Ok(record) = EntryRecord::deserialize(&value) {
                return Ok(DataEntry::Record(record));
            }
        }
        Ok(DataEntry::Unrecognized(value))
    }
}

impl UpstreamResponse {
    /// Decodes a raw response body.
    pub fn parse(body: &str) -> Result<Self, ProviderError> {
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))
    }

    /// First entry of a non-empty `data` array.
    pub fn first_entry(&self) -> Option<&DataEntry> {
        self.data.as_ref().and_then(|entries| entries.first())
    }
}

impl DataEntry {
    /// The record behind this entry, if it is one.
    pub fn record(&self) -> Option<&EntryRecord> {
        match self {
            DataEntry::Record(record) => Some(record),
            DataEntry::Unrecognized(_) => None,
        }
    }

    /// `(latitude, longitude)` when both are present.
    pub fn coordinates(&self) -> Option<(Number, Number)> {
        let record = self.record()?;
        Some((record.latitude.clone()?, record.longitude.clone()?))
    }

    /// The human-readable address label, if present.
    pub fn label(&self) -> Option<&str> {
        self.record()?.label.as_deref()
    }
}
