//! Lookup queries and answers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeQuery {
    /// Forward lookup of a free-text address.
    Address(String),
    /// Reverse lookup of a coordinate pair in degrees.
    Coordinates { latitude: f64, longitude: f64 },
}

impl GeocodeQuery {
    /// Key under which the answer is cached.
    ///
    /// Addresses are used verbatim, so keys are case and whitespace
    /// sensitive. Coordinate pairs render as `"{lat},{lon}"` with the
    /// shortest round-trip float form, so distinct pairs never collide.
    pub fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeocodeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeQuery::Address(address) => f.write_str(address),
            GeocodeQuery::Coordinates {
                latitude,
                longitude,
            } => write!(f, "{},{}", latitude, longitude),
        }
    }
}

/// Forward geocoding answer.
///
/// Values keep the numeric form positionstack returned, so `10` stays `10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Number,
    pub longitude: Number,
}
