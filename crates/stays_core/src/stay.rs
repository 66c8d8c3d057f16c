//! Stay record type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single accommodation listing.
///
/// `rating` and `price_per_night` default to zero when absent from the
/// source data. Descriptive fields the engine does not interpret (name,
/// neighborhood, amenities, ...) are captured in `extra` and passed through
/// to output unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayRecord {
    /// Opaque unique identifier. Assumed unique within the dataset.
    pub id: String,
    /// City the stay is in. Compared case-insensitively.
    pub city: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price_per_night: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
