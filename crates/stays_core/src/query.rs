//! Query request and result types.

use crate::StayRecord;
use serde::{Deserialize, Serialize};

/// Sort key for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending by rating.
    #[default]
    Rating,
    /// Ascending by nightly price.
    Price,
}

impl SortKey {
    /// Wire name of the sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Price => "price",
        }
    }
}

/// Parameters for a single stays query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// City to search, matched case-insensitively after trimming.
    pub city: String,
    /// Keep only stays rated at or above this value.
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Sort key, defaulting to rating.
    #[serde(default)]
    pub sort: SortKey,
    /// Id of the stay to highlight among the results.
    #[serde(default)]
    pub selected_id: Option<String>,
}

/// Echo of the filters a query applied, for caller transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub min_rating: Option<f64>,
    pub sort: SortKey,
}

/// Result of a stays query. Constructed and returned within a single call;
/// nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Normalized (trimmed, lowercased) city the query matched against.
    pub city: String,
    /// Matching records in sorted order.
    pub results: Vec<StayRecord>,
    /// The highlighted record, if `selected_id` matched one of `results`.
    pub selected: Option<StayRecord>,
    /// The filters that were applied.
    pub applied_filters: AppliedFilters,
}
