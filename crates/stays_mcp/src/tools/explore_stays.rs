//! Stay exploration tool.

use crate::tools::{McpTool, ToolOutput};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::PathBuf;
use stays_catalog::{query, StayLoader};
use stays_core::{QueryRequest, SortKey};
use tracing::{debug, instrument};

/// Tool for browsing mock stays by city.
///
/// Filters the local dataset by city and optional minimum rating, sorts by
/// rating or price, and optionally highlights one record by id. Read-only
/// and idempotent: the dataset is re-read on every call and never mutated.
pub struct ExploreStaysTool {
    loader: StayLoader,
}

impl ExploreStaysTool {
    /// Creates the tool reading from the default dataset path.
    pub fn new() -> Self {
        Self {
            loader: StayLoader::new(),
        }
    }

    /// Creates the tool reading from a custom dataset path.
    pub fn with_data_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            loader: StayLoader::with_path(data_path),
        }
    }
}

impl Default for ExploreStaysTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl McpTool for ExploreStaysTool {
    fn name(&self) -> &str {
        "explore_stays"
    }

    fn description(&self) -> &str {
        "Browse stays from mock data by city, optional rating filter, sort, and optional \
         selected_id. Use this when the user wants to explore accommodations in a city and \
         see an interactive list."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City to browse stays in (matched case-insensitively)"
                },
                "min_rating": {
                    "type": "number",
                    "description": "Keep only stays rated at or above this value"
                },
                "sort": {
                    "type": "string",
                    "enum": ["rating", "price"],
                    "description": "Sort by rating (descending) or price (ascending)",
                    "default": "rating"
                },
                "selected_id": {
                    "type": "string",
                    "description": "Id of the stay to highlight among the results"
                }
            },
            "required": ["city"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<ToolOutput> {
        let city = match input.get("city") {
            None => return Err(McpError::InvalidInput("Missing 'city' field".to_string())),
            Some(v) => v
                .as_str()
                .ok_or_else(|| {
                    McpError::InvalidInput("Field 'city' must be a string".to_string())
                })?
                .to_string(),
        };

        let min_rating = input.get("min_rating").and_then(|v| v.as_f64());

        let sort = match input.get("sort").and_then(|v| v.as_str()) {
            None => SortKey::default(),
            Some("rating") => SortKey::Rating,
            Some("price") => SortKey::Price,
            Some(other) => {
                return Err(McpError::InvalidInput(format!(
                    "Unknown sort key '{}', expected 'rating' or 'price'",
                    other
                )));
            }
        };

        let selected_id = input
            .get("selected_id")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        // The summary keeps the caller's casing; the structured result
        // carries the normalized city.
        let display_city = city.trim().to_string();

        let request = QueryRequest {
            city,
            min_rating,
            sort,
            selected_id,
        };

        let stays = self.loader.load()?;
        debug!(count = stays.len(), sort = sort.as_str(), "Running stays query");

        let result = query(stays, &request);
        let summary = format!("Found {} stays in {}.", result.results.len(), display_city);

        let structured = serde_json::to_value(&result).map_err(|e| {
            McpError::ToolExecutionFailed(format!("Failed to serialize result: {}", e))
        })?;

        Ok(ToolOutput { summary, structured })
    }
}
