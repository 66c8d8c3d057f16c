//! Query engine for stay records.
//!
//! A pure, synchronous filter/sort/select over an in-memory record list.
//! Identical inputs against an unchanged dataset always produce identical
//! results.

use std::cmp::Ordering;
use stays_core::{AppliedFilters, QueryRequest, QueryResult, SortKey, StayRecord};
use tracing::debug;

/// Runs a stays query over the full dataset.
///
/// Filters by city (case-insensitive exact match after trimming), then by
/// optional minimum rating, stable-sorts by the requested key, and locates
/// the selected record within the filtered sequence. A `selected_id` that
/// matches nothing yields an absent selection, not an error.
pub fn query(stays: Vec<StayRecord>, request: &QueryRequest) -> QueryResult {
    let city = request.city.trim().to_lowercase();

    let mut results: Vec<StayRecord> = stays
        .into_iter()
        .filter(|s| s.city.to_lowercase() == city)
        .collect();

    if let Some(min_rating) = request.min_rating {
        results.retain(|s| s.rating >= min_rating);
    }

    // Vec::sort_by is stable, so equal keys keep their input order.
    match request.sort {
        SortKey::Rating => results.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
        SortKey::Price => results.sort_by(|a, b| {
            a.price_per_night
                .partial_cmp(&b.price_per_night)
                .unwrap_or(Ordering::Equal)
        }),
    }

    // First match wins if the source data ever carries duplicate ids.
    let selected = request
        .selected_id
        .as_ref()
        .and_then(|id| results.iter().find(|s| &s.id == id))
        .cloned();

    debug!(
        city = %city,
        count = results.len(),
        selected = selected.is_some(),
        "Query evaluated"
    );

    QueryResult {
        city,
        results,
        selected,
        applied_filters: AppliedFilters {
            min_rating: request.min_rating,
            sort: request.sort,
        },
    }
}
