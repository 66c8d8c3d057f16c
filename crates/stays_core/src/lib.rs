//! Core data types for the stays demo server.
//!
//! This crate provides the record and query types shared by the dataset
//! loader, the query engine, and the MCP surface.

mod query;
mod stay;

pub use query::{AppliedFilters, QueryRequest, QueryResult, SortKey};
pub use stay::StayRecord;
