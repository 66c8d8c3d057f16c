//! Dataset loader and query engine for the stays demo server.
//!
//! The loader re-reads the static JSON dataset on every call; the engine is
//! a pure filter/sort/select over the loaded records. Neither holds any
//! cross-request state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod loader;

pub use engine::query;
pub use loader::StayLoader;
