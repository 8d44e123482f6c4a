// src/search/mod.rs
// =============================================================================
// Search requests: from a query to per-site reachability.
//
// Submodules:
// - fetch: downloads the result page (PageFetcher, HttpPageFetcher)
// - extract: pulls candidate sites out of the page
// - pipeline: runs a whole request (handle_query / search_sites)
// - error: request-level failures
// =============================================================================

mod error;
mod extract;
mod fetch;
mod pipeline;

pub use error::SearchError;
pub use extract::{extract_candidates, Candidate};
pub use fetch::{HttpPageFetcher, PageFetcher};
pub use pipeline::{handle_query, SearchReport};
