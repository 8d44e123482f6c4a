// src/search/pipeline.rs
// =============================================================================
// One search request, end to end:
//
//   snapshot config -> fetch result page -> extract candidates
//     -> probe + aggregate under the work deadline -> report
//
// The deadline starts counting when the request starts, so a slow result
// page eats into the probing budget. Fetch and parse failures end the
// request; an empty or partial aggregate is still a successful request.
// =============================================================================

use std::time::Duration;

use tokio::time::Instant;
use tracing::info;

use super::error::SearchError;
use super::extract::extract_candidates;
use super::fetch::{query_url, PageFetcher};
use crate::config::{ConfigProvider, Settings};
use crate::probe::{aggregate, AggregatedResult, ProbeEngine, Prober};

/// What a finished request produced
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub query: String,
    /// Snapshot the request ran with
    pub settings: Settings,
    /// Candidates extracted from the result page (before folding)
    pub candidates: usize,
    pub result: AggregatedResult,
    pub elapsed: Duration,
}

/// Runs one request with a fresh configuration snapshot.
pub async fn handle_query<F, P>(
    query: &str,
    provider: &dyn ConfigProvider,
    fetcher: &F,
    engine: &ProbeEngine<P>,
) -> Result<SearchReport, SearchError>
where
    F: PageFetcher,
    P: Prober,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    // Taken once; a config edit during this request only affects the next one
    let settings = provider.snapshot()?;
    search_sites(query, settings, fetcher, engine).await
}

/// Runs one request with the given snapshot.
pub async fn search_sites<F, P>(
    query: &str,
    settings: Settings,
    fetcher: &F,
    engine: &ProbeEngine<P>,
) -> Result<SearchReport, SearchError>
where
    F: PageFetcher,
    P: Prober,
{
    let started = Instant::now();
    let deadline = started + settings.probe.work_deadline;

    let url = query_url(&settings.search_endpoint, query);
    let page = fetcher.fetch(&url, settings.probe.work_deadline).await?;
    let candidates = extract_candidates(&page)?;

    info!(
        query,
        candidates = candidates.len(),
        batch_size = settings.probe.batch_size,
        "Probing search results"
    );

    let result = aggregate(&candidates, &settings.probe, deadline, engine).await;
    let elapsed = started.elapsed();

    info!(
        query,
        domains = result.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Request finished"
    );

    Ok(SearchReport {
        query: query.to_string(),
        settings,
        candidates: candidates.len(),
        result,
        elapsed,
    })
}
