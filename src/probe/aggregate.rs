// src/probe/aggregate.rs
// =============================================================================
// Drives extracted candidates through the probe engine, one at a time.
//
// The work deadline is cooperative: it is checked before each candidate and
// never interrupts a batch that is already running. A request can therefore
// overrun its deadline by up to one batch (at most one probe timeout).
// Stopping at the deadline is not an error, the caller gets whatever was
// collected so far.
// =============================================================================

use tokio::time::Instant;
use tracing::{debug, info};

use super::attempt::Prober;
use super::engine::ProbeEngine;
use super::record::AggregatedResult;
use crate::config::ProbeConfig;
use crate::domain::canonicalize;
use crate::search::Candidate;

/// Probes each candidate in order and records the result under its root domain.
///
/// A later candidate with the same root domain replaces the earlier record.
pub async fn aggregate<P: Prober>(
    candidates: &[Candidate],
    config: &ProbeConfig,
    deadline: Instant,
    engine: &ProbeEngine<P>,
) -> AggregatedResult {
    let mut result = AggregatedResult::default();

    for (processed, candidate) in candidates.iter().enumerate() {
        // Only notices a deadline that has already passed, never waits on it
        if Instant::now() >= deadline {
            info!(
                processed,
                skipped = candidates.len() - processed,
                "Work deadline reached, returning partial result"
            );
            return result;
        }

        let domain = canonicalize(&candidate.host);
        let record = engine
            .probe(
                &candidate.url,
                config.batch_size,
                config.probe_timeout,
                &config.status_policy,
            )
            .await;

        debug!(
            %domain,
            url = %candidate.url,
            response_count = record.response_count,
            max_latency_ms = record.max_latency.as_millis() as u64,
            "site probed"
        );

        if result.insert(domain, record).is_some() {
            debug!(url = %candidate.url, "replaced earlier record for the same root domain");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatusPolicy;
    use crate::probe::ProbeOutcome;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    // Every probe of a URL takes `delay` and succeeds unless the URL is listed as down
    struct FakeProber {
        delay: Duration,
        down: Vec<&'static str>,
        calls: AtomicUsize,
        urls: Mutex<Vec<String>>,
    }

    impl FakeProber {
        fn new(delay_ms: u64, down: &[&'static str]) -> Self {
            FakeProber {
                delay: Duration::from_millis(delay_ms),
                down: down.to_vec(),
                calls: AtomicUsize::new(0),
                urls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Prober for FakeProber {
        async fn attempt(&self, url: &str, _timeout: Duration, _policy: &StatusPolicy) -> ProbeOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_string());
            tokio::time::sleep(self.delay).await;

            if self.down.iter().any(|down| *down == url) {
                ProbeOutcome::failure(self.delay)
            } else {
                ProbeOutcome::success(self.delay)
            }
        }
    }

    fn candidate(host: &str, url: &str) -> Candidate {
        Candidate {
            host: host.to_string(),
            url: url.to_string(),
        }
    }

    fn config(batch_size: u64) -> ProbeConfig {
        ProbeConfig {
            batch_size,
            probe_timeout: Duration::from_secs(1),
            work_deadline: Duration::from_secs(10),
            status_policy: StatusPolicy::default(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_distinct_domains_all_recorded() {
        let engine = ProbeEngine::new(FakeProber::new(10, &["https://down.org/"]));
        let candidates = [
            candidate("www.example.com", "https://www.example.com/a"),
            candidate("down.org", "https://down.org/"),
        ];
        let deadline = Instant::now() + Duration::from_secs(10);

        let result = aggregate(&candidates, &config(3), deadline, &engine).await;

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("example.com").unwrap().response_count, 3);
        assert_eq!(result.get("down.org").unwrap().response_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_candidates_processed_in_order() {
        let engine = ProbeEngine::new(FakeProber::new(10, &[]));
        let candidates = [
            candidate("a.com", "https://a.com/"),
            candidate("b.com", "https://b.com/"),
            candidate("c.com", "https://c.com/"),
        ];
        let deadline = Instant::now() + Duration::from_secs(10);

        aggregate(&candidates, &config(2), deadline, &engine).await;

        let urls = engine_urls(&engine);
        assert_eq!(
            urls,
            vec![
                "https://a.com/",
                "https://a.com/",
                "https://b.com/",
                "https://b.com/",
                "https://c.com/",
                "https://c.com/",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_candidate_overwrites_same_root_domain() {
        let engine = ProbeEngine::new(FakeProber::new(10, &["https://shop.example.com/"]));
        let candidates = [
            candidate("www.example.com", "https://www.example.com/"),
            candidate("shop.example.com", "https://shop.example.com/"),
        ];
        let deadline = Instant::now() + Duration::from_secs(10);

        let result = aggregate(&candidates, &config(4), deadline, &engine).await;

        // Only the second (failing) site's outcome survives
        assert_eq!(result.len(), 1);
        let record = result.get("example.com").unwrap();
        assert_eq!(record.response_count, 1);
        assert_eq!(record.max_latency, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_expired_deadline_skips_all_probes() {
        let engine = ProbeEngine::new(FakeProber::new(0, &[]));
        let candidates = [candidate("example.com", "https://example.com/")];

        // A deadline of "now" has already passed by the time it is checked
        let result = aggregate(&candidates, &config(3), Instant::now(), &engine).await;

        assert!(result.is_empty());
        assert_eq!(engine_calls(&engine), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_checked_only_between_candidates() {
        // Each batch takes 60ms, the deadline is 100ms away:
        // a.com starts at 0ms, b.com at 60ms (runs past the deadline), c.com is skipped
        let engine = ProbeEngine::new(FakeProber::new(60, &[]));
        let candidates = [
            candidate("a.com", "https://a.com/"),
            candidate("b.com", "https://b.com/"),
            candidate("c.com", "https://c.com/"),
        ];
        let started = Instant::now();
        let deadline = started + Duration::from_millis(100);

        let result = aggregate(&candidates, &config(2), deadline, &engine).await;

        assert_eq!(result.len(), 2);
        assert!(result.get("a.com").is_some());
        assert!(result.get("b.com").is_some());
        assert!(result.get("c.com").is_none());
        // b.com's batch was not cut short at the deadline
        assert!(started.elapsed() >= Duration::from_millis(120));
    }

    #[tokio::test]
    async fn test_no_candidates() {
        let engine = ProbeEngine::new(FakeProber::new(0, &[]));
        let deadline = Instant::now() + Duration::from_secs(1);

        let result = aggregate(&[], &config(3), deadline, &engine).await;

        assert!(result.is_empty());
    }

    fn engine_calls(engine: &ProbeEngine<FakeProber>) -> usize {
        engine.prober().calls.load(Ordering::SeqCst)
    }

    fn engine_urls(engine: &ProbeEngine<FakeProber>) -> Vec<String> {
        engine.prober().urls.lock().unwrap().clone()
    }
}
