// src/probe/engine.rs
// =============================================================================
// Runs a batch of concurrent probes against one URL and reduces them to a
// single DomainRecord.
//
// How it works:
// 1. Launch `batch_size` independent attempts at once
// 2. Take outcomes in the order they finish (not the order they started)
// 3. Feed each one to the ArrivalReducer
// 4. Only return when every attempt has finished or hit its own timeout
//
// There is no early exit, no retry and no cancellation. The slowest attempt
// decides how long a batch takes, which is bounded by the probe timeout.
// =============================================================================

use std::time::Duration;

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()

use super::attempt::{ProbeOutcome, Prober};
use super::record::DomainRecord;
use crate::config::StatusPolicy;

/// Folds probe outcomes, in arrival order, into a DomainRecord.
///
/// The response count is NOT the number of successful probes:
/// - no failure at all: the full batch size
/// - otherwise: the 1-based arrival position of the first failure
///
/// So one early failure in a batch of 5 yields 1, and a failure that
/// happens to finish last yields 5 even though only 4 probes succeeded.
/// Because arrival order depends on scheduling, the same site can get
/// different counts on different runs. Consumers of the payload depend on
/// this exact behavior, so it is kept as-is.
#[derive(Debug, Clone)]
pub struct ArrivalReducer {
    batch_size: u64,
    arrived: u64,
    first_failure: Option<u64>,
    max_latency: Duration,
}

impl ArrivalReducer {
    pub fn new(batch_size: u64) -> Self {
        ArrivalReducer {
            batch_size,
            arrived: 0,
            first_failure: None,
            max_latency: Duration::ZERO,
        }
    }

    pub fn observe(&mut self, outcome: ProbeOutcome) {
        self.arrived += 1;

        if outcome.succeeded {
            self.max_latency = self.max_latency.max(outcome.latency);
        } else if self.first_failure.is_none() {
            self.first_failure = Some(self.arrived);
        }
    }

    pub fn finish(self) -> DomainRecord {
        DomainRecord {
            response_count: self.first_failure.unwrap_or(self.batch_size),
            max_latency: self.max_latency,
        }
    }
}

/// Probes one URL with a batch of concurrent attempts.
pub struct ProbeEngine<P> {
    prober: P,
}

impl<P: Prober> ProbeEngine<P> {
    pub fn new(prober: P) -> Self {
        ProbeEngine { prober }
    }

    #[cfg(test)]
    pub(crate) fn prober(&self) -> &P {
        &self.prober
    }

    /// Launches exactly `batch_size` attempts against `url` and waits for all
    /// of them. Each attempt is capped at `timeout`, so the whole batch is too.
    pub async fn probe(
        &self,
        url: &str,
        batch_size: u64,
        timeout: Duration,
        policy: &StatusPolicy,
    ) -> DomainRecord {
        let mut reducer = ArrivalReducer::new(batch_size);
        if batch_size == 0 {
            return reducer.finish();
        }

        let attempts = (0..batch_size).map(|_| self.prober.attempt(url, timeout, policy));

        // The buffer is as large as the batch, so every attempt is in flight
        // at once and outcomes come out as they complete
        let mut arrivals = stream::iter(attempts).buffer_unordered(batch_size as usize);

        while let Some(outcome) = arrivals.next().await {
            reducer.observe(outcome);
        }

        reducer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // Hands out scripted (delay, succeeded) pairs. Under a paused clock the
    // arrival order is then fully determined by the delays.
    struct ScriptedProber {
        script: Mutex<VecDeque<(u64, bool)>>,
        calls: AtomicUsize,
    }

    impl ScriptedProber {
        fn new(script: &[(u64, bool)]) -> Self {
            ScriptedProber {
                script: Mutex::new(script.iter().copied().collect()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Prober for ScriptedProber {
        async fn attempt(&self, _url: &str, timeout: Duration, _policy: &StatusPolicy) -> ProbeOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let (delay_ms, succeeded) = self.script.lock().unwrap().pop_front().unwrap_or((0, false));
            let delay = Duration::from_millis(delay_ms).min(timeout);

            tokio::time::sleep(delay).await;

            if succeeded && delay < timeout {
                ProbeOutcome::success(delay)
            } else {
                ProbeOutcome::failure(delay)
            }
        }
    }

    fn ok(ms: u64) -> ProbeOutcome {
        ProbeOutcome::success(Duration::from_millis(ms))
    }

    fn failed() -> ProbeOutcome {
        ProbeOutcome::failure(Duration::ZERO)
    }

    #[test]
    fn test_reducer_all_success_reports_batch_size() {
        let mut reducer = ArrivalReducer::new(3);
        for outcome in [ok(30), ok(10), ok(20)] {
            reducer.observe(outcome);
        }

        let record = reducer.finish();
        assert_eq!(record.response_count, 3);
        assert_eq!(record.max_latency, Duration::from_millis(30));
    }

    #[test]
    fn test_reducer_reports_position_of_first_failure() {
        let mut reducer = ArrivalReducer::new(5);
        for outcome in [ok(10), ok(15), failed(), ok(40), failed()] {
            reducer.observe(outcome);
        }

        let record = reducer.finish();
        assert_eq!(record.response_count, 3);
        // Latency still covers successes that arrived after the failure
        assert_eq!(record.max_latency, Duration::from_millis(40));
    }

    #[test]
    fn test_reducer_late_failure_is_not_a_success_count() {
        // Four successes, yet the count equals the batch position of the failure
        let mut reducer = ArrivalReducer::new(5);
        for outcome in [ok(1), ok(2), ok(3), ok(4), failed()] {
            reducer.observe(outcome);
        }
        assert_eq!(reducer.finish().response_count, 5);
    }

    #[test]
    fn test_reducer_all_failed() {
        let mut reducer = ArrivalReducer::new(4);
        for _ in 0..4 {
            reducer.observe(failed());
        }

        let record = reducer.finish();
        assert_eq!(record.response_count, 1);
        assert_eq!(record.max_latency, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_all_succeed() {
        let engine = ProbeEngine::new(ScriptedProber::new(&[(20, true), (50, true), (10, true)]));

        let record = engine
            .probe("https://example.com", 3, Duration::from_secs(1), &StatusPolicy::default())
            .await;

        assert_eq!(record.response_count, 3);
        assert_eq!(record.max_latency, Duration::from_millis(50));
        assert_eq!(engine.prober.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_all_fail() {
        let engine = ProbeEngine::new(ScriptedProber::new(&[(5, false), (5, false), (5, false)]));

        let record = engine
            .probe("https://example.com", 3, Duration::from_secs(1), &StatusPolicy::default())
            .await;

        assert_eq!(record.response_count, 1);
        assert_eq!(record.max_latency, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_uses_arrival_order_not_launch_order() {
        // Launch order: ok, fail, fail, ok. Arrival order (by delay):
        // fail@5, ok@10, fail@30, ok@40 -> first failure arrives first
        let engine = ProbeEngine::new(ScriptedProber::new(&[
            (10, true),
            (30, false),
            (5, false),
            (40, true),
        ]));

        let record = engine
            .probe("https://example.com", 4, Duration::from_secs(1), &StatusPolicy::default())
            .await;

        assert_eq!(record.response_count, 1);
        assert_eq!(record.max_latency, Duration::from_millis(40));
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_waits_for_every_attempt() {
        let engine = ProbeEngine::new(ScriptedProber::new(&[(1, false), (500, true)]));
        let started = tokio::time::Instant::now();

        let record = engine
            .probe("https://example.com", 2, Duration::from_secs(1), &StatusPolicy::default())
            .await;

        // No early exit on the first failure
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(record.max_latency, Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_batch_bounded_by_probe_timeout() {
        let engine = ProbeEngine::new(ScriptedProber::new(&[(10_000, true); 4]));
        let timeout = Duration::from_millis(100);
        let started = tokio::time::Instant::now();

        let record = engine.probe("https://example.com", 4, timeout, &StatusPolicy::default()).await;

        assert!(started.elapsed() <= timeout * 4);
        assert_eq!(record.response_count, 1);
    }

    #[tokio::test]
    async fn test_engine_zero_batch() {
        let engine = ProbeEngine::new(ScriptedProber::new(&[]));

        let record = engine
            .probe("https://example.com", 0, Duration::from_secs(1), &StatusPolicy::default())
            .await;

        assert_eq!(record, DomainRecord::default());
        assert_eq!(engine.prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_engine_over_http_bounded_wait() {
        use crate::probe::HttpProber;
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let engine = ProbeEngine::new(HttpProber);
        let timeout = Duration::from_millis(300);
        let started = std::time::Instant::now();

        let record = engine.probe(&server.uri(), 4, timeout, &StatusPolicy::default()).await;

        assert_eq!(record.response_count, 1);
        assert!(started.elapsed() < timeout * 4);
    }
}
