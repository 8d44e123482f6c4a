// src/probe/attempt.rs
// =============================================================================
// One reachability attempt against one URL.
//
// Each attempt builds its own HTTP client, so every probe in a batch opens
// its own connection instead of sharing a pool. The client is configured so
// that no single step (connect, TLS handshake, whole request) can run longer
// than the probe timeout.
//
// An attempt succeeds when:
// 1. the connection is established and a response comes back
// 2. the status passes the configured StatusPolicy
// 3. the body can be read to the end
//
// Latency is measured from sending the request until the body is fully read.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

use crate::config::StatusPolicy;

/// Outcome of a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub succeeded: bool,
    pub latency: Duration,
}

impl ProbeOutcome {
    pub fn success(latency: Duration) -> Self {
        ProbeOutcome {
            succeeded: true,
            latency,
        }
    }

    pub fn failure(latency: Duration) -> Self {
        ProbeOutcome {
            succeeded: false,
            latency,
        }
    }
}

/// Runs one probe. Implementations must never take longer than `timeout`
/// and never return an error: anything that goes wrong is a failed outcome.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn attempt(&self, url: &str, timeout: Duration, policy: &StatusPolicy) -> ProbeOutcome;
}

/// Probes over real HTTP(S) with reqwest
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProber;

impl HttpProber {
    fn client(timeout: Duration) -> reqwest::Result<Client> {
        Client::builder()
            .connect_timeout(timeout) // dial + TLS handshake
            .tcp_keepalive(timeout)
            .timeout(timeout) // hard cap for the whole attempt
            .pool_max_idle_per_host(0) // connection is never reused
            .build()
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn attempt(&self, url: &str, timeout: Duration, policy: &StatusPolicy) -> ProbeOutcome {
        let client = match Self::client(timeout) {
            Ok(client) => client,
            Err(e) => {
                debug!(%url, error = %e, "could not build probe client");
                return ProbeOutcome::failure(Duration::ZERO);
            }
        };

        let start = Instant::now();

        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(%url, reason = failure_reason(&e), error = %e, "probe request failed");
                return ProbeOutcome::failure(start.elapsed());
            }
        };

        let status = response.status().as_u16();
        if !policy.accepts(status) {
            debug!(%url, status, %policy, "probe status not accepted");
            return ProbeOutcome::failure(start.elapsed());
        }

        // The body has to arrive too, a site that stalls mid-body is not reachable
        if let Err(e) = response.bytes().await {
            debug!(%url, error = %e, "probe body read failed");
            return ProbeOutcome::failure(start.elapsed());
        }

        ProbeOutcome::success(start.elapsed())
    }
}

// Coarse category for the logs; all of them count the same as a failure
fn failure_reason(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_redirect() {
        "too many redirects"
    } else if error.is_connect() {
        "connect"
    } else if error.is_builder() {
        "bad url"
    } else {
        "request"
    }
}
