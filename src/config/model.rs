// src/config/model.rs
// =============================================================================
// The values a search request reads from configuration.
//
// The settings file uses the key names of the deployed service:
//
//   CountRequest: 5          # probes per site
//   TimeOutRequest: 2000     # per-probe timeout, ms
//   TimeOutWork: 10000       # work deadline for the whole request, ms
//   StatusPolicy: reject_rate_limited
//   SearchEndpoint: "https://..."
//
// A `Settings` value is a snapshot: it is taken once per request and never
// changes while that request runs.
// =============================================================================

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Mobile result-page endpoint; the query is appended escaped
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://yandex.ru/search/touch/?service=www.yandex&ui=webmobileapp.yandex&numdoc=50&lr=213&p=0&text=";

const DEFAULT_BATCH_SIZE: u64 = 5;
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 2_000;
const DEFAULT_WORK_DEADLINE_MS: u64 = 10_000;

/// Which HTTP statuses count as a successful probe.
///
/// Deployments disagree here, so it is an explicit setting rather than a
/// hard-coded rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Any status except 429 Too Many Requests
    #[default]
    RejectRateLimited,
    /// Exactly 200 OK
    RequireOk,
    /// Only the listed statuses
    Accept(Vec<u16>),
}

impl StatusPolicy {
    pub fn accepts(&self, status: u16) -> bool {
        match self {
            StatusPolicy::RejectRateLimited => status != 429,
            StatusPolicy::RequireOk => status == 200,
            StatusPolicy::Accept(codes) => codes.contains(&status),
        }
    }
}

// Accepts "reject-rate-limited", "require-ok" or a comma list like "200,301"
impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "reject-rate-limited" | "any" => Ok(StatusPolicy::RejectRateLimited),
            "require-ok" | "ok" => Ok(StatusPolicy::RequireOk),
            list => {
                let codes = list
                    .split(',')
                    .map(|code| code.trim().parse::<u16>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| format!("unknown status policy '{}'", s))?;
                Ok(StatusPolicy::Accept(codes))
            }
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::RejectRateLimited => write!(f, "reject-rate-limited"),
            StatusPolicy::RequireOk => write!(f, "require-ok"),
            StatusPolicy::Accept(codes) => {
                let codes: Vec<String> = codes.iter().map(u16::to_string).collect();
                write!(f, "{}", codes.join(","))
            }
        }
    }
}

/// Probe parameters for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Concurrent probes launched per site
    pub batch_size: u64,
    /// Hard limit for a single probe (connect, TLS handshake, whole request)
    pub probe_timeout: Duration,
    /// Soft budget for the whole request, checked between sites
    pub work_deadline: Duration,
    pub status_policy: StatusPolicy,
}

/// Full configuration snapshot for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub probe: ProbeConfig,
    pub search_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            probe: ProbeConfig {
                batch_size: DEFAULT_BATCH_SIZE,
                probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
                work_deadline: Duration::from_millis(DEFAULT_WORK_DEADLINE_MS),
                status_policy: StatusPolicy::default(),
            },
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
        }
    }
}

// On-disk shape of the settings file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SettingsFile {
    count_request: u64,
    time_out_request: u64,
    time_out_work: u64,
    #[serde(default)]
    status_policy: StatusPolicy,
    #[serde(default = "default_endpoint")]
    search_endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        Settings {
            probe: ProbeConfig {
                batch_size: file.count_request,
                probe_timeout: Duration::from_millis(file.time_out_request),
                work_deadline: Duration::from_millis(file.time_out_work),
                status_policy: file.status_policy,
            },
            search_endpoint: file.search_endpoint,
        }
    }
}
