// src/probe/record.rs
// =============================================================================
// Per-domain results and their JSON shape.
//
// The payload keeps the field names consumers of the service already parse:
//
//   { "example.com": { "ResponseCount": 5, "TimeResponse": 183000000 } }
//
// TimeResponse is the slowest successful probe, in integer nanoseconds.
// =============================================================================

use std::collections::HashMap;
use std::time::Duration;

use serde::{Serialize, Serializer};

/// Aggregated probe signal for one root domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DomainRecord {
    /// Full batch size when no probe failed, otherwise the arrival position
    /// of the first failure (see `engine::ArrivalReducer`)
    #[serde(rename = "ResponseCount")]
    pub response_count: u64,

    /// Slowest latency among successful probes, zero when none succeeded
    #[serde(rename = "TimeResponse", serialize_with = "serialize_nanos")]
    pub max_latency: Duration,
}

fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    let nanos = i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX);
    serializer.serialize_i64(nanos)
}

/// Root domain -> record, for one request.
///
/// Inserting a domain that is already present replaces the old record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregatedResult {
    domains: HashMap<String, DomainRecord>,
}

impl AggregatedResult {
    pub fn insert(&mut self, domain: String, record: DomainRecord) -> Option<DomainRecord> {
        self.domains.insert(domain, record)
    }

    pub fn get(&self, domain: &str) -> Option<&DomainRecord> {
        self.domains.get(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &DomainRecord> {
        self.domains.values()
    }

    /// Entries sorted by domain, for stable display
    pub fn sorted(&self) -> Vec<(&str, &DomainRecord)> {
        let mut entries: Vec<_> = self
            .domains
            .iter()
            .map(|(domain, record)| (domain.as_str(), record))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
