// src/probe/mod.rs
// =============================================================================
// Reachability probing.
//
// Submodules:
// - attempt: one probe against one URL (Prober trait, HttpProber)
// - engine: a concurrent batch of probes reduced to one DomainRecord
// - aggregate: the deadline-aware loop over all candidates of a request
// - record: DomainRecord / AggregatedResult and their JSON shape
// =============================================================================

mod aggregate;
mod attempt;
mod engine;
mod record;

pub use aggregate::aggregate;
pub use attempt::{HttpProber, ProbeOutcome, Prober};
pub use engine::ProbeEngine;
pub use record::{AggregatedResult, DomainRecord};
