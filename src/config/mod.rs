// src/config/mod.rs
// =============================================================================
// Configuration for search requests.
//
// Submodules:
// - model: the snapshot types (Settings, ProbeConfig, StatusPolicy)
// - provider: where snapshots come from (settings file, defaults, overrides)
// =============================================================================

mod model;
mod provider;

pub use model::{ProbeConfig, Settings, StatusPolicy};
pub use provider::{
    resolve_provider, ConfigError, ConfigOverrides, ConfigProvider, StaticConfigProvider,
};
