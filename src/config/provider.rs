// src/config/provider.rs
// =============================================================================
// Where a request gets its configuration snapshot from.
//
// The search pipeline only ever sees a `Settings` value. Providers decide
// how that value is produced:
// - FileConfigProvider re-reads the YAML file on every snapshot, so edits
//   to the file apply to the next request without a restart
// - StaticConfigProvider hands out a fixed value (built-in defaults, tests)
//
// Command-line overrides are layered on top by both providers.
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::model::{Settings, SettingsFile, StatusPolicy};

/// Settings file looked up in the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Produces one immutable configuration snapshot per request.
pub trait ConfigProvider: Send + Sync {
    fn snapshot(&self) -> Result<Settings, ConfigError>;
}

/// Values given on the command line; each one replaces what the provider read.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub batch_size: Option<u64>,
    pub probe_timeout_ms: Option<u64>,
    pub work_deadline_ms: Option<u64>,
    pub status_policy: Option<StatusPolicy>,
    pub search_endpoint: Option<String>,
}

impl ConfigOverrides {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(batch_size) = self.batch_size {
            settings.probe.batch_size = batch_size;
        }
        if let Some(ms) = self.probe_timeout_ms {
            settings.probe.probe_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = self.work_deadline_ms {
            settings.probe.work_deadline = Duration::from_millis(ms);
        }
        if let Some(policy) = &self.status_policy {
            settings.probe.status_policy = policy.clone();
        }
        if let Some(endpoint) = &self.search_endpoint {
            settings.search_endpoint = endpoint.clone();
        }
        settings
    }
}

// All three scalars must be positive
fn validate(settings: Settings) -> Result<Settings, ConfigError> {
    if settings.probe.batch_size == 0 {
        return Err(ConfigError::Invalid {
            field: "CountRequest",
            reason: "must be at least 1".to_string(),
        });
    }
    if settings.probe.probe_timeout.is_zero() {
        return Err(ConfigError::Invalid {
            field: "TimeOutRequest",
            reason: "must be a positive number of milliseconds".to_string(),
        });
    }
    if settings.probe.work_deadline.is_zero() {
        return Err(ConfigError::Invalid {
            field: "TimeOutWork",
            reason: "must be a positive number of milliseconds".to_string(),
        });
    }
    if let StatusPolicy::Accept(codes) = &settings.probe.status_policy {
        if codes.is_empty() {
            return Err(ConfigError::Invalid {
                field: "StatusPolicy",
                reason: "accepted status list is empty".to_string(),
            });
        }
    }
    if settings.search_endpoint.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: "SearchEndpoint",
            reason: "must not be empty".to_string(),
        });
    }
    Ok(settings)
}

/// Reads the settings file fresh on every snapshot.
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
    overrides: ConfigOverrides,
}

impl FileConfigProvider {
    pub fn new(path: impl Into<PathBuf>, overrides: ConfigOverrides) -> Self {
        FileConfigProvider {
            path: path.into(),
            overrides,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigProvider for FileConfigProvider {
    fn snapshot(&self) -> Result<Settings, ConfigError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let file: SettingsFile = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let settings = validate(self.overrides.apply(Settings::from(file)))?;
        debug!(path = %self.path.display(), ?settings, "configuration snapshot taken");
        Ok(settings)
    }
}

/// Hands out the same settings for every request.
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    settings: Settings,
}

impl StaticConfigProvider {
    pub fn new(settings: Settings, overrides: &ConfigOverrides) -> Self {
        StaticConfigProvider {
            settings: overrides.apply(settings),
        }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn snapshot(&self) -> Result<Settings, ConfigError> {
        validate(self.settings.clone())
    }
}

/// Picks the provider for this run.
///
/// An explicit path always means the file; without one, `config.yml` in the
/// working directory is used when present and built-in defaults otherwise.
pub fn resolve_provider(path: Option<PathBuf>, overrides: ConfigOverrides) -> Box<dyn ConfigProvider> {
    let path = match path {
        Some(path) => Some(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
        None => None,
    };

    match path {
        Some(path) => {
            let provider = FileConfigProvider::new(path, overrides);
            info!(path = %provider.path().display(), "Reading settings from file");
            Box::new(provider)
        }
        None => {
            warn!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
            Box::new(StaticConfigProvider::new(Settings::default(), &overrides))
        }
    }
}
