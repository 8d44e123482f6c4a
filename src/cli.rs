// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - search: run one request per query and report per-site reachability
// - probe: run a single probe batch against one URL
// - extract: show what the extractor finds in a saved result page
//
// Probe settings come from the YAML settings file; the flags below override
// individual values for this run.
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ConfigOverrides, StatusPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "serp-probe",
    version,
    about = "Checks which websites from a search query are reachable, and how fast",
    long_about = "serp-probe fetches a search result page, folds every result to its root domain \
                  and fires a batch of concurrent requests at each site. It reports, per domain, \
                  how the batch went and how long the slowest successful request took."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and probe every site on the result page
    ///
    /// Example: serp-probe search "rust web framework" --json
    Search {
        /// One or more queries; each one is a separate request
        #[arg(required = true)]
        queries: Vec<String>,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Probe a single URL with one batch
    ///
    /// Example: serp-probe probe https://example.com --batch-size 10
    Probe {
        /// URL to probe
        url: String,

        /// Output the record in JSON format instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the candidates found in a saved result page
    ///
    /// Example: serp-probe extract page.html
    Extract {
        /// HTML file saved from the search engine
        file: PathBuf,

        /// Output candidates in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Settings file location and per-run overrides
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// YAML settings file (re-read for every query)
    #[arg(long, env = "SERP_PROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Concurrent probes per site (CountRequest)
    #[arg(long)]
    pub batch_size: Option<u64>,

    /// Per-probe timeout in milliseconds (TimeOutRequest)
    #[arg(long)]
    pub probe_timeout_ms: Option<u64>,

    /// Work deadline per query in milliseconds (TimeOutWork)
    #[arg(long)]
    pub work_deadline_ms: Option<u64>,

    /// Which statuses count as reachable: reject-rate-limited, require-ok, or a list like 200,301
    #[arg(long)]
    pub status_policy: Option<StatusPolicy>,

    /// Result-page base URL; the escaped query is appended to it
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            batch_size: self.batch_size,
            probe_timeout_ms: self.probe_timeout_ms,
            work_deadline_ms: self.work_deadline_ms,
            status_policy: self.status_policy.clone(),
            search_endpoint: self.endpoint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_with_overrides() {
        let cli = Cli::try_parse_from([
            "serp-probe",
            "search",
            "rust",
            "tokio runtime",
            "--json",
            "--batch-size",
            "3",
            "--status-policy",
            "require-ok",
        ])
        .unwrap();

        match cli.command {
            Commands::Search { queries, json, config } => {
                assert_eq!(queries, vec!["rust", "tokio runtime"]);
                assert!(json);
                let overrides = config.overrides();
                assert_eq!(overrides.batch_size, Some(3));
                assert_eq!(overrides.status_policy, Some(StatusPolicy::RequireOk));
                assert_eq!(overrides.probe_timeout_ms, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_search_requires_a_query() {
        assert!(Cli::try_parse_from(["serp-probe", "search"]).is_err());
    }

    #[test]
    fn test_status_list_flag() {
        let cli = Cli::try_parse_from([
            "serp-probe",
            "probe",
            "https://example.com",
            "--status-policy",
            "200,204",
        ])
        .unwrap();

        match cli.command {
            Commands::Probe { config, .. } => {
                assert_eq!(config.status_policy, Some(StatusPolicy::Accept(vec![200, 204])));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
