// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, so --json output on stdout stays clean)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Print results and exit with the proper code
//    (0 = success, 2 = a request failed or an unexpected error)
// =============================================================================

mod cli;
mod config;
mod domain;
mod probe;
mod search;

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands, ConfigArgs};
use probe::{DomainRecord, HttpProber, ProbeEngine};
use search::{HttpPageFetcher, SearchReport};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "serp_probe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { queries, json, config } => handle_search(&queries, json, &config).await,
        Commands::Probe { url, json, config } => handle_probe(&url, json, &config).await,
        Commands::Extract { file, json } => handle_extract(&file, json),
    }
}

// Handles the 'search' subcommand
//
// Every query is its own request with its own config snapshot, so editing
// the settings file between queries takes effect without a restart.
async fn handle_search(queries: &[String], json: bool, args: &ConfigArgs) -> Result<i32> {
    let provider = config::resolve_provider(args.config.clone(), args.overrides());
    let fetcher = HttpPageFetcher::new().context("Failed to create HTTP client")?;
    let engine = ProbeEngine::new(HttpProber);

    let mut reports = Vec::new();
    let mut failed = 0;

    for query in queries {
        info!(%query, "🔍 Searching");

        match search::handle_query(query, provider.as_ref(), &fetcher, &engine).await {
            Ok(report) => reports.push(report),
            Err(e) => {
                // A failed request doesn't stop the remaining queries
                error!(%query, error = %e, "Request failed");
                failed += 1;
            }
        }
    }

    if json {
        print_reports_json(&reports)?;
    } else {
        for report in &reports {
            print_report_table(report);
        }
    }

    Ok(if failed > 0 { 2 } else { 0 })
}

// Handles the 'probe' subcommand: one batch against one URL
async fn handle_probe(url: &str, json: bool, args: &ConfigArgs) -> Result<i32> {
    let provider = config::resolve_provider(args.config.clone(), args.overrides());
    let settings = provider.snapshot()?;
    let probe = &settings.probe;

    info!(
        %url,
        batch_size = probe.batch_size,
        timeout_ms = probe.probe_timeout.as_millis() as u64,
        policy = %probe.status_policy,
        "Probing"
    );

    let engine = ProbeEngine::new(HttpProber);
    let record = engine
        .probe(url, probe.batch_size, probe.probe_timeout, &probe.status_policy)
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_table_header();
        print_row(url, &record, probe.batch_size);
    }

    Ok(0)
}

// Handles the 'extract' subcommand: offline view of what a page yields
fn handle_extract(file: &Path, json: bool) -> Result<i32> {
    let page = std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let candidates = search::extract_candidates(&page)?;

    if json {
        let rows: Vec<_> = candidates
            .iter()
            .map(|c| {
                serde_json::json!({
                    "host": c.host,
                    "url": c.url,
                    "domain": domain::canonicalize(&c.host),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{:<30} {:<30} {}", "DOMAIN", "HOST", "URL");
        println!("{}", "=".repeat(100));
        for candidate in &candidates {
            println!(
                "{:<30} {:<30} {}",
                domain::canonicalize(&candidate.host),
                candidate.host,
                candidate.url
            );
        }
        println!();
        println!("📄 {} candidate(s)", candidates.len());
    }

    Ok(0)
}

// One query prints the bare domain map; several are keyed by query
fn print_reports_json(reports: &[SearchReport]) -> Result<()> {
    let output = match reports {
        [single] => serde_json::to_string_pretty(&single.result)?,
        _ => {
            let by_query: BTreeMap<&str, _> = reports
                .iter()
                .map(|report| (report.query.as_str(), &report.result))
                .collect();
            serde_json::to_string_pretty(&by_query)?
        }
    };
    println!("{}", output);
    Ok(())
}

fn print_report_table(report: &SearchReport) {
    let batch_size = report.settings.probe.batch_size;

    println!("\n🔍 {}", report.query);
    print_table_header();

    for (domain, record) in report.result.sorted() {
        print_row(domain, record, batch_size);
    }

    println!();

    let fully_reachable = report
        .result
        .records()
        .filter(|record| record.response_count == batch_size)
        .count();

    println!("📊 Summary:");
    println!("   📄 Results on page: {}", report.candidates);
    println!("   🌐 Sites: {}", report.result.len());
    println!("   ✅ Whole batch answered: {}", fully_reachable);
    println!("   ⏱️  Took: {}", format_duration(report.elapsed));
}

fn print_table_header() {
    println!("{:<40} {:<12} {:<12}", "DOMAIN", "RESPONSES", "SLOWEST");
    println!("{}", "=".repeat(64));
}

fn print_row(name: &str, record: &DomainRecord, batch_size: u64) {
    // Truncate long names so the table stays aligned
    let name = if name.chars().count() > 37 {
        format!("{}...", name.chars().take(37).collect::<String>())
    } else {
        name.to_string()
    };

    let marker = if record.response_count == batch_size { "✅" } else { "❌" };
    let responses = format!("{} {}/{}", marker, record.response_count, batch_size);

    println!("{:<40} {:<12} {:<12}", name, responses, format_duration(record.max_latency));
}

fn format_duration(duration: Duration) -> String {
    if duration.is_zero() {
        "-".to_string()
    } else {
        format!("{} ms", duration.as_millis())
    }
}
