// src/domain/canonical.rs
// =============================================================================
// Maps a hostname to its registrable root domain.
//
// Algorithm:
// 1. Lower-case the host
// 2. Fewer than 3 labels: already minimal, return as-is
// 3. Last two labels form a known public suffix: keep the last three labels
// 4. Otherwise keep the last two labels
//
// The output never has more than three labels, so a second pass always hits
// step 2 or folds to the same labels again. That makes it idempotent.
// =============================================================================

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::suffixes::PUBLIC_SUFFIXES;

// Built once on first use, then shared read-only by every request
static SUFFIX_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PUBLIC_SUFFIXES.iter().copied().collect());

/// Folds `host` to its canonical root domain.
///
/// Pure and total: any string is accepted, nothing is looked up on the network.
///
/// ```text
/// www.Example.COM  -> example.com
/// test.spb.ru      -> test.spb.ru   (spb.ru is a public suffix)
/// a.b              -> a.b
/// ```
pub fn canonicalize(host: &str) -> String {
    let host = host.to_lowercase();

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 3 {
        return host;
    }

    let last_two = labels[labels.len() - 2..].join(".");
    if SUFFIX_SET.contains(last_two.as_str()) {
        return labels[labels.len() - 3..].join(".");
    }

    last_two
}
