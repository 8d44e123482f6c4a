// src/search/extract.rs
// =============================================================================
// This module extracts candidate sites from a search result page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never rejects markup; broken HTML is
//   repaired the way a browser would
//
// Rules, per result element (`div.serp-item`) in document order:
// 1. Skip advertisement/label blocks and anything without a `data-cid`
//    (the organic result id)
// 2. Take the first primary result link (`a.Link`)
// 3. Turbo-page wrapper links carry the real target in `data-counter`, a
//    JSON array of strings; the second entry is the destination
// 4. Drop links without a host and links to the ad-click redirector
//
// Elements that don't fit are skipped silently. Duplicates are kept: two
// results on the same site are folded later, by the aggregator.
// =============================================================================

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use url::Url;

use super::error::SearchError;

/// One extracted (host, url) pair, before canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub host: String,
    pub url: String,
}

// Selectors are constants, so parsing them can only fail on a typo here
static RESULT_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.serp-item").expect("valid result item selector"));
static PRIMARY_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.Link").expect("valid primary link selector"));

const AD_CLASSES: &[&str] = &["Label", "organic__advLabel"];
const AD_MARKER_ATTR: &str = "data-fast-name";
const ORGANIC_ID_ATTR: &str = "data-cid";
const COUNTER_ATTR: &str = "data-counter";

const TURBO_PREFIX: &str = "https://yandex.ru/turbo/";
const TURBO_PAGES_DOMAIN: &str = "turbopages.org";
const AD_REDIRECT_HOST: &str = "yabs.yandex.ru";

/// Extracts candidates from a raw result page, in document order.
///
/// Fails only if the bytes aren't text at all; a page with no usable
/// results gives an empty list.
pub fn extract_candidates(page: &[u8]) -> Result<Vec<Candidate>, SearchError> {
    let html = std::str::from_utf8(page)
        .map_err(|e| SearchError::Parse(format!("page is not valid UTF-8: {}", e)))?;

    let document = Html::parse_document(html);

    let candidates = document
        .select(&RESULT_ITEM)
        .filter(|item| is_organic(item))
        .filter_map(|item| candidate_from(&item))
        .collect();

    Ok(candidates)
}

// Ads and labels carry a marker class or attribute; organic results carry an id
fn is_organic(item: &ElementRef) -> bool {
    let element = item.value();

    let is_ad = element.classes().any(|class| AD_CLASSES.contains(&class))
        || element.attr(AD_MARKER_ATTR).is_some();

    !is_ad && element.attr(ORGANIC_ID_ATTR).is_some()
}

fn candidate_from(item: &ElementRef) -> Option<Candidate> {
    let link = item.select(&PRIMARY_LINK).next()?;
    let mut href = link.value().attr("href")?.to_string();

    if is_wrapper_link(&href) {
        if let Some(counter) = link.value().attr(COUNTER_ATTR).filter(|c| !c.is_empty()) {
            href = unwrap_counter(counter)?;
        }
    }

    let url = Url::parse(&href).ok()?;
    let host = url.host_str().filter(|host| !host.is_empty())?;

    if host == AD_REDIRECT_HOST {
        return None;
    }

    Some(Candidate {
        host: host.to_string(),
        url: href,
    })
}

fn is_wrapper_link(href: &str) -> bool {
    href.starts_with(TURBO_PREFIX) || href.contains(TURBO_PAGES_DOMAIN)
}

// data-counter='["b","https://real.site/page", ...]'
fn unwrap_counter(counter: &str) -> Option<String> {
    let entries: Vec<String> = serde_json::from_str(counter).ok()?;
    entries.into_iter().nth(1)
}
