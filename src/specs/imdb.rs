// src/specs/imdb.rs
//
// Field extraction for one IMDB title page: director, budget, worldwide
// gross, runtime, title. The page is a label/value list; each extractor
// anchors on the label text and reads the nearest following content block.

use std::error::Error;
use std::thread;
use std::time::Duration;

use crate::config::consts::REQUEST_PAUSE_MS;
use crate::core::html::{find_ci, inner_text, next_tag_block_ci, slice_between_ci};
use crate::core::net;
use crate::core::sanitize::{parse_money, parse_runtime};
use crate::metadata::{LinkRecord, MetadataRecord};
use crate::{logd, loge};

/// Build one metadata record from a fetched page.
///
/// Director and budget are mandatory: a page without them yields `None` and
/// the movie is dropped before it reaches any ranking. Gross defaults to 0
/// (unreleased or unreported), runtime to 0 (unknown).
pub fn extract(doc: &str, imdb_id: &str) -> Option<MetadataRecord> {
    let title = extract_title(doc)?;
    let director = extract_director(doc)?;
    let budget = extract_labeled_money(doc, ">Budget<")?;
    let gross = extract_labeled_money(doc, ">Gross worldwide<").unwrap_or(0);
    let runtime_min = extract_labeled_runtime(doc).unwrap_or(0);

    Some(MetadataRecord {
        external_id: s!(imdb_id),
        title,
        director,
        budget,
        gross,
        runtime_min,
    })
}

/// Page title, with IMDB's " - IMDb" suffix removed.
fn extract_title(doc: &str) -> Option<String> {
    let raw = slice_between_ci(doc, "<title>", "</title>")?;
    let text = inner_text(raw);
    let clean = text.strip_suffix(" - IMDb").unwrap_or(&text).trim();
    if clean.is_empty() { None } else { Some(s!(clean)) }
}

/// First link following the "Director" label.
fn extract_director(doc: &str) -> Option<String> {
    let label = find_ci(doc, ">Director<", 0).or_else(|| find_ci(doc, ">Directors<", 0))?;
    let (a_s, a_e) = next_tag_block_ci(doc, "<a", "</a>", label)?;
    let name = inner_text(&doc[a_s..a_e]);
    if name.is_empty() { None } else { Some(name) }
}

/// Money amount in the first content item following `label`.
fn extract_labeled_money(doc: &str, label: &str) -> Option<i64> {
    let at = find_ci(doc, label, 0)?;
    let (s, e) = next_tag_block_ci(doc, "<span", "</span>", at)?;
    parse_money(&inner_text(&doc[s..e]))
}

/// Runtime from the "Runtime" labeled item, e.g. "2h 50m".
fn extract_labeled_runtime(doc: &str) -> Option<i64> {
    let at = find_ci(doc, ">Runtime<", 0)?;
    let (s, e) = next_tag_block_ci(doc, "<span", "</span>", at)?;
    parse_runtime(&inner_text(&doc[s..e]))
}

/// Fetch one title page and extract its record.
pub fn fetch_and_extract(imdb_id: &str) -> Result<Option<MetadataRecord>, Box<dyn Error>> {
    let path = format!("tt{imdb_id}/");
    let doc = net::http_get(&path)?;
    Ok(extract(&doc, imdb_id))
}

/// Sequential fetch over a link list. Failures are logged and skipped —
/// partial results are worth more than none when scraping — and a short
/// pause separates requests.
pub fn collect(links: &[LinkRecord]) -> Vec<MetadataRecord> {
    let mut out = Vec::new();
    for link in links {
        match fetch_and_extract(&link.imdb_id) {
            Ok(Some(rec)) => out.push(rec),
            Ok(None) => logd!("tt{}: incomplete metadata, dropped", link.imdb_id),
            Err(e) => loge!("tt{}: {}", link.imdb_id, e),
        }
        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
    }
    out
}
