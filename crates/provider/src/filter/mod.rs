//! Bundle rejection.
//!
//! A description referencing several distinct IMDB titles is almost always a
//! multi-movie bundle, which downstream handling cannot split; such results
//! are rejected instead of being scored.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::info;

use crate::search::{ResultFilter, TorrentResult};

static IMDB_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"tt\d{4,8}").expect("hardcoded regex"));

/// Distinct IMDB ids found in `text`, in first-seen order.
pub fn imdb_ids(text: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for m in IMDB_ID_RE.find_iter(text) {
        let id = m.as_str();
        if !ids.iter().any(|known| known == id) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Filter rejecting results whose description spans multiple distinct titles.
pub struct BundleFilter;

impl ResultFilter for BundleFilter {
    fn is_acceptable(&self, result: &TorrentResult) -> bool {
        let ids = imdb_ids(result.description.as_deref().unwrap_or(""));
        if ids.len() > 1 {
            info!(
                id = result.id,
                imdb_ids = %ids.join(", "),
                "Too many IMDB ids, rejecting bundle"
            );
            return false;
        }
        true
    }
}
