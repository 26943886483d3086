//! Types for the search pipeline.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::enrich::EnrichError;

/// A torrent extracted from a search-results page.
///
/// `description` and `age_days` stay unset until a [`ResultEnricher`] fills
/// them in; everything else is immutable once the result is appended to the
/// sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorrentResult {
    /// Numeric id parsed from the detail URL's trailing segment.
    pub id: u32,
    /// Release name as displayed on the site.
    pub name: String,
    pub seeders: u32,
    pub leechers: u32,
    pub size_bytes: u64,
    /// Download endpoint URL for this torrent.
    pub url: String,
    /// Detail page URL.
    pub detail_url: String,
    /// The site only lists verified releases.
    pub verified: bool,
    /// Filled by enrichment from the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Days since the release was uploaded, filled by enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_days: Option<i64>,
}

/// Capability to complete a result with detail-page data.
///
/// Invoked by the host during result validation, decoupled from extraction
/// timing. Errors propagate: the host decides whether to drop the single
/// result or abort the batch.
#[async_trait]
pub trait ResultEnricher: Send + Sync {
    async fn enrich(&self, result: &mut TorrentResult) -> Result<(), EnrichError>;
}

/// Capability to accept or reject an enriched result.
///
/// Rejection is a normal outcome, not an error.
pub trait ResultFilter: Send + Sync {
    fn is_acceptable(&self, result: &TorrentResult) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serialization_skips_unset_enrichment() {
        let result = TorrentResult {
            id: 123,
            name: "Some Movie 1080p".to_string(),
            seeders: 4,
            leechers: 2,
            size_bytes: 1_073_741_824,
            url: "https://www.yggtorrent.org/engine/download_torrent?id=123".to_string(),
            detail_url: "https://www.yggtorrent.org/torrent/filmvidéo/film/123-some-movie"
                .to_string(),
            verified: true,
            description: None,
            age_days: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("age_days"));

        let parsed: TorrentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, 123);
        assert!(parsed.verified);
        assert!(parsed.description.is_none());
    }
}
