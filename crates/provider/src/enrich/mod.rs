//! Detail-page enrichment.
//!
//! Completes a [`TorrentResult`] with its free-text description and an
//! age-in-days value read from the detail page. Unlike the search path,
//! errors here propagate: the host decides whether to drop the single result
//! or abort the batch.

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::dom::Document;
use crate::fetcher::{FetchError, HtmlFetcher};
use crate::search::{ResultEnricher, TorrentResult};

/// Class of the header element preceding the description block.
const DESCRIPTION_HEADER_CLASS: &str = "description-header";

/// Text label preceding the upload timestamp cell.
const UPLOAD_DATE_LABEL: &str = "Uploadé le";

/// Timestamp format on detail pages, e.g. "02/06/2024 11:30".
const UPLOAD_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Errors that can occur while enriching a result.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Detail page is missing the '{0}' marker")]
    MissingMarker(&'static str),

    #[error("Invalid upload timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// Enricher reading description and age from a result's detail page.
pub struct DetailEnricher {
    fetcher: Arc<dyn HtmlFetcher>,
}

impl DetailEnricher {
    pub fn new(fetcher: Arc<dyn HtmlFetcher>) -> Self {
        Self { fetcher }
    }

    fn apply(&self, result: &mut TorrentResult, body: &str) -> Result<(), EnrichError> {
        let doc = Document::parse(body);

        let header = doc
            .find_by_class(DESCRIPTION_HEADER_CLASS)
            .ok_or(EnrichError::MissingMarker(DESCRIPTION_HEADER_CLASS))?;
        if let Some(description) = doc.element_after(&header, "div") {
            result.description = Some(description.html());
        }

        let cell = doc
            .element_after_text(UPLOAD_DATE_LABEL, "td")
            .ok_or(EnrichError::MissingMarker(UPLOAD_DATE_LABEL))?;
        let text = cell.text();
        // Truncate the relative-time parenthetical, e.g. "(il y a 3 jours)".
        let value = text.split('(').next().unwrap_or_default().trim();
        let published = NaiveDateTime::parse_from_str(value, UPLOAD_DATE_FORMAT).map_err(
            |source| EnrichError::InvalidTimestamp {
                value: value.to_string(),
                source,
            },
        )?;

        let age_days = (Local::now().naive_local() - published).num_days();
        debug!(id = result.id, age_days, "Enriched torrent");
        result.age_days = Some(age_days);
        Ok(())
    }
}

#[async_trait]
impl ResultEnricher for DetailEnricher {
    async fn enrich(&self, result: &mut TorrentResult) -> Result<(), EnrichError> {
        let body = self.fetcher.fetch_html(&result.detail_url).await?;
        self.apply(result, &body)
    }
}
