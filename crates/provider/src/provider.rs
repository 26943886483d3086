//! YGG provider: endpoint state and the search/extraction/pagination loop.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::dom::Document;
use crate::endpoints::{
    derive_login_endpoint, derive_search_endpoints, Endpoints, SearchEndpoints,
};
use crate::enrich::DetailEnricher;
use crate::fetcher::{FetchError, HtmlFetcher};
use crate::filter::BundleFilter;
use crate::search::{build_search_url, parse_size, try_u32, TorrentResult};

/// Class of the search results container.
const RESULTS_CLASS: &str = "results";

/// Class of the pagination list.
const PAGINATION_CLASS: &str = "pagination";

/// Fixed column offsets within a result row.
const SIZE_COLUMN: usize = 5;
const SEEDERS_COLUMN: usize = 7;
const LEECHERS_COLUMN: usize = 8;

/// Movie, animation and documentary detail links; everything else under the
/// torrent prefix (TV, music, ...) is discarded.
static MOVIE_CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/filmvidéo/(film|animation|documentaire)/").expect("hardcoded regex")
});

/// Trailing "-<id>-<slug>" segment of a detail link.
static DETAIL_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(\d+)-[^/\s]+$").expect("hardcoded regex"));

/// Movie torrent provider for the YGG indexer.
///
/// Holds the derived [`Endpoints`] (replaced wholesale whenever the host
/// signals a configuration change) and drives the sequential search loop.
/// One request is outstanding at a time; page N+1 is never fetched before
/// page N's extraction completes, so result order matches site order.
pub struct YggProvider {
    fetcher: Arc<dyn HtmlFetcher>,
    endpoints: RwLock<Endpoints>,
    /// Cached "session known valid" flag; reset by every endpoint refresh so
    /// the next use revalidates against the new configuration.
    last_login_check: AtomicBool,
}

impl YggProvider {
    pub fn new(fetcher: Arc<dyn HtmlFetcher>, config: &ProviderConfig) -> Self {
        let endpoints = Endpoints {
            search: derive_search_endpoints(&config.url),
            login: derive_login_endpoint(&config.login_url),
        };
        Self {
            fetcher,
            endpoints: RwLock::new(endpoints),
            last_login_check: AtomicBool::new(false),
        }
    }

    /// Provider name for logging.
    pub fn name(&self) -> &'static str {
        "ygg"
    }

    /// Re-derive the search-related endpoints after a `url` settings change.
    pub async fn refresh_urls(&self, config: &ProviderConfig) {
        self.last_login_check.store(false, Ordering::SeqCst);
        let search = derive_search_endpoints(&config.url);
        self.endpoints.write().await.search = search;
    }

    /// Re-derive the login endpoint after a `login_url` settings change.
    pub async fn refresh_login_url(&self, config: &ProviderConfig) {
        self.last_login_check.store(false, Ordering::SeqCst);
        let login = derive_login_endpoint(&config.login_url);
        self.endpoints.write().await.login = login;
    }

    /// Snapshot of the current endpoint state.
    pub async fn endpoints(&self) -> Endpoints {
        self.endpoints.read().await.clone()
    }

    /// Whether the session has been validated since the last refresh.
    pub fn last_login_check(&self) -> bool {
        self.last_login_check.load(Ordering::SeqCst)
    }

    /// Record the outcome of a session validity check.
    pub fn set_last_login_check(&self, valid: bool) {
        self.last_login_check.store(valid, Ordering::SeqCst);
    }

    /// Enricher bound to this provider's transport, for the host to invoke
    /// during result validation.
    pub fn enricher(&self) -> DetailEnricher {
        DetailEnricher::new(Arc::clone(&self.fetcher))
    }

    /// Bundle filter, for the host to invoke during result validation.
    pub fn filter(&self) -> BundleFilter {
        BundleFilter
    }

    /// Search the site for a title and append every extracted torrent to
    /// `results`.
    ///
    /// Pages are consumed sequentially until the site stops advertising a
    /// next page. Infallible by design: a fetch failure mid-crawl is logged
    /// and treated as end-of-results, preserving whatever was already
    /// collected. Unset endpoints mean the provider is disabled and yield
    /// nothing.
    pub async fn search_on_title(&self, title: &str, results: &mut Vec<TorrentResult>) {
        let endpoints = self.endpoints.read().await.search.clone();
        let Some(endpoints) = endpoints else {
            debug!(provider = self.name(), "Search endpoints unset, provider disabled");
            return;
        };

        let mut offset = 0;
        loop {
            match self.search_page(&endpoints, title, offset, results).await {
                Ok(Some(next)) => offset = next,
                Ok(None) => break,
                Err(e) => {
                    warn!(
                        provider = self.name(),
                        offset,
                        collected = results.len(),
                        error = %e,
                        "Failed searching release, stopping pagination"
                    );
                    break;
                }
            }
        }
    }

    /// Fetch and extract one results page. Returns the next offset when the
    /// pagination control advertises a page past the current one.
    async fn search_page(
        &self,
        endpoints: &SearchEndpoints,
        title: &str,
        offset: u32,
        results: &mut Vec<TorrentResult>,
    ) -> Result<Option<u32>, FetchError> {
        let url = build_search_url(endpoints, title, offset);
        debug!(url = %url, offset, "Fetching search page");
        let body = self.fetcher.fetch_html(&url).await?;
        let doc = Document::parse(&body);

        // No results container is a normal zero-hit outcome.
        let Some(container) = doc.find_by_class(RESULTS_CLASS) else {
            return Ok(None);
        };

        for link in container.anchors() {
            let Some(href) = link.attr("href") else {
                continue;
            };
            if !href.starts_with(&endpoints.torrent) || !MOVIE_CATEGORY_RE.is_match(href) {
                continue;
            }

            let id = DETAIL_ID_RE
                .captures(href)
                .and_then(|captures| captures.get(1))
                .map(|m| try_u32(m.as_str()))
                .unwrap_or(0);
            let cells = link.enclosing_row_cells();
            let result = TorrentResult {
                id,
                name: link.text(),
                seeders: cells
                    .get(SEEDERS_COLUMN)
                    .map(|cell| try_u32(&cell.text()))
                    .unwrap_or(0),
                leechers: cells
                    .get(LEECHERS_COLUMN)
                    .map(|cell| try_u32(&cell.text()))
                    .unwrap_or(0),
                size_bytes: cells
                    .get(SIZE_COLUMN)
                    .map(|cell| parse_size(&cell.text()))
                    .unwrap_or(0),
                url: endpoints.download_url(id),
                detail_url: href.to_string(),
                verified: true,
                description: None,
                age_days: None,
            };
            debug!(id = result.id, name = %result.name, "Extracted torrent");
            results.push(result);
        }

        Ok(self.next_offset(&doc, offset))
    }

    /// First pagination link whose numeric label exceeds the current page
    /// decides whether to advance. The site lists pages in ascending order;
    /// only the immediate next page is ever requested, deeper ones are
    /// reached by the following iterations.
    fn next_offset(&self, doc: &Document, offset: u32) -> Option<u32> {
        let pagination = doc.find_tag_with_class("ul", PAGINATION_CLASS)?;
        for page in pagination.find_all("li") {
            let label = page
                .find_first("a")
                .map(|a| try_u32(&a.text()))
                .unwrap_or(0);
            if label > offset + 1 {
                return Some(offset + 1);
            }
        }
        None
    }
}
