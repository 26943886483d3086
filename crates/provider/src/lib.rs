//! Movie torrent search provider for the YGG indexer.
//!
//! The crate crawls the site's search results, extracts structured torrent
//! metadata from HTML, follows pagination sequentially, and exposes the
//! enrichment and bundle-filter capabilities the host invokes during result
//! validation. Transport, scheduling and configuration persistence belong to
//! the host; this core only consumes fetched bodies and produces results.

pub mod config;
pub mod dom;
pub mod endpoints;
pub mod enrich;
pub mod fetcher;
pub mod filter;
mod provider;
pub mod search;
pub mod session;
pub mod testing;

pub use config::{load_config, load_config_from_str, ConfigError, ProviderConfig, SanitizedProviderConfig};
pub use endpoints::{derive_login_endpoint, derive_search_endpoints, Endpoints, SearchEndpoints};
pub use enrich::{DetailEnricher, EnrichError};
pub use fetcher::{FetchError, HtmlFetcher, HttpFetcher};
pub use filter::BundleFilter;
pub use provider::YggProvider;
pub use search::{ResultEnricher, ResultFilter, TorrentResult};
pub use session::{is_login_successful, is_session_valid, login_params};
