//! Endpoint derivation.
//!
//! All search-related endpoints are derived together from a single validated
//! base URL; the login endpoint is derived independently because the site has
//! historically served authentication from a separate host. Only https bases
//! are accepted since credentials travel with every authenticated request.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::{debug, warn};

static BASE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https://[^/\s]+)/?").expect("hardcoded regex"));

/// The four endpoints the crawler needs once a base URL is known.
///
/// Either all of them exist (derived from the same base) or none do, which is
/// why they live in one struct behind a single `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEndpoints {
    /// Account page used to probe session validity.
    pub login_check: String,
    /// Search endpoint, query string appended by [`SearchEndpoints::search_url`].
    pub search: String,
    /// Prefix of every torrent detail link on the site.
    pub torrent: String,
    /// Download endpoint, id appended by [`SearchEndpoints::download_url`].
    pub download: String,
}

impl SearchEndpoints {
    /// Full search URL for an already-encoded query string.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}?{}", self.search, query)
    }

    /// Full download URL for a torrent id.
    pub fn download_url(&self, id: u32) -> String {
        format!("{}?id={}", self.download, id)
    }
}

/// The provider's complete endpoint state, replaced wholesale on
/// configuration change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub search: Option<SearchEndpoints>,
    pub login: Option<String>,
}

/// Derive the search-related endpoints from the configured base URL.
///
/// Returns `None` on any non-matching input (http, garbage, empty string);
/// callers treat that as "provider disabled", never as a hard failure.
pub fn derive_search_endpoints(url: &str) -> Option<SearchEndpoints> {
    match base_of(url) {
        Some(base) => {
            debug!(base = %base, "Refreshing provider urls");
            Some(SearchEndpoints {
                login_check: format!("{}/user/account", base),
                search: format!("{}/engine/search", base),
                torrent: format!("{}/torrent", base),
                download: format!("{}/engine/download_torrent", base),
            })
        }
        None => {
            warn!(url = %url, "Not a valid https base url, search endpoints unset");
            None
        }
    }
}

/// Derive the login endpoint from the configured login base URL.
pub fn derive_login_endpoint(login_url: &str) -> Option<String> {
    match base_of(login_url) {
        Some(base) => {
            debug!(base = %base, "Refreshing login url");
            Some(format!("{}/user/login", base))
        }
        None => {
            warn!(url = %login_url, "Not a valid https base url, login endpoint unset");
            None
        }
    }
}

fn base_of(url: &str) -> Option<&str> {
    BASE_URL_RE
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_search_endpoints_shapes() {
        let endpoints = derive_search_endpoints("https://www.yggtorrent.org").unwrap();
        assert_eq!(
            endpoints.login_check,
            "https://www.yggtorrent.org/user/account"
        );
        assert_eq!(endpoints.torrent, "https://www.yggtorrent.org/torrent");
        assert_eq!(
            endpoints.search_url("do=search&name=dune"),
            "https://www.yggtorrent.org/engine/search?do=search&name=dune"
        );
        assert_eq!(
            endpoints.download_url(123),
            "https://www.yggtorrent.org/engine/download_torrent?id=123"
        );
    }

    #[test]
    fn test_derive_search_endpoints_ignores_path() {
        let endpoints = derive_search_endpoints("https://www.yggtorrent.org/some/path").unwrap();
        assert_eq!(endpoints.search, "https://www.yggtorrent.org/engine/search");
    }

    #[test]
    fn test_derive_search_endpoints_rejects_http() {
        assert!(derive_search_endpoints("http://www.yggtorrent.org").is_none());
    }

    #[test]
    fn test_derive_search_endpoints_rejects_garbage() {
        assert!(derive_search_endpoints("not a url").is_none());
        assert!(derive_search_endpoints("").is_none());
        assert!(derive_search_endpoints("ftp://x").is_none());
    }

    #[test]
    fn test_derive_login_endpoint() {
        assert_eq!(
            derive_login_endpoint("https://auth.yggtorrent.org/").as_deref(),
            Some("https://auth.yggtorrent.org/user/login")
        );
        assert!(derive_login_endpoint("http://auth.yggtorrent.org").is_none());
    }

    #[test]
    fn test_endpoints_default_is_unset() {
        let endpoints = Endpoints::default();
        assert!(endpoints.search.is_none());
        assert!(endpoints.login.is_none());
    }
}
