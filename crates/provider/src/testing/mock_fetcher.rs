//! Mock fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::fetcher::{FetchError, HtmlFetcher};

/// Mock implementation of the [`HtmlFetcher`] trait.
///
/// Serves canned pages by URL and records every request for assertions.
/// URLs with no registered page answer HTTP 404; [`MockFetcher::fail_next`]
/// forces a connection failure on the next request.
#[derive(Default)]
pub struct MockFetcher {
    pages: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<String>>,
    fail_next: Mutex<bool>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the body served for `url`.
    pub fn insert(&self, url: &str, body: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    /// Make the next fetch fail with a connection error.
    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    /// URLs fetched so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HtmlFetcher for MockFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let mut fail_next = self.fail_next.lock().unwrap();
        if *fail_next {
            *fail_next = false;
            return Err(FetchError::ConnectionFailed("mock failure".to_string()));
        }
        drop(fail_next);

        match self.pages.lock().unwrap().get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}
