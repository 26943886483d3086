//! Testing utilities and mock implementations.
//!
//! Provides a mock transport so the whole pipeline can be exercised against
//! fixture HTML without real infrastructure.

mod mock_fetcher;

pub use mock_fetcher::MockFetcher;
