//! Search pipeline: query construction, result extraction and pagination.

mod query;
mod size;
mod types;

pub use query::{build_search_url, simplify_title, PAGE_SIZE};
pub use size::parse_size;
pub use types::*;

/// Best-effort integer conversion: malformed input becomes 0 instead of
/// discarding the surrounding result.
pub(crate) fn try_u32(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}
