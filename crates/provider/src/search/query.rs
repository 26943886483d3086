//! Search URL construction.

use deunicode::deunicode;

use crate::endpoints::SearchEndpoints;

/// Results per page on the site; its `page` parameter is a result index,
/// not a page number.
pub const PAGE_SIZE: u32 = 50;

/// "Film/Vidéo" category id.
const MOVIE_CATEGORY: u32 = 2145;

/// Fold a title into the plain-ascii form the site's search engine matches
/// against: transliterate diacritics, lowercase, keep alphanumerics only,
/// collapse runs of everything else into single spaces.
pub fn simplify_title(title: &str) -> String {
    let folded = deunicode(title).to_lowercase();
    let mut simplified = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !simplified.is_empty() {
                simplified.push(' ');
            }
            pending_space = false;
            simplified.push(c);
        } else {
            pending_space = true;
        }
    }
    simplified
}

/// Build the fully encoded search URL for a title and page offset.
pub fn build_search_url(endpoints: &SearchEndpoints, title: &str, offset: u32) -> String {
    let mut params: Vec<(&str, String)> = vec![
        ("category", MOVIE_CATEGORY.to_string()),
        ("description", String::new()),
        ("do", "search".to_string()),
        ("file", String::new()),
        ("name", simplify_title(title)),
        ("sub_category", "all".to_string()),
        ("uploader", String::new()),
    ];
    if offset > 0 {
        params.push(("page", (offset * PAGE_SIZE).to_string()));
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    endpoints.search_url(&query)
}
