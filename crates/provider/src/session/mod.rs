//! Session validity checks.
//!
//! Pure functions over already-fetched bodies; the host's transport performs
//! the actual login and account-page requests.

use crate::config::ProviderConfig;
use crate::dom::Document;

/// Text marker of the logout menu entry, only present when logged in.
/// The leading space is part of the page text.
pub const LOGOUT_MARKER: &str = " Déconnexion";

/// Form parameters for the site's login request.
pub fn login_params(config: &ProviderConfig) -> Vec<(&'static str, String)> {
    vec![
        ("id", config.username.clone()),
        ("pass", config.password.clone()),
    ]
}

/// The site answers a successful login with an empty page; any non-empty
/// body is an error fragment.
pub fn is_login_successful(body: &str) -> bool {
    body.is_empty()
}

/// True iff the page was rendered for an authenticated session.
pub fn is_session_valid(body: &str) -> bool {
    Document::parse(body).text_contains(LOGOUT_MARKER)
}
