//! History-based routing.
//!
//! Two routes exist: `/` (directory browser) and `/table?path=...` (table
//! viewer). Any other pathname falls back to the browser.

use crate::config::routes;
use crate::utils::dom;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Directory browser: `/`
    Browser,
    /// Table viewer: `/table?path=<file>`
    Table {
        /// File path from the `path` query parameter, if present
        path: Option<String>,
    },
}

impl AppRoute {
    /// Table route for the given file path.
    pub fn table(path: impl Into<String>) -> Self {
        Self::Table {
            path: Some(path.into()),
        }
    }

    /// Parse a route from `location.pathname` and `location.search`.
    pub fn from_location(pathname: &str, search: &str) -> Self {
        let trimmed = pathname.trim_end_matches('/');
        if trimmed == routes::TABLE {
            return Self::Table {
                path: query_param(search, routes::PATH_PARAM),
            };
        }
        Self::Browser
    }

    /// Convert the route to a root-relative URL.
    pub fn to_url(&self) -> String {
        match self {
            Self::Browser => routes::BROWSER.to_string(),
            Self::Table { path: None } => routes::TABLE.to_string(),
            Self::Table { path: Some(path) } => format!(
                "{}?{}={}",
                routes::TABLE,
                routes::PATH_PARAM,
                encode_query_value(path)
            ),
        }
    }

    /// Get current route from the browser URL.
    pub fn current() -> Self {
        let (pathname, search) = dom::location_parts();
        Self::from_location(&pathname, &search)
    }

    /// Update the browser URL to match this route (using pushState).
    pub fn push(&self) {
        dom::push_url(&self.to_url());
    }
}

/// First value of `key` in a query string, percent-decoded.
///
/// Accepts the string with or without its leading `?`.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| decode_component(name) == key)
        .map(|(_, value)| decode_component(value))
}

/// Percent-encode a query value, leaving `/` readable.
pub fn encode_query_value(value: &str) -> String {
    urlencoding::encode(value).replace("%2F", "/")
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
