//! Next-page cursor

use url::Url;

/// Continuation token: the `rel="next"` URL of the previous page
///
/// Only its query string matters to the next request. Pairs with blank
/// values are dropped when the query is decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    url: Url,
}

impl Cursor {
    /// Wrap a next-page URL
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// The full next-page URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Raw query string (empty when the URL has none)
    pub fn token(&self) -> &str {
        self.url.query().unwrap_or("")
    }

    /// Decoded query pairs in order of appearance, skipping blank values
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
