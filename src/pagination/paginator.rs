//! HATEOAS paginator
//!
//! Reads the next page location from the response `Link` header.

use super::cursor::Cursor;
use super::link::parse_link_header;
use crate::http::HttpResponse;
use reqwest::header::LINK;
use url::Url;

/// Decides from a completed response whether another page exists
pub trait Paginator: Send + Sync {
    /// URL of the next page, or `None` when pagination is finished
    ///
    /// Must be a pure function of the response so repeated calls agree.
    fn next_url(&self, response: &HttpResponse) -> Option<Url>;

    /// Cursor for the next request, or `None` when pagination is finished
    fn next_cursor(&self, response: &HttpResponse) -> Option<Cursor> {
        self.next_url(response).map(Cursor::new)
    }
}

/// Link header pagination (RFC 8288)
///
/// Follows the last link-value whose relation types include `rel`
/// (default `next`). Relative targets are resolved against the request
/// URL. A missing, empty or unparsable target ends pagination.
#[derive(Debug, Clone)]
pub struct LinkHeaderPaginator {
    /// Rel value to follow
    pub rel: String,
}

impl Default for LinkHeaderPaginator {
    fn default() -> Self {
        Self {
            rel: "next".to_string(),
        }
    }
}

impl LinkHeaderPaginator {
    /// Create a new link header paginator
    pub fn new(rel: impl Into<String>) -> Self {
        Self { rel: rel.into() }
    }
}

impl Paginator for LinkHeaderPaginator {
    fn next_url(&self, response: &HttpResponse) -> Option<Url> {
        let target = response
            .headers
            .get_all(LINK)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(parse_link_header)
            .filter(|link| link.has_rel(&self.rel))
            .last()?
            .target;

        if target.is_empty() {
            return None;
        }

        response.url.join(&target).ok()
    }
}
