//! Pagination module
//!
//! ReadMe.com paginates with HATEOAS links: every page response carries a
//! `Link` header, and the `rel="next"` target is the location of the next
//! page. The pieces here are:
//!
//! - `parse_link_header` - RFC 8288 `Link` header parsing
//! - `Paginator` / `LinkHeaderPaginator` - decide from a response whether
//!   another page exists
//! - `Cursor` - the next-page URL carried to the following request
//! - `url_params` - query parameters for the next request
//!
//! Malformed headers never fail a sync; they end pagination.

mod cursor;
mod link;
mod paginator;
mod params;

pub use cursor::Cursor;
pub use link::{parse_link_header, Link};
pub use paginator::{LinkHeaderPaginator, Paginator};
pub use params::{url_params, PAGE_SIZE, PAGE_SIZE_PARAM};
