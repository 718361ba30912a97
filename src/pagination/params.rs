//! Request parameter builder

use super::cursor::Cursor;
use crate::context::Context;
use std::collections::BTreeMap;

/// Records requested per page
pub const PAGE_SIZE: u32 = 100;

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "perPage";

/// Query parameters for the next request
///
/// Starts from `perPage=<page_size>` and overlays the cursor's query pairs,
/// so the server's own paging parameters (and any page size it echoes back)
/// flow through unchanged. The context only shapes the request path and is
/// not consulted here.
pub fn url_params(
    page_size: u32,
    _context: Option<&Context>,
    cursor: Option<&Cursor>,
) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert(PAGE_SIZE_PARAM.to_string(), page_size.to_string());

    if let Some(cursor) = cursor {
        params.extend(cursor.query_pairs());
    }

    params
}
