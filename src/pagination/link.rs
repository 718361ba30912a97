//! `Link` header parsing (RFC 8288)
//!
//! Format: `<https://dash.readme.com/api/v1/categories?page=2>; rel="next", <...>; rel="last"`

use std::collections::BTreeMap;

/// One link-value from a `Link` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target URI reference, as written between `<` and `>`
    pub target: String,
    /// Relation types, lowercased
    pub rel: Vec<String>,
    /// All link parameters (first occurrence wins), keys lowercased
    pub params: BTreeMap<String, String>,
}

impl Link {
    /// Whether this link carries the given relation type
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel.iter().any(|r| r.eq_ignore_ascii_case(rel))
    }
}

/// Parse a `Link` header value into its link-values
///
/// Entries that are not of the form `<target>; params` are skipped.
pub fn parse_link_header(header: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut rest = header;

    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if rest.is_empty() {
            break;
        }

        let Some(after_open) = rest.strip_prefix('<') else {
            let end = find_unquoted(rest, ',').unwrap_or(rest.len());
            rest = &rest[end..];
            continue;
        };

        let Some(close) = after_open.find('>') else {
            break;
        };

        let target = after_open[..close].trim();
        let tail = &after_open[close + 1..];
        let end = find_unquoted(tail, ',').unwrap_or(tail.len());
        let params = parse_params(&tail[..end]);
        rest = &tail[end..];

        let rel = params
            .get("rel")
            .map(|r| r.split_whitespace().map(str::to_ascii_lowercase).collect())
            .unwrap_or_default();

        links.push(Link {
            target: target.to_string(),
            rel,
            params,
        });
    }

    links
}

/// Parse `; key=value; key="quoted value"` link parameters
fn parse_params(segment: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    for part in split_unquoted(segment, ';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let (key, value) = match part.split_once('=') {
            Some((k, v)) => (k.trim(), unquote(v.trim())),
            None => (part, ""),
        };
        if key.is_empty() {
            continue;
        }

        params
            .entry(key.to_ascii_lowercase())
            .or_insert_with(|| value.to_string());
    }

    params
}

/// Strip one pair of surrounding double quotes
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Byte offset of the first `needle` outside double quotes
fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c == needle && !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;
    while let Some(i) = find_unquoted(rest, sep) {
        parts.push(&rest[..i]);
        rest = &rest[i + sep.len_utf8()..];
    }
    parts.push(rest);
    parts
}
