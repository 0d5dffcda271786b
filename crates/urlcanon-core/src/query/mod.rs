//! Query string <-> [`ParameterMapping`] conversion.
//!
//! Decoding keeps first-occurrence order and never sorts; ordering for
//! canonical output is the canonicalizer's job.

mod mapping;

pub use mapping::ParameterMapping;

use crate::encoding;
use crate::error::EncodingError;

/// Splits a raw query string into decoded key/value pairs.
///
/// Returns `None` for an absent or empty query, so "no query string" stays
/// distinguishable from a query that holds no parameters (`"&&"`).
///
/// - Empty segments (`a=1&&b=2`, leading or trailing `&`) are skipped
/// - Each segment splits on its first `=` only; `a` gives `("a", "")`, `=b` gives `("", "b")`
/// - Duplicate keys: the later value wins
///
/// Fails on a malformed percent-escape in any key or value.
pub fn query_string_to_map(query: Option<&str>) -> Result<Option<ParameterMapping>, EncodingError> {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return Ok(None),
    };

    let mut mapping = ParameterMapping::new();
    for segment in query.split('&').filter(|s| !s.is_empty()) {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        mapping.insert(encoding::decode(key)?, encoding::decode(value)?);
    }
    Ok(Some(mapping))
}

/// Encodes a mapping as `k=v&k=v` in iteration order.
///
/// Returns `""` for an absent or empty mapping, never anything else.
pub fn map_to_query_string(mapping: Option<&ParameterMapping>) -> String {
    let Some(mapping) = mapping else {
        return String::new();
    };
    mapping
        .iter()
        .map(|(k, v)| format!("{}={}", encoding::encode(k), encoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
