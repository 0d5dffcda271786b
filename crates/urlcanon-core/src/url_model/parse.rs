//! Splitting a raw URL string into [`ParsedUrl`] components.

use super::authority::split_authority;
use super::ParsedUrl;
use crate::error::{InvalidUrlError, InvalidUrlReason};

/// Parses `scheme://[userinfo@]host[:port][path][?query][#fragment]`.
///
/// Surrounding ASCII whitespace is ignored. Fails when `://` is missing, the
/// scheme is not `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, the host is
/// empty or holds whitespace/control characters, or the port is not a valid `u16`.
///
/// # Examples
///
/// - `parse("HTTP://Example.com:8080/a?b=1#c")` keeps `"HTTP"` and `"Example.com"` as written
/// - `parse("example.com/a")` fails with [`InvalidUrlReason::MissingSchemeSeparator`]
pub fn parse(raw: &str) -> Result<ParsedUrl<'_>, InvalidUrlError> {
    let input = raw.trim_matches(|c: char| c.is_ascii_whitespace());
    let fail = |reason| InvalidUrlError::new(raw, reason);

    let (scheme, rest) = input
        .split_once("://")
        .ok_or_else(|| fail(InvalidUrlReason::MissingSchemeSeparator))?;
    if !is_valid_scheme(scheme) {
        return Err(fail(InvalidUrlReason::InvalidScheme));
    }

    let (before_fragment, fragment) = match rest.split_once('#') {
        Some((b, f)) => (b, Some(f)),
        None => (rest, None),
    };
    let (before_query, query) = match before_fragment.split_once('?') {
        Some((b, q)) => (b, Some(q)),
        None => (before_fragment, None),
    };
    let authority_end = before_query.find('/').unwrap_or(before_query.len());
    let (authority, path) = before_query.split_at(authority_end);

    let authority = split_authority(authority).map_err(fail)?;

    Ok(ParsedUrl {
        scheme,
        userinfo: authority.userinfo,
        host: authority.host,
        port: authority.port,
        path,
        query,
        fragment,
    })
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
