//! RFC 3986 percent-encoding of individual query tokens.
//!
//! Stricter than form-encoding: only the unreserved set (`A-Z a-z 0-9 - . _ ~`)
//! is left literal, so space becomes `%20` and `*` becomes `%2A`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::EncodingError;

/// Everything except RFC 3986 unreserved characters.
pub const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes the UTF-8 bytes of `s` that are not unreserved.
///
/// Hex digits are upper-case, e.g. `encode("a b*")` is `"a%20b%2A"`.
pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, UNRESERVED_ENCODE_SET).to_string()
}

/// Decodes `%XX` escapes (hex case-insensitive) and `+` as space.
///
/// Fails on a `%` that is not followed by two hex digits. Decoded byte
/// sequences that are not valid UTF-8 are replaced with U+FFFD, so distinct
/// inputs such as `%FF` and `%FE` decode to the same string.
pub fn decode(s: &str) -> Result<String, EncodingError> {
    validate_escapes(s)?;
    let spaced = s.replace('+', " ");
    Ok(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}

fn validate_escapes(s: &str) -> Result<(), EncodingError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(EncodingError {
                input: s.to_string(),
                offset: i,
            });
        }
        i += 3;
    }
    Ok(())
}
