//! Error types surfaced by the canonicalization core.
//!
//! Parser and codec failures are typed so callers (crawlers, cache layers)
//! can decide whether to skip, log, or abort. Nothing here is retried.

use std::fmt;

/// Why a raw string could not be split into scheme/host/path components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlReason {
    /// No `://` between scheme and authority.
    MissingSchemeSeparator,
    /// Scheme is empty or contains characters outside `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme,
    /// Authority has no host.
    EmptyHost,
    /// Host contains a space or an ASCII control character.
    InvalidHost,
    /// Port is not a number in `0..=65535`.
    InvalidPort,
    /// `[` opened an IPv6 literal that is never closed.
    UnterminatedIpv6,
}

impl fmt::Display for InvalidUrlReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidUrlReason::MissingSchemeSeparator => "missing \"://\" after scheme",
            InvalidUrlReason::InvalidScheme => "invalid scheme",
            InvalidUrlReason::EmptyHost => "empty host",
            InvalidUrlReason::InvalidHost => "whitespace or control character in host",
            InvalidUrlReason::InvalidPort => "invalid port",
            InvalidUrlReason::UnterminatedIpv6 => "unterminated IPv6 literal",
        };
        f.write_str(s)
    }
}

/// Raised by the parser when the input has no recognizable URL structure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid URL {input:?}: {reason}")]
pub struct InvalidUrlError {
    pub input: String,
    pub reason: InvalidUrlReason,
}

impl InvalidUrlError {
    pub(crate) fn new(input: &str, reason: InvalidUrlReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Raised by the codec on an incomplete or non-hex `%` escape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed percent-escape at byte {offset} in {input:?}")]
pub struct EncodingError {
    pub input: String,
    /// Byte offset of the offending `%`.
    pub offset: usize,
}

/// Any failure of [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrlError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
