//! URL modeling: splitting a raw URL into its components.
//!
//! The parser is deliberately lossless. Scheme and host keep their case, the
//! port is `None` unless written out, and path/query/fragment stay encoded.
//! Case folding and port elision are canonicalization policy, applied later.

mod authority;
mod parse;

pub use parse::parse;

/// Components of an HTTP-like URL, borrowed from the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl<'a> {
    pub scheme: &'a str,
    /// `user[:password]` before the last `@` of the authority, if any.
    pub userinfo: Option<&'a str>,
    /// Host as written; IPv6 literals keep their brackets.
    pub host: &'a str,
    pub port: Option<u16>,
    /// Raw path, possibly empty.
    pub path: &'a str,
    /// Raw text between `?` and `#`; `None` when there is no `?`.
    pub query: Option<&'a str>,
    /// Raw text after `#`; `None` when there is no `#`.
    pub fragment: Option<&'a str>,
}
