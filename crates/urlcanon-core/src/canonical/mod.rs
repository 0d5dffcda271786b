//! Canonicalization policy: one deterministic string per equivalent URL.
//!
//! 1. Lower-case scheme and host; drop userinfo
//! 2. Elide the port when it is the scheme's default
//! 3. Percent-encode whitespace, controls, and non-ASCII in the path, then
//!    strip trailing `/` from non-root paths
//! 4. Drop tracking query parameters, sort the rest by key (byte-wise)
//! 5. Drop the fragment
//!
//! The output is idempotent: normalizing it again with the same
//! configuration yields the same string.

mod filter;
mod path;

pub use filter::TrackingFilter;
pub use path::{escape_path, strip_trailing_slashes};

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::OnceLock;

use crate::config::CanonConfig;
use crate::error::CanonError;
use crate::query::{map_to_query_string, query_string_to_map};
use crate::url_model;

/// Immutable canonicalization policy; share freely across threads.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    default_ports: BTreeMap<String, u16>,
    strip_trailing_slash: bool,
    filter: TrackingFilter,
}

impl Canonicalizer {
    pub fn new(cfg: &CanonConfig) -> Self {
        let default_ports = cfg
            .default_ports
            .iter()
            .map(|(scheme, port)| (scheme.to_ascii_lowercase(), *port))
            .collect();
        Self {
            default_ports,
            strip_trailing_slash: cfg.strip_trailing_slash,
            filter: TrackingFilter::new(cfg.tracking_rules()),
        }
    }

    /// Normalizes `raw` into its canonical string.
    ///
    /// Fails with [`CanonError::InvalidUrl`] when `raw` does not parse and with
    /// [`CanonError::Encoding`] on a malformed percent-escape in the query.
    ///
    /// Query escapes that decode to invalid UTF-8 become U+FFFD, so `?a=%FF`
    /// and `?a=%FE` produce the same canonical string.
    pub fn normalize(&self, raw: &str) -> Result<String, CanonError> {
        let url = url_model::parse(raw)?;

        let scheme = url.scheme.to_ascii_lowercase();
        let host = url.host.to_lowercase();

        let mut out = String::with_capacity(raw.len());
        out.push_str(&scheme);
        out.push_str("://");
        out.push_str(&host);

        if let Some(port) = url.port {
            if self.default_ports.get(&scheme) != Some(&port) {
                let _ = write!(out, ":{port}");
            }
        }

        let path = escape_path(url.path);
        if self.strip_trailing_slash {
            out.push_str(strip_trailing_slashes(&path));
        } else {
            out.push_str(&path);
        }

        if let Some(params) = query_string_to_map(url.query)? {
            let mut kept = self.filter.retain_kept(params);
            kept.sort_by_key();
            let query = map_to_query_string(Some(&kept));
            if !query.is_empty() {
                out.push('?');
                out.push_str(&query);
            }
        }

        tracing::trace!(input = raw, output = %out, "normalized");
        Ok(out)
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(&CanonConfig::default())
    }
}

/// Normalizes `raw` with the built-in default configuration.
///
/// Same lossy handling of invalid UTF-8 in query escapes as
/// [`Canonicalizer::normalize`].
///
/// # Examples
///
/// - `normalize("HTTP://Example.COM:80/p/?b=2&a=1&utm_source=ads#top")` → `"http://example.com/p?a=1&b=2"`
/// - `normalize("http://x.com:8080/p")` → `"http://x.com:8080/p"`
pub fn normalize(raw: &str) -> Result<String, CanonError> {
    static DEFAULT: OnceLock<Canonicalizer> = OnceLock::new();
    DEFAULT.get_or_init(Canonicalizer::default).normalize(raw)
}
