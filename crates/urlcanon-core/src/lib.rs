//! Deterministic URL canonicalization for equality checks, dedup, and cache keys.
//!
//! Pipeline: [`url_model::parse`] → [`query::query_string_to_map`] →
//! tracking filter + key sort → [`query::map_to_query_string`] → assembled
//! string. Everything here is pure and thread-safe.

pub mod config;
pub mod logging;

pub mod canonical;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod query;
pub mod text;
pub mod url_model;

pub use canonical::{normalize, Canonicalizer};
pub use config::CanonConfig;
pub use error::{CanonError, EncodingError, InvalidUrlError};
pub use query::{map_to_query_string, query_string_to_map, ParameterMapping};
