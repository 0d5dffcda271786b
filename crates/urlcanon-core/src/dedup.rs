//! Batch canonicalization: collapse a list of URLs to distinct canonical forms.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::BufRead;

use anyhow::{Context, Result};

use crate::canonical::Canonicalizer;
use crate::error::CanonError;
use crate::text::strip_byte_order_mark;

/// One distinct canonical URL and how many inputs collapsed into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupEntry {
    pub canonical: String,
    /// Input that first produced this canonical form.
    pub first_input: String,
    pub count: usize,
}

/// Input that could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// 1-based position among the non-blank inputs.
    pub index: usize,
    pub input: String,
    pub error: CanonError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupReport {
    /// Distinct canonical URLs in first-seen order.
    pub entries: Vec<DedupEntry>,
    pub rejected: Vec<Rejected>,
}

/// Canonicalizes each URL and groups equivalent ones, keeping first-seen order.
///
/// Blank inputs are ignored. Invalid inputs are collected in
/// [`DedupReport::rejected`] rather than aborting the batch.
pub fn dedup_urls<I, S>(canon: &Canonicalizer, urls: I) -> DedupReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = DedupReport::default();
    let mut seen: HashMap<String, usize> = HashMap::new();

    let inputs = urls.into_iter().filter(|u| !u.as_ref().trim().is_empty());
    for (i, url) in inputs.enumerate() {
        let url = url.as_ref().trim();
        match canon.normalize(url) {
            Ok(canonical) => match seen.get(&canonical) {
                Some(&pos) => report.entries[pos].count += 1,
                None => {
                    seen.insert(canonical.clone(), report.entries.len());
                    report.entries.push(DedupEntry {
                        canonical,
                        first_input: url.to_string(),
                        count: 1,
                    });
                }
            },
            Err(error) => {
                tracing::warn!(index = i + 1, input = url, %error, "skipping URL");
                report.rejected.push(Rejected {
                    index: i + 1,
                    input: url.to_string(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        distinct = report.entries.len(),
        rejected = report.rejected.len(),
        "dedup finished"
    );
    report
}

/// Reads one URL per line and deduplicates them.
///
/// A byte-order mark at the start of the first line is ignored. Lines that
/// are not valid UTF-8 are decoded lossily (U+FFFD) and processed like any
/// other line; only I/O errors abort the batch.
pub fn canonicalize_lines<R: BufRead>(canon: &Canonicalizer, mut reader: R) -> Result<DedupReport> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    for n in 1.. {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read line {n}"))?;
        if read == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match String::from_utf8_lossy(raw) {
            Cow::Borrowed(s) => s.to_string(),
            Cow::Owned(s) => {
                tracing::warn!(line = n, "invalid UTF-8 replaced with U+FFFD");
                s
            }
        };
        let line = if n == 1 {
            strip_byte_order_mark(&line).to_string()
        } else {
            line
        };
        lines.push(line);
    }
    Ok(dedup_urls(canon, lines))
}
