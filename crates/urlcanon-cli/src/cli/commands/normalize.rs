//! `urlcanon normalize <url>...` – print canonical URLs.

use anyhow::Result;
use std::io::Write;
use urlcanon_core::Canonicalizer;

pub fn run_normalize<W: Write>(
    out: &mut W,
    canon: &Canonicalizer,
    urls: &[String],
    skip_invalid: bool,
) -> Result<()> {
    for url in urls {
        match canon.normalize(url) {
            Ok(canonical) => writeln!(out, "{canonical}")?,
            Err(err) if skip_invalid => tracing::warn!(input = %url, "skipping: {err}"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prints_one_line_per_url() {
        let mut out = Vec::new();
        run_normalize(
            &mut out,
            &Canonicalizer::default(),
            &urls(&["HTTP://X.com:80/a/", "http://y.com/?b=1&a=2#f"]),
            false,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "http://x.com/a\nhttp://y.com/?a=2&b=1\n"
        );
    }

    #[test]
    fn invalid_fails_unless_skipped() {
        let canon = Canonicalizer::default();
        let input = urls(&["http://ok.com", "bogus", "http://also.ok"]);

        let mut out = Vec::new();
        let err = run_normalize(&mut out, &canon, &input, false).unwrap_err();
        assert!(err.to_string().contains("bogus"));
        assert_eq!(String::from_utf8(out).unwrap(), "http://ok.com\n");

        let mut out = Vec::new();
        run_normalize(&mut out, &canon, &input, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "http://ok.com\nhttp://also.ok\n"
        );
    }
}
