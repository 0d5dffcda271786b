//! Path policy for canonical output.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes escaped in a canonical path: ASCII controls and space. Non-ASCII is
/// always escaped by `utf8_percent_encode`; existing `%XX` escapes are kept as written.
const PATH_ESCAPE_SET: &AsciiSet = &CONTROLS.add(b' ');

/// Percent-encodes whitespace, controls, and non-ASCII characters in `path`.
///
/// `"/a b/"` becomes `"/a%20b/"`. A path that is already escaped comes back
/// borrowed and unchanged, so applying this twice is the same as once.
pub fn escape_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH_ESCAPE_SET).into()
}

/// Strips trailing `/` while the path is longer than the root `/`.
///
/// `"/a/b/"` becomes `"/a/b"`, `"/a//"` becomes `"/a"`, `"//"` becomes `"/"`,
/// and `"/"` and `""` are unchanged. The result only ends in `/` when it is `/`.
pub fn strip_trailing_slashes(path: &str) -> &str {
    let mut p = path;
    while p.len() > 1 && p.ends_with('/') {
        p = &p[..p.len() - 1];
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips() {
        assert_eq!(strip_trailing_slashes("/a/b/"), "/a/b");
        assert_eq!(strip_trailing_slashes("/a//"), "/a");
        assert_eq!(strip_trailing_slashes("//"), "/");
    }

    #[test]
    fn keeps_root_and_empty() {
        assert_eq!(strip_trailing_slashes("/"), "/");
        assert_eq!(strip_trailing_slashes(""), "");
        assert_eq!(strip_trailing_slashes("/a/b"), "/a/b");
    }

    #[test]
    fn escapes_whitespace_and_controls() {
        assert_eq!(escape_path("/a /b\t"), "/a%20/b%09");
        assert_eq!(escape_path("/é"), "/%C3%A9");
        assert_eq!(escape_path("/A%2fB/~x"), "/A%2fB/~x");
        assert!(matches!(escape_path("/a/b"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_then_strip_leaves_no_trailing_space() {
        let escaped = escape_path("/a /");
        assert_eq!(strip_trailing_slashes(&escaped), "/a%20");
    }

    #[test]
    fn literal_dollar_is_not_special() {
        assert_eq!(strip_trailing_slashes("/a/$"), "/a/$");
    }
}
