//! Text hygiene for URL lists read from files.

/// U+FEFF, written as `EF BB BF` at the start of some UTF-8 files.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Removes a single leading byte-order mark, if present.
pub fn strip_byte_order_mark(s: &str) -> &str {
    s.strip_prefix(BYTE_ORDER_MARK).unwrap_or(s)
}
