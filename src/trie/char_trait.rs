use std::fmt::{Debug, Write};
use std::hash::Hash;

/// Trait for types that can serve as edge labels in a trie.
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: children are kept sorted, which makes the pattern deterministic
/// - `Hash`, `Debug`: convenience for callers and debug printing of nodes
///
/// Each label type also knows how to spell itself as a literal in the
/// `regex` crate dialect.
pub trait TrieChar: Copy + Eq + Ord + Hash + Debug {
    /// Appends this label to `out` so that it matches itself literally.
    fn quote_into(self, out: &mut String);

    /// Strips the whitespace around a line of a word list.
    fn trim_line(line: &str) -> &str;
}

impl TrieChar for char {
    #[inline]
    fn quote_into(self, out: &mut String) {
        let mut buf = [0; 4];
        regex_syntax::escape_into(self.encode_utf8(&mut buf), out);
    }

    /// Unicode whitespace.
    #[inline]
    fn trim_line(line: &str) -> &str {
        line.trim()
    }
}

/// Bytes are matched as raw bytes, like a byte-oriented word list.
///
/// ASCII bytes are quoted as characters. Bytes above `0x7F` are written as
/// `(?-u:\xNN)`, which is only accepted by `regex::bytes`.
impl TrieChar for u8 {
    #[inline]
    fn quote_into(self, out: &mut String) {
        if self.is_ascii() {
            char::from(self).quote_into(out);
        } else {
            // Writing into a String cannot fail.
            let _ = write!(out, "(?-u:\\x{self:02X})");
        }
    }

    /// ASCII whitespace only; other bytes are word content.
    #[inline]
    fn trim_line(line: &str) -> &str {
        line.trim_ascii()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn quoted<C: TrieChar>(c: C) -> String {
        let mut s = String::new();
        c.quote_into(&mut s);
        s
    }

    #[test]
    fn plain_chars_are_unchanged() {
        assert_eq!(quoted('a'), "a");
        assert_eq!(quoted('Z'), "Z");
        assert_eq!(quoted('7'), "7");
        assert_eq!(quoted('å'), "å");
        assert_eq!(quoted('授'), "授");
    }

    #[test]
    fn metacharacters_are_escaped() {
        for ch in ['.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|', '^', '$', '\\'] {
            assert_eq!(quoted(ch), format!("\\{ch}"));
        }
    }

    #[test]
    fn ascii_bytes_quote_like_chars() {
        assert_eq!(quoted(b'a'), "a");
        assert_eq!(quoted(b'.'), "\\.");
        assert_eq!(quoted(b'|'), "\\|");
    }

    #[test]
    fn trim_rule_depends_on_label_type() {
        let line = "\u{3000}word \t\n";
        assert_eq!(char::trim_line(line), "word");
        assert_eq!(u8::trim_line(line), "\u{3000}word");
    }

    #[test]
    fn high_bytes_use_hex_escape() {
        assert_eq!(quoted(0xFFu8), "(?-u:\\xFF)");
        assert_eq!(quoted(0x80u8), "(?-u:\\x80)");
        assert_eq!(quoted(0xC3u8), "(?-u:\\xC3)");
    }
}
