//! Escaping and quoting for rendered values
//!
//! Values are inspected once for whether they need escaping at all, so plain
//! text takes a fast path and is appended verbatim. Anything non-printable is
//! rewritten into a backslash escape: the named forms for the standard
//! control characters, `\xHH` for the rest of the C0 range, and `\uXXXX` /
//! `\UXXXXXXXX` for other non-printable code points.

use std::fmt::Write;

/// Whether a char can be emitted into a record as-is.
///
/// ASCII space is printable; control characters and all other whitespace are
/// not. Private-use and noncharacter code points are also treated as
/// non-printable.
fn is_printable(r: char) -> bool {
    if r == ' ' {
        return true;
    }
    if r.is_control() || r.is_whitespace() {
        return false;
    }
    let cp = r as u32;
    if (0xe000..=0xf8ff).contains(&cp) || cp >= 0xf0000 {
        return false;
    }
    if (0xfdd0..=0xfdef).contains(&cp) || (cp & 0xfffe) == 0xfffe {
        return false;
    }
    true
}

/// Chars allowed to exist in an unquoted value: the ASCII range `-` through
/// `~`.
fn is_normal(r: char) -> bool {
    ('-'..='~').contains(&r)
}

/// Returns true if any char in the text is non-printable or a double quote.
///
/// Drives the fast path in [`escape_into`]: when this is false the text is
/// appended unchanged.
pub fn needs_escaping(text: &str) -> bool {
    text.chars().any(|r| !is_printable(r) || r == '"')
}

/// Returns true if the text contains any char outside the unquoted-safe
/// range, including spaces, control chars, and all non-ASCII.
pub fn needs_quoting(text: &str) -> bool {
    text.chars().any(|r| !is_normal(r))
}

/// Appends a printable-safe rendering of `text` to `buf`.
///
/// With `escape_quotes`, double quotes become `\"`; printable chars pass
/// through verbatim; everything else is rewritten as described in the module
/// docs.
pub fn escape_into(buf: &mut String, text: &str, escape_quotes: bool) {
    if !needs_escaping(text) {
        buf.push_str(text);
        return;
    }

    for r in text.chars() {
        if escape_quotes && r == '"' {
            buf.push_str("\\\"");
        } else if is_printable(r) {
            buf.push(r);
        } else {
            match r {
                '\x07' => buf.push_str("\\a"),
                '\x08' => buf.push_str("\\b"),
                '\x0c' => buf.push_str("\\f"),
                '\n' => buf.push_str("\\n"),
                '\r' => buf.push_str("\\r"),
                '\t' => buf.push_str("\\t"),
                '\x0b' => buf.push_str("\\v"),
                _ if r < ' ' => {
                    let _ = write!(buf, "\\x{:02x}", r as u32);
                }
                _ if (r as u32) < 0x10000 => {
                    let _ = write!(buf, "\\u{:04x}", r as u32);
                }
                _ => {
                    let _ = write!(buf, "\\U{:08x}", r as u32);
                }
            }
        }
    }
}

/// Writes `text` line by line, each line prefixed with `indent`, escaped
/// (without quote-escaping) and terminated with a newline. A trailing empty
/// segment produces no output.
pub fn write_indented(buf: &mut String, text: &str, indent: &str) {
    let mut rest = text;
    loop {
        match rest.find('\n') {
            Some(nl) => {
                buf.push_str(indent);
                escape_into(buf, &rest[..nl], false);
                buf.push('\n');
                rest = &rest[nl + 1..];
            }
            None => {
                if !rest.is_empty() {
                    buf.push_str(indent);
                    escape_into(buf, rest, false);
                    buf.push('\n');
                }
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(text: &str, escape_quotes: bool) -> String {
        let mut buf = String::new();
        escape_into(&mut buf, text, escape_quotes);
        buf
    }

    #[test]
    fn test_plain_text_needs_nothing() {
        assert!(!needs_escaping("plain-text_123"));
        assert!(!needs_quoting("plain-text_123"));
        assert_eq!(escaped("plain-text_123", true), "plain-text_123");
    }

    #[test]
    fn test_space_is_printable_but_quoted() {
        assert!(!needs_escaping("two words"));
        assert!(needs_quoting("two words"));
    }

    #[test]
    fn test_quote_triggers_escaping_and_quoting() {
        assert!(needs_escaping("say \"hi\""));
        assert!(needs_quoting("say \"hi\""));
    }

    #[test]
    fn test_named_control_escapes_in_order() {
        let input = "\x07\x08\x0c\n\r\t\x0b";
        assert_eq!(escaped(input, false), "\\a\\b\\f\\n\\r\\t\\v");
    }

    #[test]
    fn test_named_escapes_leave_neighbors_alone() {
        assert_eq!(escaped("a\tb", false), "a\\tb");
        assert_eq!(escaped("x\ny", true), "x\\ny");
    }

    #[test]
    fn test_quote_escaping_only_when_asked() {
        assert_eq!(escaped("a\"b", true), "a\\\"b");
        // Quotes are printable, so without quote-escaping they pass through.
        assert_eq!(escaped("a\"b\t", false), "a\"b\\t");
    }

    #[test]
    fn test_hex_escape_for_low_controls() {
        assert_eq!(escaped("\x01", false), "\\x01");
        assert_eq!(escaped("\x1b[0m", false), "\\x1b[0m");
    }

    #[test]
    fn test_unicode_escapes() {
        // Line separator and private-use chars in the BMP take the 4-digit
        // form.
        assert_eq!(escaped("\u{2028}", false), "\\u2028");
        assert_eq!(escaped("\u{e000}", false), "\\ue000");
        // Supplementary private-use code points take the 8-digit form.
        assert_eq!(escaped("\u{100000}", false), "\\U00100000");
    }

    #[test]
    fn test_non_ascii_printables_pass_through() {
        assert_eq!(escaped("héllo wörld", false), "héllo wörld");
        assert!(needs_quoting("héllo"));
    }

    #[test]
    fn test_nbsp_is_not_printable() {
        assert_eq!(escaped("\u{a0}", false), "\\u00a0");
    }

    #[test]
    fn test_write_indented_basic() {
        let mut buf = String::new();
        write_indented(&mut buf, "a\nb", "  | ");
        assert_eq!(buf, "  | a\n  | b\n");
    }

    #[test]
    fn test_write_indented_trailing_newline() {
        let mut buf = String::new();
        write_indented(&mut buf, "a\nb\n", "> ");
        assert_eq!(buf, "> a\n> b\n");
    }

    #[test]
    fn test_write_indented_empty_middle_line() {
        let mut buf = String::new();
        write_indented(&mut buf, "a\n\nb", "> ");
        assert_eq!(buf, "> a\n> \n> b\n");
    }

    #[test]
    fn test_write_indented_escapes_lines() {
        let mut buf = String::new();
        write_indented(&mut buf, "a\tb", "> ");
        assert_eq!(buf, "> a\\tb\n");
    }

    #[test]
    fn test_write_indented_empty_input() {
        let mut buf = String::new();
        write_indented(&mut buf, "", "> ");
        assert_eq!(buf, "");
    }
}
