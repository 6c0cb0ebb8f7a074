//! Escaped emission of character content.

use std::fmt;

/// Append `content` to `out`, escaped for use as element text.
pub fn write_text<W: fmt::Write>(out: &mut W, content: &str) -> fmt::Result {
    out.write_str(&html_escape::encode_text(content))
}

/// Append `value` to `out`, escaped for use inside a double-quoted
/// attribute value.
pub fn write_attribute_value<W: fmt::Write>(out: &mut W, value: &str) -> fmt::Result {
    out.write_str(&html_escape::encode_double_quoted_attribute(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(content: &str) -> String {
        let mut out = String::new();
        write_text(&mut out, content).unwrap();
        out
    }

    fn attribute(value: &str) -> String {
        let mut out = String::new();
        write_attribute_value(&mut out, value).unwrap();
        out
    }

    #[test]
    fn test_text_escapes_markup_characters() {
        assert_eq!(text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn test_text_passes_plain_content_through() {
        assert_eq!(text("Space Oddity"), "Space Oddity");
    }

    #[test]
    fn test_attribute_escapes_quotes() {
        assert_eq!(attribute(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_attribute_escapes_ampersand() {
        assert_eq!(attribute("a&b"), "a&amp;b");
    }
}
