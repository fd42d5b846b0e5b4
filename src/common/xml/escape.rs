use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

// Built once on first use, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

// LeftmostLongest so `&amp;lt;` decodes to `&lt;` rather than `<`
static XML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
        .expect("Failed to build XML unescaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use pptx_fixtures::common::xml::escape_xml;
/// assert_eq!(escape_xml("Bold & <b>"), "Bold &amp; &lt;b&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Unescape the five predefined XML entities. Anything else is left untouched.
///
/// # Examples
///
/// ```
/// use pptx_fixtures::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    XML_UNESCAPER.replace_all(s, &["&", "<", ">", "\"", "'"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_passes_plain_text() {
        assert_eq!(escape_xml("• First item"), "• First item");
        assert_eq!(escape_xml("1. First numbered item"), "1. First numbered item");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_xml(r#"say "hi" it's"#), "say &quot;hi&quot; it&apos;s");
    }

    proptest! {
        #[test]
        fn prop_unescape_inverts_escape(s in "\\PC{0,40}") {
            prop_assert_eq!(unescape_xml(&escape_xml(&s)), s);
        }
    }
}
