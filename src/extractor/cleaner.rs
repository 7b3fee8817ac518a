use regex::Regex;
use std::sync::LazyLock;

static SEARCHMATCH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<span class="searchmatch">(.*?)</span>"#).unwrap());

static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static ATTRIBUTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"By <a[^>]*>([^<]*)</a>").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lazy gap that stops at any line terminator, including U+2028 and U+2029.
const LINE_GAP: &str = r"[^\n\r\x{2028}\x{2029}]*?";

/// Infobox fragments that leak into plain-text extracts. Applied in order.
/// Every `.*?` gap is bounded to a single line.
static BOILERPLATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Temporal range:.*?Ma",
        r"(?i)PreꞒꞒOSDCPTJKPgN.*?↓",
        r"(?i)Holocene to present.*?ago\)",
        r"(?i)Conservation status.*?Domesticated",
        r"(?i)Scientific classification.*?Binomial name",
        r"(?i)Kingdom:.*?Species:.*?\[1\]",
        r"(?i)Binomial name.*?Linnaeus.*?\[2\]",
        r"(?i)Synonyms.*?\[3\]",
        r"(?i)F\. angorensis.*?F\. vulgaris.*?1829",
    ]
    .into_iter()
    .map(|pattern| Regex::new(&pattern.replace(".*?", LINE_GAP)).unwrap())
    .collect()
});

/// Reduce a search snippet or article extract to a single line of plain text.
///
/// Search-term highlighting is kept as plain text, every other tag is
/// dropped, then known infobox boilerplate is cut out and whitespace is
/// collapsed. The order of the steps matters: boilerplate markers only line
/// up once the markup around them is gone.
pub fn clean_description(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = SEARCHMATCH_REGEX.replace_all(text, "$1");
    let cleaned = HTML_TAG_REGEX.replace_all(&cleaned, "");
    let cleaned = ATTRIBUTION_REGEX.replace_all(&cleaned, "By $1");

    let mut cleaned = cleaned.into_owned();
    for pattern in BOILERPLATE_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }

    collapse_whitespace(&cleaned)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwraps_searchmatch_spans() {
        assert_eq!(
            clean_description(r#"<span class="searchmatch">fox</span> jumps"#),
            "fox jumps"
        );
        assert_eq!(
            clean_description(
                r#"The <span class="searchmatch">red</span> <span class="searchmatch">fox</span> (Vulpes vulpes)"#
            ),
            "The red fox (Vulpes vulpes)"
        );
    }

    #[test]
    fn test_strips_remaining_tags() {
        assert_eq!(
            clean_description("<p>Hello <b>bold</b> <i>world</i></p>"),
            "Hello bold world"
        );
        assert_eq!(
            clean_description(r#"By <a href="//commons.wikimedia.org/wiki/User:Jane">Jane Doe</a>"#),
            "By Jane Doe"
        );
    }

    #[test]
    fn test_removes_temporal_range() {
        assert_eq!(
            clean_description("Temporal range: Triassic to present Ma Something else"),
            "Something else"
        );
    }

    #[test]
    fn test_boilerplate_is_case_insensitive() {
        assert_eq!(
            clean_description("SYNONYMS Felis catus domesticus [3] The cat is small."),
            "The cat is small."
        );
    }

    #[test]
    fn test_removes_taxonomy_blocks() {
        let text = "Domestic cat Conservation status Domesticated Kingdom: Animalia \
                    Phylum: Chordata Species: F. catus [1] Binomial name Felis catus \
                    Linnaeus, 1758 [2] The cat is a small carnivorous mammal.";
        assert_eq!(
            clean_description(text),
            "Domestic cat The cat is a small carnivorous mammal."
        );
    }

    #[test]
    fn test_removes_every_occurrence() {
        assert_eq!(
            clean_description("a Temporal range: x Ma b Temporal range: y Ma c"),
            "a b c"
        );
    }

    #[test]
    fn test_boilerplate_does_not_span_lines() {
        let text = "Synonyms are listed below\nfootnote [3]";
        assert_eq!(clean_description(text), "Synonyms are listed below footnote [3]");
    }

    #[test]
    fn test_boilerplate_stops_at_unicode_line_terminators() {
        for sep in ["\r", "\u{2028}", "\u{2029}"] {
            let text = format!("Temporal range: 66{sep}million years Ma");
            assert_eq!(
                clean_description(&text),
                "Temporal range: 66 million years Ma",
                "separator: {sep:?}"
            );
        }
        assert_eq!(clean_description("Temporal range: 66 Ma later"), "later");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_description("  Hello \n\n\t world  "), "Hello world");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_description(""), "");
        assert_eq!(clean_description("   "), "");
        assert_eq!(clean_description("<br/>"), "");
    }

    #[test]
    fn test_unmatched_angle_bracket_is_kept() {
        assert_eq!(clean_description("x < y and y"), "x < y and y");
    }

    #[test]
    fn test_idempotent_on_cleaned_text() {
        let once = clean_description(
            r#"<span class="searchmatch">Cat</span>  Temporal range: 9 Ma  is a <b>mammal</b>"#,
        );
        assert_eq!(once, "Cat is a mammal");
        assert_eq!(clean_description(&once), once);
    }
}
