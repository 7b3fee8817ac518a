use std::fs;

use crate::extractor::{clean_description, extract_text};

#[test]
fn test_clean_infobox_leakage() {
    let extract = fs::read_to_string("src/extractor/tests/fixtures/cat_extract.txt")
        .expect("Failed to read test fixture");

    let cleaned = clean_description(&extract);

    assert!(cleaned.starts_with("Domestic cat"));
    assert!(cleaned.contains("The cat (Felis catus), also referred to as the domestic cat"));
    assert!(cleaned.ends_with("family Felidae."));
    assert!(!cleaned.contains('\n'));
    for leaked in [
        "Temporal range",
        "Conservation status",
        "Kingdom:",
        "Synonyms",
        "angorensis",
    ] {
        assert!(!cleaned.contains(leaked), "{leaked} survived cleaning");
    }
}

#[test]
fn test_revision_html_to_text() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/revision.html")
        .expect("Failed to read test fixture");

    let text = extract_text(&html);

    assert!(text.contains("red fox"));
    assert!(text.contains("least concern"));
    assert!(!text.contains("<a"));
    assert!(!text.contains("mw-parser-output"));
}

#[test]
fn test_extracted_text_cleans_to_one_line() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/revision.html")
        .expect("Failed to read test fixture");

    let line = clean_description(&extract_text(&html));

    assert!(line.starts_with("The red fox (Vulpes vulpes) is the largest"));
    assert!(line.ends_with("by the IUCN."));
    assert!(!line.contains("  "));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_clean_never_panics(text in ".*") {
            let _ = clean_description(&text);
        }

        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_text(&html);
        }

        #[test]
        fn test_clean_is_idempotent(text in "[a-z <>/=\"\n]{0,64}") {
            let once = clean_description(&text);
            prop_assert_eq!(clean_description(&once), once);
        }

        #[test]
        fn test_clean_output_is_trimmed_single_line(text in ".*") {
            let cleaned = clean_description(&text);
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
            prop_assert!(!cleaned.contains('\n'));
            prop_assert!(!cleaned.contains("  "));
        }
    }
}
