use regex::Regex;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Visible text of an HTML fragment.
///
/// Uses the html5ever parser when the `html-render` feature is enabled and
/// falls back to plain tag stripping otherwise (entities are left encoded
/// in that case).
pub fn extract_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    render_text(html).unwrap_or_else(|| strip_tags(html))
}

#[cfg(feature = "html-render")]
fn render_text(html: &str) -> Option<String> {
    use scraper::Html;

    match std::panic::catch_unwind(|| {
        let fragment = Html::parse_fragment(html);
        fragment.root_element().text().collect::<String>()
    }) {
        Ok(text) => Some(text),
        Err(_) => {
            tracing::warn!("html renderer failed, falling back to tag stripping");
            None
        }
    }
}

#[cfg(not(feature = "html-render"))]
fn render_text(_html: &str) -> Option<String> {
    None
}

pub(crate) fn strip_tags(html: &str) -> String {
    TAG_REGEX.replace_all(html, "").into_owned()
}
