use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::extractor::{clean_description, extract_text};
use crate::normalizers::types::UNKNOWN;
use crate::normalizers::{MediaResult, SearchHit, non_empty_str, page_for};

static IMAGE_EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif|svg|webp)$").unwrap());

/// Merge file-namespace search hits with the `prop=imageinfo|extracts`
/// payload. Hits whose page has no image URL are dropped.
pub fn normalize(hits: &[SearchHit], details: &Value) -> Vec<MediaResult> {
    hits.iter()
        .filter_map(|hit| {
            let page = page_for(details, hit.page_id);
            let image_info = page.and_then(|page| page.pointer("/imageinfo/0"));
            let image_url = image_info.and_then(|info| non_empty_str(info, "/url"))?;

            let description = page
                .and_then(|page| non_empty_str(page, "/extract"))
                .or_else(|| hit.snippet.as_deref().filter(|s| !s.trim().is_empty()))
                .map(clean_description)
                .unwrap_or_default();

            Some(MediaResult {
                id: hit.page_id.to_string(),
                title: display_title(&hit.title),
                description,
                image_url: image_url.to_string(),
                author: metadata_value(image_info, "/extmetadata/Artist/value"),
                license: metadata_value(image_info, "/extmetadata/License/value"),
            })
        })
        .collect()
}

/// `File:Red fox.JPG` becomes `Red fox`.
pub fn display_title(title: &str) -> String {
    let title = title.strip_prefix("File:").unwrap_or(title);
    IMAGE_EXTENSION_REGEX.replace(title, "").into_owned()
}

// extmetadata values are HTML fragments (the artist is usually a user link).
fn metadata_value(image_info: Option<&Value>, pointer: &str) -> String {
    image_info
        .and_then(|info| non_empty_str(info, pointer))
        .map(|raw| extract_text(raw).trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
