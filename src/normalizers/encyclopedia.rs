use serde_json::Value;

use crate::extractor::clean_description;
use crate::normalizers::{EncyclopediaResult, SearchHit, non_empty_str, page_for};

/// Merge search hits with the `prop=extracts|pageimages` summary payload.
///
/// The description prefers the page extract and falls back to the search
/// snippet; both are cleaned. `summaries` may be anything, including
/// `Value::Null` when the summary request failed.
pub fn normalize(hits: &[SearchHit], summaries: &Value) -> Vec<EncyclopediaResult> {
    hits.iter()
        .map(|hit| {
            let page = page_for(summaries, hit.page_id);

            let description = page
                .and_then(|page| non_empty_str(page, "/extract"))
                .or_else(|| hit.snippet.as_deref().filter(|s| !s.trim().is_empty()))
                .map(clean_description)
                .unwrap_or_default();

            let thumbnail = page
                .and_then(|page| non_empty_str(page, "/thumbnail/source"))
                .map(str::to_string);

            EncyclopediaResult {
                id: hit.page_id,
                title: hit.title.clone(),
                description,
                thumbnail,
            }
        })
        .collect()
}
