//! Total decoders from raw upstream JSON into typed results.
//!
//! Nothing in here fails. Each nesting level is read through `Option`, a
//! missing required field drops the item, and a missing optional field
//! takes its documented default.

pub mod ai;
pub mod content;
pub mod dictionary;
pub mod encyclopedia;
pub mod media;
pub mod types;

pub use types::{AiResponse, DictionaryEntry, EncyclopediaResult, MediaResult, SearchHit};

use serde_json::Value;

/// Hits from a MediaWiki `list=search` payload, in upstream order.
///
/// Hits without a numeric `pageid` or a string `title` are skipped.
pub fn collect_hits(payload: &Value) -> Vec<SearchHit> {
    let Some(hits) = payload.pointer("/query/search").and_then(Value::as_array) else {
        return Vec::new();
    };

    hits.iter()
        .filter_map(|hit| {
            Some(SearchHit {
                page_id: hit.get("pageid")?.as_u64()?,
                title: hit.get("title")?.as_str()?.to_string(),
                snippet: hit.get("snippet").and_then(Value::as_str).map(str::to_string),
            })
        })
        .collect()
}

/// `pageids` parameter for the follow-up details request.
pub fn page_ids_param(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| hit.page_id.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

/// The `query.pages.<id>` object of a MediaWiki `prop=` payload.
pub(crate) fn page_for(payload: &Value, page_id: u64) -> Option<&Value> {
    payload
        .get("query")?
        .get("pages")?
        .get(page_id.to_string())
        .filter(|page| page.is_object())
}

/// String at `pointer` if present and not blank.
pub(crate) fn non_empty_str<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
