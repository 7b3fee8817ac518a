use serde_json::{Map, Value};

/// Raw markup of the first revision of the first page in a
/// `prop=revisions&rvprop=content` payload, or an empty string.
///
/// "First page" is the one with the smallest numeric page id. Keys that are
/// not page ids (such as `"-1"` for a missing title) only count when no
/// page id is present, and then in document order.
pub fn normalize(payload: &Value) -> String {
    payload
        .get("query")
        .and_then(|query| query.get("pages"))
        .and_then(Value::as_object)
        .and_then(first_page)
        .and_then(|page| page.get("revisions"))
        .and_then(Value::as_array)
        .and_then(|revisions| revisions.first())
        .and_then(|revision| revision.get("*"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn first_page(pages: &Map<String, Value>) -> Option<&Value> {
    pages
        .iter()
        .filter_map(|(key, page)| page_id(key).map(|id| (id, page)))
        .min_by_key(|(id, _)| *id)
        .map(|(_, page)| page)
        .or_else(|| pages.values().next())
}

// Canonical decimal only: "012" and "+1" are not page ids.
fn page_id(key: &str) -> Option<u64> {
    let id = key.parse::<u64>().ok()?;
    (id.to_string() == key).then_some(id)
}
