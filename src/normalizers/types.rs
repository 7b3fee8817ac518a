use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";
pub const NO_ETYMOLOGY: &str = "No etymology available";
pub const NO_PRONUNCIATION: &str = "No pronunciation available";

/// One article hit from the encyclopedia search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncyclopediaResult {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
}

/// One file from the media index. `image_url` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub author: String,
    pub license: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    pub part_of_speech: String,
    pub definitions: Vec<String>,
    pub etymology: String,
    pub pronunciation: String,
    pub examples: Vec<String>,
}

/// A chat completion split into its reasoning block and the visible answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResponse {
    pub thinking: String,
    pub response: String,
}

/// A search hit that carried both a numeric page id and a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub page_id: u64,
    pub title: String,
    pub snippet: Option<String>,
}
