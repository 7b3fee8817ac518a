use serde_json::Value;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::Config;
use crate::extractor::extract_text;
use crate::fetcher::fetch_json;
use crate::normalizers::{
    self, AiResponse, DictionaryEntry, EncyclopediaResult, MediaResult, collect_hits,
    page_ids_param,
};

/// MediaWiki namespace holding `File:` pages.
const FILE_NAMESPACE: &str = "6";
const THUMBNAIL_SIZE: &str = "200";

/// Entry point for every lookup.
///
/// All methods are total: transport and decode failures are logged and
/// come back as empty results.
#[derive(Debug, Clone)]
pub struct WikiClient {
    config: Config,
}

impl WikiClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[instrument(skip_all, fields(query = %query))]
    pub async fn search_encyclopedia(&self, query: &str) -> Vec<EncyclopediaResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let limit = self.config.search_limit().to_string();
        let search_url = mediawiki_url(
            self.config.encyclopedia_url(),
            &[("list", "search"), ("srsearch", query), ("srlimit", limit.as_str())],
        );
        let Some(search) = get_json(&search_url, "encyclopedia search").await else {
            return Vec::new();
        };

        let hits = collect_hits(&search);
        if hits.is_empty() {
            return Vec::new();
        }

        let page_ids = page_ids_param(&hits);
        let summary_url = mediawiki_url(
            self.config.encyclopedia_url(),
            &[
                ("prop", "extracts|pageimages"),
                ("exintro", "true"),
                ("explaintext", "true"),
                ("piprop", "thumbnail"),
                ("pithumbsize", THUMBNAIL_SIZE),
                ("pageids", page_ids.as_str()),
            ],
        );
        // Without summaries the search snippets still make usable results.
        let summaries = get_json(&summary_url, "encyclopedia summaries")
            .await
            .unwrap_or(Value::Null);

        let results = normalizers::encyclopedia::normalize(&hits, &summaries);
        info!(count = results.len(), "encyclopedia search complete");
        results
    }

    #[instrument(skip_all, fields(query = %query))]
    pub async fn search_media(&self, query: &str) -> Vec<MediaResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let limit = self.config.search_limit().to_string();
        let search_url = mediawiki_url(
            self.config.media_url(),
            &[
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("srnamespace", FILE_NAMESPACE),
            ],
        );
        let Some(search) = get_json(&search_url, "media search").await else {
            return Vec::new();
        };

        let hits = collect_hits(&search);
        if hits.is_empty() {
            return Vec::new();
        }

        let page_ids = page_ids_param(&hits);
        let details_url = mediawiki_url(
            self.config.media_url(),
            &[
                ("prop", "imageinfo|extracts"),
                ("iiprop", "url|size|mime|extmetadata"),
                ("exintro", "true"),
                ("explaintext", "true"),
                ("pageids", page_ids.as_str()),
            ],
        );
        // Image URLs only come from the details request.
        let Some(details) = get_json(&details_url, "media details").await else {
            return Vec::new();
        };

        let results = normalizers::media::normalize(&hits, &details);
        info!(
            count = results.len(),
            dropped = hits.len() - results.len(),
            "media search complete"
        );
        results
    }

    #[instrument(skip_all, fields(word = %word))]
    pub async fn lookup_word(&self, word: &str) -> Vec<DictionaryEntry> {
        let word = word.trim();
        if word.is_empty() {
            return Vec::new();
        }

        let Some(url) = dictionary_url(self.config.dictionary_url(), word) else {
            warn!("dictionary base url cannot take a path segment");
            return Vec::new();
        };
        let Some(payload) = get_json(&url, "dictionary").await else {
            return Vec::new();
        };

        let entries = normalizers::dictionary::normalize(&payload, word);
        info!(count = entries.len(), "dictionary lookup complete");
        entries
    }

    /// Rendered HTML of the latest revision of the article titled `title`.
    #[instrument(skip_all, fields(title = %title))]
    pub async fn article_content(&self, title: &str) -> String {
        let title = title.trim();
        if title.is_empty() {
            return String::new();
        }

        let url = mediawiki_url(
            self.config.encyclopedia_url(),
            &[
                ("prop", "revisions"),
                ("rvprop", "content"),
                ("rvparse", "1"),
                ("titles", title),
            ],
        );
        match get_json(&url, "article content").await {
            Some(payload) => normalizers::content::normalize(&payload),
            None => String::new(),
        }
    }

    /// Visible text of the article titled `title`.
    pub async fn article_text(&self, title: &str) -> String {
        extract_text(&self.article_content(title).await)
    }

    /// Split a chat-completion payload into reasoning and answer.
    pub fn parse_ai_response(&self, payload: &Value) -> AiResponse {
        normalizers::ai::normalize(payload)
    }
}

/// `base?action=query&format=json&<params>&origin=*`
fn mediawiki_url(base: &Url, params: &[(&str, &str)]) -> Url {
    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("action", "query");
        pairs.append_pair("format", "json");
        pairs.extend_pairs(params.iter().copied());
        pairs.append_pair("origin", "*");
    }
    url
}

fn dictionary_url(base: &Url, word: &str) -> Option<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(word);
    Some(url)
}

async fn get_json(url: &Url, upstream: &'static str) -> Option<Value> {
    match fetch_json(url.as_str()).await {
        Ok(payload) => Some(payload),
        Err(err) if err.is_status() => {
            warn!(upstream, error = %err, "upstream returned non-success status");
            None
        }
        Err(err) => {
            warn!(upstream, error = %err, "upstream request failed");
            None
        }
    }
}
