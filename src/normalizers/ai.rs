use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::normalizers::AiResponse;

static THINK_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>(.*?)</think>").unwrap());

/// Decode a chat-completion payload (`choices[0].message.content`).
pub fn normalize(payload: &Value) -> AiResponse {
    let content = payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default();

    split_thinking(content)
}

/// Separate the first `<think>` block from the rest of the message.
pub fn split_thinking(content: &str) -> AiResponse {
    let Some(captures) = THINK_BLOCK_REGEX.captures(content) else {
        return AiResponse {
            thinking: String::new(),
            response: content.trim().to_string(),
        };
    };

    let (Some(block), Some(inner)) = (captures.get(0), captures.get(1)) else {
        return AiResponse::default();
    };

    let mut response = String::with_capacity(content.len() - block.len());
    response.push_str(&content[..block.start()]);
    response.push_str(&content[block.end()..]);

    AiResponse {
        thinking: inner.as_str().trim().to_string(),
        response: response.trim().to_string(),
    }
}
