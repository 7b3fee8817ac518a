use crate::fetcher::errors::FetchError;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, header};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = concat!(
    "wikilens/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/wikilens/wikilens)"
);
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .default_headers({
            let mut headers = header::HeaderMap::new();
            headers.insert(
                header::ACCEPT,
                header::HeaderValue::from_static("application/json"),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// GET `url` and decode the body as JSON.
///
/// Non-2xx statuses are errors; the body is not inspected for them.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_json(url: &str) -> Result<Value, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Content-Length is absent for chunked and compressed bodies.
    if body_bytes.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    debug!(status = %status, size = body_bytes.len(), "received response");
    decode_body(&body_bytes)
}

fn decode_body(body: &[u8]) -> Result<Value, FetchError> {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    Ok(serde_json::from_slice(body)?)
}
