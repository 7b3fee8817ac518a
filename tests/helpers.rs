#![allow(dead_code)]

use url::Url;
use wikilens::{Config, WikiClient};
use wiremock::MockServer;

pub const ENCYCLOPEDIA_PATH: &str = "/w/api.php";
pub const MEDIA_PATH: &str = "/commons/w/api.php";
pub const DICTIONARY_PATH: &str = "/api/v2/entries/en";

/// Client whose three upstreams all point at `server`.
pub fn test_client(server: &MockServer) -> WikiClient {
    let base = server.uri();
    let endpoint = |path: &str| Url::parse(&format!("{base}{path}")).unwrap();

    WikiClient::new(Config::default().with_endpoints(
        endpoint(ENCYCLOPEDIA_PATH),
        endpoint(MEDIA_PATH),
        endpoint(DICTIONARY_PATH),
    ))
}
