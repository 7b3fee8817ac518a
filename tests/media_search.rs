mod helpers;

use helpers::{MEDIA_PATH, test_client};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mount_search(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(MEDIA_PATH))
        .and(query_param("list", "search"))
        .and(query_param("srnamespace", "6"))
        .and(query_param("srsearch", "red fox"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "search": [
                    {"ns": 6, "title": "File:Vulpes vulpes laying in snow.jpg", "pageid": 101, "snippet": "<span class=\"searchmatch\">Red</span> fox in snow"},
                    {"ns": 6, "title": "File:Fox audio.ogg", "pageid": 102, "snippet": "call"},
                    {"ns": 6, "title": "File:Fox drawing.PNG", "pageid": 103, "snippet": ""}
                ]
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_media_search_builds_results() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(MEDIA_PATH))
        .and(query_param("prop", "imageinfo|extracts"))
        .and(query_param("iiprop", "url|size|mime|extmetadata"))
        .and(query_param("pageids", "101|102|103"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {
                "pages": {
                    "101": {
                        "pageid": 101,
                        "imageinfo": [{
                            "url": "https://upload.wikimedia.org/vulpes.jpg",
                            "mime": "image/jpeg",
                            "extmetadata": {
                                "Artist": {"value": "<a href=\"//commons.wikimedia.org/wiki/User:Ray\">Ray &amp; Co</a>", "source": "commons-desc-page"},
                                "License": {"value": "cc-by-sa-3.0"}
                            }
                        }]
                    },
                    "102": {"pageid": 102, "imageinfo": [{"mime": "application/ogg"}]},
                    "103": {
                        "pageid": 103,
                        "imageinfo": [{"url": "https://upload.wikimedia.org/drawing.png", "extmetadata": {}}]
                    }
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = test_client(&mock_server).search_media("red fox").await;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| !r.image_url.is_empty()));

    assert_eq!(results[0].id, "101");
    assert_eq!(results[0].title, "Vulpes vulpes laying in snow");
    assert_eq!(results[0].description, "Red fox in snow");
    assert_eq!(results[0].author, "Ray & Co");
    assert_eq!(results[0].license, "cc-by-sa-3.0");

    assert_eq!(results[1].id, "103");
    assert_eq!(results[1].title, "Fox drawing");
    assert_eq!(results[1].description, "");
    assert_eq!(results[1].author, "Unknown");
    assert_eq!(results[1].license, "Unknown");
}

#[tokio::test]
async fn test_media_search_details_failure_is_empty() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(MEDIA_PATH))
        .and(query_param("prop", "imageinfo|extracts"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(test_client(&mock_server).search_media("red fox").await.is_empty());
}

#[tokio::test]
async fn test_media_search_malformed_search_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MEDIA_PATH))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"query": {"search": "oops"}})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(MEDIA_PATH))
        .and(query_param("prop", "imageinfo|extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    assert!(test_client(&mock_server).search_media("fox").await.is_empty());
}
