#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;

use wikilens::extractor::{clean_description, extract_text};
use wikilens::normalizers::{ai, collect_hits, content, dictionary, encyclopedia, media};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data);

    // Text cleaning should never panic regardless of input
    let _ = clean_description(&text);
    let _ = extract_text(&text);

    // Neither should any normalizer, whatever JSON it is handed
    if let Ok(payload) = serde_json::from_slice::<Value>(data) {
        let hits = collect_hits(&payload);
        let _ = encyclopedia::normalize(&hits, &payload);
        let _ = media::normalize(&hits, &payload);
        let _ = dictionary::normalize(&payload, "fuzz");
        let _ = ai::normalize(&payload);
        let _ = content::normalize(&payload);
    }
});
