use anyhow::{Context, Result};
use wikilens::{Config, RecentSearches, WikiClient, telemetry};

/// Runs every lookup for the query given on the command line and records it
/// as a recent search.
///
/// cargo run --example lookup_demo -- "red fox"
#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var_os("WIKILENS_LOG_JSON").is_some() {
        telemetry::init_json_tracing();
    } else {
        telemetry::init_tracing();
    }

    let query = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let config = Config::from_env().context("Failed to load configuration")?;
    let client = WikiClient::new(config.clone());

    let (articles, media, words) = tokio::join!(
        client.search_encyclopedia(&query),
        client.search_media(&query),
        client.lookup_word(&query),
    );

    println!("Articles:");
    for article in &articles {
        println!("  [{}] {} - {}", article.id, article.title, article.description);
    }

    println!("Media:");
    for file in &media {
        println!("  {} ({}, {}) {}", file.title, file.author, file.license, file.image_url);
    }

    println!("Dictionary:");
    for entry in &words {
        println!("  {} ({}) {}", entry.word, entry.part_of_speech, entry.pronunciation);
        for definition in &entry.definitions {
            println!("    - {}", definition);
        }
    }

    if !articles.is_empty() || !media.is_empty() || !words.is_empty() {
        let recent = RecentSearches::from_config(&config).add(&query);
        println!("Recent searches: {}", recent.join(", "));
    }

    Ok(())
}
