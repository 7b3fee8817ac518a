//! Configuration handling for the lookup client.
//!
//! Endpoints, the search limit and the recent-search storage settings are
//! read from environment variables by [`Config::from_env`], falling back to
//! the public Wikimedia endpoints and a store file in the working directory.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use url::Url;

/// Environment variable names.
pub const ENV_ENCYCLOPEDIA_URL: &str = "WIKILENS_ENCYCLOPEDIA_URL";
pub const ENV_MEDIA_URL: &str = "WIKILENS_MEDIA_URL";
pub const ENV_DICTIONARY_URL: &str = "WIKILENS_DICTIONARY_URL";
pub const ENV_SEARCH_LIMIT: &str = "WIKILENS_SEARCH_LIMIT";
pub const ENV_RECENT_KEY: &str = "WIKILENS_RECENT_KEY";
pub const ENV_RECENT_MAX: &str = "WIKILENS_RECENT_MAX";
pub const ENV_STORE_PATH: &str = "WIKILENS_STORE_PATH";

const DEFAULT_ENCYCLOPEDIA_URL: &str = "https://en.wikipedia.org/w/api.php";
const DEFAULT_MEDIA_URL: &str = "https://commons.wikimedia.org/w/api.php";
const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DEFAULT_SEARCH_LIMIT: u32 = 8;
pub const DEFAULT_RECENT_KEY: &str = "recentSearches";
pub const DEFAULT_RECENT_MAX: usize = 5;
const DEFAULT_STORE_PATH: &str = "wikilens-store.json";

/// Largest `srlimit` sent upstream.
const MAX_SEARCH_LIMIT: u32 = 50;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    encyclopedia_url: Url,
    media_url: Url,
    dictionary_url: Url,
    search_limit: u32,
    recent_key: String,
    recent_max: usize,
    store_path: PathBuf,
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let encyclopedia_url = match env::var(ENV_ENCYCLOPEDIA_URL) {
            Ok(raw) => parse_endpoint("encyclopedia_url", &raw)?,
            Err(_) => defaults.encyclopedia_url,
        };
        let media_url = match env::var(ENV_MEDIA_URL) {
            Ok(raw) => parse_endpoint("media_url", &raw)?,
            Err(_) => defaults.media_url,
        };
        let dictionary_url = match env::var(ENV_DICTIONARY_URL) {
            Ok(raw) => parse_endpoint("dictionary_url", &raw)?,
            Err(_) => defaults.dictionary_url,
        };

        let search_limit = match env::var(ENV_SEARCH_LIMIT) {
            Ok(raw) => {
                let limit: u32 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    field: "search_limit",
                    reason: format!("'{}' is not a positive integer", raw),
                })?;
                if limit == 0 || limit > MAX_SEARCH_LIMIT {
                    return Err(ConfigError::InvalidValue {
                        field: "search_limit",
                        reason: format!("must be between 1 and {}", MAX_SEARCH_LIMIT),
                    });
                }
                limit
            }
            Err(_) => defaults.search_limit,
        };

        let recent_key = match env::var(ENV_RECENT_KEY) {
            Ok(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    field: "recent_key",
                    reason: "must not be empty".to_string(),
                });
            }
            Ok(raw) => raw,
            Err(_) => defaults.recent_key,
        };

        let recent_max = match env::var(ENV_RECENT_MAX) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(max) if max > 0 => max,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "recent_max",
                        reason: format!("'{}' is not a positive integer", raw),
                    });
                }
            },
            Err(_) => defaults.recent_max,
        };

        let store_path = env::var(ENV_STORE_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);

        Ok(Self {
            encyclopedia_url,
            media_url,
            dictionary_url,
            search_limit,
            recent_key,
            recent_max,
            store_path,
        })
    }

    /// Point all three upstreams somewhere else (a mirror, or a mock server).
    pub fn with_endpoints(mut self, encyclopedia: Url, media: Url, dictionary: Url) -> Self {
        self.encyclopedia_url = encyclopedia;
        self.media_url = media;
        self.dictionary_url = dictionary;
        self
    }

    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// MediaWiki `api.php` endpoint for article search and summaries.
    pub fn encyclopedia_url(&self) -> &Url {
        &self.encyclopedia_url
    }
    /// MediaWiki `api.php` endpoint for the media (file namespace) index.
    pub fn media_url(&self) -> &Url {
        &self.media_url
    }
    /// Base URL of the dictionary service; the word is appended as a path segment.
    pub fn dictionary_url(&self) -> &Url {
        &self.dictionary_url
    }
    pub fn search_limit(&self) -> u32 {
        self.search_limit
    }
    /// Storage key holding the recent-search list.
    pub fn recent_key(&self) -> &str {
        &self.recent_key
    }
    pub fn recent_max(&self) -> usize {
        self.recent_max
    }
    /// File backing the persistent key-value store.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encyclopedia_url: default_url(DEFAULT_ENCYCLOPEDIA_URL),
            media_url: default_url(DEFAULT_MEDIA_URL),
            dictionary_url: default_url(DEFAULT_DICTIONARY_URL),
            search_limit: DEFAULT_SEARCH_LIMIT,
            recent_key: DEFAULT_RECENT_KEY.to_string(),
            recent_max: DEFAULT_RECENT_MAX,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

fn default_url(raw: &'static str) -> Url {
    // Compile-time constants, covered by `defaults_when_env_missing`.
    Url::parse(raw).expect("default endpoint is a valid URL")
}

fn parse_endpoint(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
