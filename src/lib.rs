//! Client-side access to Wikipedia, Wikimedia Commons and a dictionary service.
//!
//! Every upstream response is walked defensively and normalized into a small
//! set of typed results. Failures never reach the caller: a broken upstream
//! yields an empty result and a `tracing` warning.

pub mod client;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod normalizers;
pub mod recent;
pub mod telemetry;

pub use client::WikiClient;
pub use config::Config;
pub use normalizers::{AiResponse, DictionaryEntry, EncyclopediaResult, MediaResult};
pub use recent::RecentSearches;
