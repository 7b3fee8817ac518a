pub mod client;
pub mod errors;

pub use client::fetch_json;
pub use errors::FetchError;
