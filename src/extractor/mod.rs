pub mod cleaner;
pub mod reader;

#[cfg(test)]
mod tests;

pub use cleaner::clean_description;
pub use reader::extract_text;
