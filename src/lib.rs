//! # wordfinder
//!
//! Search a word, phrase or regular expression across a folder of Word
//! documents and the text of a single web page.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Request and outcome types (SearchRequest, SearchOutcome, etc.)
//! - [`extract`]: Text extractors for `.docx` files and web pages
//! - [`search`]: Pattern matching and the search aggregator
//! - [`utils`]: HTTP client, input validation, clipboard and export sinks
//! - [`config`]: Configuration management
//! - [`ui`]: Styled terminal messages for the CLI

pub mod config;
pub mod extract;
pub mod models;
pub mod search;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use models::{SearchOutcome, SearchRequest};
pub use search::{SearchAggregator, SearchError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
