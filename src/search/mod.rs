//! Pattern matching and search aggregation.
//!
//! - [`Matcher`]: a compiled, case-insensitive regular expression
//! - [`SearchAggregator`]: runs a [`SearchRequest`](crate::models::SearchRequest)
//!   across a folder of documents and a web page
//!
//! ```rust,no_run
//! use wordfinder::config::Settings;
//! use wordfinder::models::SearchRequest;
//! use wordfinder::search::SearchAggregator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let aggregator = SearchAggregator::from_settings(&Settings::default())?;
//! let request = SearchRequest::new("quick").folder("./letters");
//! let outcome = aggregator.run_search(&request).await?;
//! for failure in &outcome.failures {
//!     eprintln!("warning: {}", failure);
//! }
//! println!("{} matches", outcome.len());
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod matcher;

pub use aggregator::{list_documents, SearchAggregator, DEFAULT_EXTENSION};
pub use matcher::{search, Matcher, PatternError};

use crate::utils::ValidationError;

/// Errors that stop a search before any source is read
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request is missing a pattern or a source
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The pattern is not a valid regular expression
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
