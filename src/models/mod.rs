//! Core data models for search requests and outcomes.

mod outcome;
mod request;

pub use outcome::{ExtractionFailure, SearchOutcome, SourceRef};
pub use request::SearchRequest;
