//! Utility modules supporting search operations.
//!
//! - [`HttpClient`]: HTTP client shared by the web extractor
//! - [`validate_pattern`], [`validate_sources`]: request validation before any I/O
//! - [`copy_to_clipboard`]: copy a match through the terminal (OSC 52)
//! - [`export_match`]: write a match to a UTF-8 text file
//!
//! # Export
//!
//! ```rust,no_run
//! use wordfinder::utils::export_match;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! export_match(Path::new("match.txt"), "Quick")?;
//! # Ok(())
//! # }
//! ```

mod clipboard;
mod export;
mod http;
mod validate;

pub use clipboard::{build_sequence, copy_to_clipboard, write_sequence, ClipboardError, Osc52Env};
pub use export::{export_match, ExportError};
pub use http::{default_user_agent, HttpClient, DEFAULT_TIMEOUT};
pub use validate::{
    is_blank_path, non_blank, normalize_extension, validate_pattern, validate_sources, ValidationError,
};
