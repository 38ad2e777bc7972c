//! Case-insensitive regular expression matching.
//!
//! [`Matcher::new`] treats the pattern as a regular expression, so `.`, `(`
//! and `?` are metacharacters. [`Matcher::literal`] escapes them first.
//!
//! The dialect is the [`regex`] crate's: Perl-style classes, repetition,
//! groups and inline flags, with linear-time matching. Look-around
//! (`(?=..)`, `(?<=..)`) and backreferences (`\1`) are not supported and
//! are reported as [`PatternError::Invalid`].

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Pattern compilation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid search pattern '{pattern}': {reason}")]
    Invalid { pattern: String, reason: String },
}

/// A compiled search pattern
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile `pattern` as a case-insensitive regular expression
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| PatternError::Invalid {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { regex })
    }

    /// Compile `text` as a literal, case-insensitive pattern
    pub fn literal(text: &str) -> Result<Self, PatternError> {
        Self::new(&regex::escape(text))
    }

    /// The pattern source
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Every non-overlapping match in `text`, left to right.
    ///
    /// Each entry is the whole matched text; capture groups are ignored.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Compile `pattern` and return every match in `text`.
pub fn search(text: &str, pattern: &str) -> Result<Vec<String>, PatternError> {
    Ok(Matcher::new(pattern)?.find_all(text))
}
