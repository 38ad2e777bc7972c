//! CLI UI utilities for terminal output.
//!
//! Status messages go to stderr so stdout only ever carries results;
//! colors are used only when stderr is a terminal.

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::time::Duration;

use crate::models::SourceRef;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
        Status::Search => "🔍",
    }
}

/// Icons for the kinds of search source.
pub fn source_icon(source: &SourceRef) -> &'static str {
    match source {
        SourceRef::Document(_) => "📄",
        SourceRef::Folder(_) => "📁",
        SourceRef::Url(_) => "🌐",
    }
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
    Search,
}

/// Format a status line, colored when `color` is set.
pub fn format_status(status: Status, msg: &str, color: bool) -> String {
    let icon = status_icon(status);
    if !color {
        return format!("{} {}", icon, msg);
    }
    match status {
        Status::Success => format!("{} {}", icon.green().bold(), msg),
        Status::Error => format!("{} {}", icon.red().bold(), msg.red()),
        Status::Warning => format!("{} {}", icon.yellow().bold(), msg),
        Status::Info => format!("{} {}", icon.cyan().bold(), msg),
        Status::Search => format!("{} {}", icon.yellow(), msg),
    }
}

/// Print a styled status message to stderr.
pub fn print_status(status: Status, msg: &str) {
    eprintln!("{}", format_status(status, msg, stderr_is_terminal()));
}

/// Print a warning for a source that was skipped.
pub fn print_source_warning(source: &SourceRef, msg: &str) {
    print_status(Status::Warning, &format!("{} {}", source_icon(source), msg));
}

/// Print search results header.
pub fn print_search_header(pattern: &str, count: usize, duration: Duration) {
    let color = stderr_is_terminal();
    let summary = format!(
        "Found {} matches for \"{}\" in {:.2}s",
        count,
        pattern,
        duration.as_secs_f64()
    );
    let line = if color {
        format!(
            "{} {}",
            status_icon(Status::Search).yellow().bold(),
            summary.bold()
        )
    } else {
        format!("{} {}", status_icon(Status::Search), summary)
    };
    eprintln!("{}", line);
}

/// Make a match printable on a single line.
///
/// Tabs, line breaks and other control characters are shown as escapes;
/// everything else is left as-is.
pub fn single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    out
}
