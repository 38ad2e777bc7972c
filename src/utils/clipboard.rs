//! Copy text to the system clipboard through the terminal (OSC 52).
//!
//! Works over SSH and inside tmux without a display server; the terminal
//! emulator owns the clipboard. The sequence is written to stderr, which
//! stays attached to the terminal when stdout is piped.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use std::io::{self, Write};
use thiserror::Error;

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_SUFFIX_BEL: &str = "\x07";

const TMUX_PREFIX: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const TMUX_SUFFIX: &str = "\x07\x1b\\";

// Many terminals apply fairly small OSC52 length limits; keep this conservative.
pub const OSC52_MAX_BYTES: usize = 100 * 1024;

/// Clipboard errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Text too large for the clipboard ({} KB, limit {} KB)", .bytes / 1024, OSC52_MAX_BYTES / 1024)]
    TooLarge { bytes: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal multiplexer context for the escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Osc52Env {
    pub is_tmux: bool,
}

impl Osc52Env {
    pub fn detect() -> Self {
        Self {
            is_tmux: std::env::var_os("TMUX").is_some(),
        }
    }
}

/// Build the escape sequence that sets the clipboard to `text`.
pub fn build_sequence(text: &str, env: Osc52Env) -> Result<String, ClipboardError> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(ClipboardError::TooLarge { bytes: bytes.len() });
    }

    let b64 = B64.encode(bytes);
    if env.is_tmux {
        Ok(format!("{TMUX_PREFIX}{b64}{TMUX_SUFFIX}"))
    } else {
        Ok(format!("{OSC52_PREFIX}{b64}{OSC52_SUFFIX_BEL}"))
    }
}

pub fn write_sequence<W: Write>(mut w: W, text: &str, env: Osc52Env) -> Result<(), ClipboardError> {
    let seq = build_sequence(text, env)?;
    w.write_all(seq.as_bytes())?;
    w.flush()?;
    Ok(())
}

/// Copy the literal text to the clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    write_sequence(io::stderr(), text, Osc52Env::detect())
}
