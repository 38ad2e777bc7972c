//! Export a selected match to a text file.

use std::path::Path;
use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing selected to export")]
    EmptySelection,

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write `text` to `path` as UTF-8, byte for byte.
///
/// No newline or other content is appended. An existing file is replaced.
pub fn export_match(path: &Path, text: &str) -> Result<(), ExportError> {
    if text.is_empty() {
        return Err(ExportError::EmptySelection);
    }

    std::fs::write(path, text.as_bytes()).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("Exported {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.txt");

        for text in ["Quick", "naïve café", "line one\nline two", "  padded  "] {
            export_match(&path, text).unwrap();
            assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
        }
    }

    #[test]
    fn test_export_empty_selection() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.txt");

        let err = export_match(&path, "").unwrap_err();
        assert!(matches!(err, ExportError::EmptySelection));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_to_missing_directory() {
        let err = export_match(Path::new("/nonexistent/dir/result.txt"), "Quick").unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
