//! Bundle error types.

use thiserror::Error;

/// Errors surfaced by bundle rendering.
#[derive(Debug, Error)]
pub enum BundleError {
    /// A raw minifier identifier did not match any registered compressor.
    ///
    /// Unreachable through the [`Minifier`](crate::Minifier) enum,
    /// whose identifier mapping is total with a fallback arm.
    #[error("unknown minifier `{0}`")]
    UnknownMinifier(String),

    /// Reading or compressing a specific member file failed. The whole
    /// render is aborted; nothing is cached or written.
    #[error("failed to process `{file}`")]
    FileProcessing {
        file: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Cache lookup for a key that was never rendered. A caller contract
    /// violation: check `contains_key` first or render before reading.
    #[error("bundle `{0}` not found in cache")]
    KeyNotFound(String),

    /// Reading an existing output file for reuse failed
    /// (render-only-if-missing).
    #[error("failed to read existing output `{path}`")]
    OutputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the bundled output file failed.
    #[error("failed to write output `{path}`")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BundleError {
    /// Wrap a per-file failure with the offending file's identifier.
    pub fn file_processing(
        file: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::FileProcessing {
            file: file.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_file_processing_carries_file_and_cause() {
        let err = BundleError::file_processing(
            "scripts/broken.js",
            Error::new(ErrorKind::NotFound, "no such file"),
        );
        assert!(format!("{err}").contains("scripts/broken.js"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_key_not_found_display() {
        let err = BundleError::KeyNotFound("MyBundle".into());
        assert!(format!("{err}").contains("MyBundle"));
    }
}
