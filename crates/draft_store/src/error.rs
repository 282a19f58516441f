use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build draft date format: {0}")]
    DateFormat(#[source] time::error::InvalidFormatDescription),

    #[error("failed to format draft date for filename: {0}")]
    ClockFormat(#[source] time::error::Format),
}

impl DraftStoreError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
