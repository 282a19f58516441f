use std::fs;
use std::path::{Path, PathBuf};

use time::{Date, OffsetDateTime};

use crate::error::DraftStoreError;
use crate::paths::draft_file_name;

/// Writes confirmed session text into dated files under a root directory.
///
/// Each new safepoint overwrites the current day's file; there is no append
/// mode and no history beyond one file per calendar day.
pub struct DraftStore {
    root: PathBuf,
}

impl DraftStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, DraftStoreError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|source| DraftStoreError::io("creating draft directory", &root, source))?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `content` as today's draft, replacing any previous write for the
    /// same date. Returns the path written.
    pub fn write_draft(&self, content: &str) -> Result<PathBuf, DraftStoreError> {
        self.write_draft_for(today(), content)
    }

    /// Date-explicit variant used by `write_draft` and by tests that need a
    /// stable filename.
    pub fn write_draft_for(&self, date: Date, content: &str) -> Result<PathBuf, DraftStoreError> {
        let path = self.root.join(draft_file_name(date)?);
        fs::write(&path, content)
            .map_err(|source| DraftStoreError::io("writing draft", &path, source))?;
        Ok(path)
    }

    /// Reads back the draft for `date`, if one exists.
    pub fn read_draft_for(&self, date: Date) -> Result<Option<String>, DraftStoreError> {
        let path = self.root.join(draft_file_name(date)?);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(DraftStoreError::io("reading draft", &path, source)),
        }
    }
}

/// Local calendar date when the platform exposes the local offset, UTC
/// otherwise. Drafts must never fail to write on clock trouble alone.
fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
