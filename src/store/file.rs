//! JSON-file document store.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use super::DocumentStore;
use crate::domain::AliasDocument;
use crate::error::{Result, StoreError};
use crate::paths;

/// File-backed document store.
///
/// Each store name maps to `<dir>/<store>.json` holding the whole document.
/// Saves rewrite the file completely; there is no locking, so concurrent
/// writers race and the last save wins.
pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    /// Store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the global data directory (`~/.shorthand`).
    #[must_use]
    pub fn global() -> Self {
        Self::new(paths::home_dir())
    }

    /// The directory the store files live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, store: &str) -> PathBuf {
        self.dir.join(format!("{store}.json"))
    }
}

impl DocumentStore for FileDocumentStore {
    async fn fetch_document(&self, store: &str) -> Result<AliasDocument> {
        let path = self.file_path(store);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(store, path = %path.display(), "store file absent, starting empty");
                return Ok(AliasDocument::new());
            }
            Err(source) => return Err(StoreError::ReadFile { path, source }.into()),
        };

        let document =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed { path, source })?;
        Ok(document)
    }

    async fn save_document(&self, store: &str, document: &AliasDocument) -> Result<()> {
        let path = self.file_path(store);
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StoreError::WriteFile {
                path: self.dir.clone(),
                source,
            })?;

        let content =
            serde_json::to_string_pretty(document).map_err(|source| StoreError::Serialize {
                store: store.to_string(),
                source,
            })?;

        fs::write(&path, content)
            .await
            .map_err(|source| StoreError::WriteFile { path: path.clone(), source })?;

        debug!(store, path = %path.display(), "document saved");
        Ok(())
    }
}
