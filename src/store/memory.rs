//! In-memory document store for testing and embedding.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::DocumentStore;
use crate::domain::AliasDocument;
use crate::error::Result;

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, AliasDocument>>,
}

impl MemoryDocumentStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn fetch_document(&self, store: &str) -> Result<AliasDocument> {
        Ok(self
            .documents
            .read()
            .get(store)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_document(&self, store: &str, document: &AliasDocument) -> Result<()> {
        self.documents
            .write()
            .insert(store.to_string(), document.clone());
        Ok(())
    }
}
