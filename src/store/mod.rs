//! Document store port and backends.

use std::future::Future;

use crate::domain::AliasDocument;
use crate::error::Result;

mod file;
mod memory;

pub use file::FileDocumentStore;
pub use memory::MemoryDocumentStore;

/// Whole-document persistence keyed by store name.
///
/// Backends own the representation and location of each document; callers
/// only ever exchange complete [`AliasDocument`]s.
pub trait DocumentStore: Send + Sync {
    /// Fetch the whole document for `store`. A never-written store name
    /// yields an empty document, never an error.
    fn fetch_document(&self, store: &str) -> impl Future<Output = Result<AliasDocument>> + Send;

    /// Persist the whole document for `store`, creating the backing resource
    /// if absent.
    fn save_document(
        &self,
        store: &str,
        document: &AliasDocument,
    ) -> impl Future<Output = Result<()>> + Send;
}
