//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! Single source of truth for test fixtures; avoids each test module
//! building its own slightly-different seeded stores.

use crate::alias::AliasStore;
use crate::store::MemoryDocumentStore;

/// Empty in-memory alias store over `store_name`.
pub fn memory_store(store_name: &str) -> AliasStore<MemoryDocumentStore> {
    AliasStore::new(MemoryDocumentStore::new(), store_name)
}

/// In-memory alias store seeded with `(group, alias, value)` triples.
pub async fn seeded_store(
    store_name: &str,
    entries: &[(&str, &str, &str)],
) -> AliasStore<MemoryDocumentStore> {
    let store = memory_store(store_name);
    for &(group, alias, value) in entries {
        store
            .update(alias, value, Some(group))
            .await
            .expect("seed alias");
    }
    store
}
