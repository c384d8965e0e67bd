//! Shorthand - named aliases for long identifiers.
//!
//! This crate lets a CLI user refer to long identifiers (organization IDs,
//! resource names, connection strings) by short memorable names. Aliases are
//! partitioned into named groups and persisted as one JSON document per store
//! name through a pluggable backend.
//!
//! # Architecture
//!
//! The crate separates the alias semantics from persistence:
//!
//! - **[`alias::AliasStore`]** - the registry itself. Enforces
//!   value-uniqueness within a group (setting an alias to a value another
//!   alias already carries removes the other alias) and mediates every
//!   mutation as a whole-document read-modify-write.
//! - **[`store::DocumentStore`]** - the persistence port. Two operations:
//!   fetch the whole document for a store name, save it back.
//! - **[`store::FileDocumentStore`]** - JSON file per store name under
//!   `~/.shorthand/`.
//! - **[`store::MemoryDocumentStore`]** - in-memory backend for tests and
//!   embedding.
//!
//! # Modules
//!
//! - [`alias`] - Alias registry operations
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Pure document model: values, groups, documents
//! - [`error`] - Error types for the crate
//! - [`paths`] - Global data directory resolution
//! - [`store`] - Document store port and backends
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use shorthand::alias::AliasStore;
//! use shorthand::store::FileDocumentStore;
//!
//! # async fn demo() -> shorthand::error::Result<()> {
//! let store = AliasStore::new(FileDocumentStore::global(), "aliases");
//! store.update("prod", "00Dxx0000001gERa", None).await?;
//! let name = store.by_value("00Dxx0000001gERa", None).await?;
//! assert_eq!(name.as_deref(), Some("prod"));
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod paths;
pub mod store;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
